// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Redaction of sensitive fields inside job arguments.
//!
//! The scan is bounded to three levels below the argument list:
//!
//! ```text
//! argument (mapping)
//!   └─ value (mapping)
//!        └─ value (sequence)
//!             └─ element (mapping)
//! ```
//!
//! At each of those positions a filtered key with a truthy value is replaced
//! with [`FILTERED`]. Anything nested deeper is left as is, as are top-level
//! arguments that are not mappings.
//!
//! # Example
//! ```
//! use jobscribe::event::JobArgument;
//! use jobscribe::redaction::{redact, FilteredFields};
//! use serde_json::json;
//!
//! let fields = FilteredFields::new(["password"]);
//! let mut args = vec![JobArgument::from(json!({"user": "ann", "password": "hunter2"}))];
//!
//! redact(&mut args, &fields);
//!
//! assert_eq!(args[0], JobArgument::from(json!({"user": "ann", "password": "FILTERED"})));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::event::JobArgument;
use crate::utils::is_truthy;

/// Sentinel written over a redacted value.
pub const FILTERED: &str = "FILTERED";

/// Immutable set of field names whose values must not reach the logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilteredFields(BTreeSet<String>);

impl FilteredFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FilteredFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Redact every filtered field in `arguments`, in place.
pub fn redact(arguments: &mut [JobArgument], fields: &FilteredFields) {
    for field in fields.iter() {
        for argument in arguments.iter_mut() {
            let Some(mapping) = argument.as_mapping_mut() else {
                continue;
            };
            redact_key(mapping, field);

            for value in mapping.values_mut() {
                let Value::Object(nested) = value else {
                    continue;
                };
                redact_key(nested, field);

                for params in nested.values_mut() {
                    let Value::Array(items) = params else {
                        continue;
                    };
                    for item in items.iter_mut() {
                        if let Value::Object(param) = item {
                            redact_key(param, field);
                        }
                    }
                }
            }
        }
    }
}

fn redact_key(mapping: &mut Map<String, Value>, field: &str) {
    if let Some(value) = mapping.get_mut(field) {
        if is_truthy(value) {
            *value = Value::String(FILTERED.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(values: Vec<Value>) -> Vec<JobArgument> {
        values.into_iter().map(JobArgument::from).collect()
    }

    #[test]
    fn test_redacts_all_three_levels() {
        let fields = FilteredFields::new(["password"]);
        let mut arguments = args(vec![json!({
            "password": "secret",
            "nested": {"password": "x", "list": [{"password": "y"}]}
        })]);

        redact(&mut arguments, &fields);

        assert_eq!(
            arguments,
            args(vec![json!({
                "password": "FILTERED",
                "nested": {"password": "FILTERED", "list": [{"password": "FILTERED"}]}
            })])
        );
    }

    #[test]
    fn test_leaves_other_keys_untouched() {
        let fields = FilteredFields::new(["token"]);
        let mut arguments = args(vec![json!({"token": "abc", "user_id": 5, "note": "token"})]);

        redact(&mut arguments, &fields);

        assert_eq!(
            arguments,
            args(vec![json!({"token": "FILTERED", "user_id": 5, "note": "token"})])
        );
    }

    #[test]
    fn test_skips_non_mapping_arguments() {
        let fields = FilteredFields::new(["password"]);
        let original = args(vec![
            json!("password"),
            json!(["password", {"password": "x"}]),
            json!(42),
            json!(null),
        ]);
        let mut arguments = original.clone();

        redact(&mut arguments, &fields);

        assert_eq!(arguments, original);
    }

    #[test]
    fn test_does_not_reach_fourth_level() {
        let fields = FilteredFields::new(["password"]);
        let original = args(vec![json!({
            "outer": {"list": [{"inner": {"password": "deep"}}]}
        })]);
        let mut arguments = original.clone();

        redact(&mut arguments, &fields);

        assert_eq!(arguments, original);
    }

    #[test]
    fn test_sequence_directly_under_argument_is_not_scanned() {
        let fields = FilteredFields::new(["password"]);
        let original = args(vec![json!({"list": [{"password": "y"}]})]);
        let mut arguments = original.clone();

        redact(&mut arguments, &fields);

        assert_eq!(arguments, original);
    }

    #[test]
    fn test_falsy_values_are_kept() {
        let fields = FilteredFields::new(["password"]);
        let original = args(vec![json!({"password": null, "nested": {"password": false}})]);
        let mut arguments = original.clone();

        redact(&mut arguments, &fields);

        assert_eq!(arguments, original);
    }

    #[test]
    fn test_empty_string_is_truthy() {
        let fields = FilteredFields::new(["password"]);
        let mut arguments = args(vec![json!({"password": ""})]);

        redact(&mut arguments, &fields);

        assert_eq!(arguments, args(vec![json!({"password": "FILTERED"})]));
    }

    #[test]
    fn test_filtered_mapping_value_replaced_whole() {
        let fields = FilteredFields::new(["credentials"]);
        let mut arguments = args(vec![json!({"credentials": {"user": "a", "pass": "b"}})]);

        redact(&mut arguments, &fields);

        assert_eq!(arguments, args(vec![json!({"credentials": "FILTERED"})]));
    }

    #[test]
    fn test_multiple_fields() {
        let fields = FilteredFields::new(["password", "ssn"]);
        let mut arguments = args(vec![
            json!({"password": "p", "profile": {"ssn": "123"}}),
            json!({"ssn": "456", "name": "bo"}),
        ]);

        redact(&mut arguments, &fields);

        assert_eq!(
            arguments,
            args(vec![
                json!({"password": "FILTERED", "profile": {"ssn": "FILTERED"}}),
                json!({"ssn": "FILTERED", "name": "bo"}),
            ])
        );
    }

    #[test]
    fn test_identified_arguments_are_skipped() {
        let fields = FilteredFields::new(["_aj_globalid"]);
        let mut arguments = vec![JobArgument::identified("gid://app/User/1")];

        redact(&mut arguments, &fields);

        assert_eq!(arguments, vec![JobArgument::identified("gid://app/User/1")]);
    }

    #[test]
    fn test_no_fields_is_a_no_op() {
        let original = args(vec![json!({"password": "secret"})]);
        let mut arguments = original.clone();

        redact(&mut arguments, &FilteredFields::default());

        assert_eq!(arguments, original);
    }

    #[test]
    fn test_filtered_fields_deserialize_from_list() {
        let fields: FilteredFields = serde_json::from_value(json!(["b", "a", "b"])).unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains("a"));
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
