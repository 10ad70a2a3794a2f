// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer, Serialize};

/// Key under which a serialized job argument carries its global identifier.
pub const GLOBAL_ID_KEY: &str = "_aj_globalid";

/// A single job argument.
///
/// Arguments that reference a persisted entity are `Identified` and are logged
/// by their global identifier. Everything else is `Plain` JSON: scalars,
/// mappings, sequences, and arbitrarily nested combinations of them.
///
/// Deserialization picks `Identified` only for an object whose sole key is
/// [`GLOBAL_ID_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JobArgument {
    Identified {
        #[serde(rename = "_aj_globalid")]
        global_id: String,
    },
    Plain(serde_json::Value),
}

impl JobArgument {
    pub fn identified(global_id: impl Into<String>) -> Self {
        JobArgument::Identified {
            global_id: global_id.into(),
        }
    }

    /// Global identifier, if this argument exposes one.
    pub fn global_id(&self) -> Option<&str> {
        match self {
            JobArgument::Identified { global_id } => Some(global_id),
            JobArgument::Plain(_) => None,
        }
    }

    /// Mutable access to the argument as a mapping, if it is one.
    pub(crate) fn as_mapping_mut(
        &mut self,
    ) -> Option<&mut serde_json::Map<String, serde_json::Value>> {
        match self {
            JobArgument::Plain(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Value written to the record's `job_args`; `None` for absent arguments.
    pub fn log_value(&self) -> Option<serde_json::Value> {
        match self {
            JobArgument::Identified { global_id } => {
                Some(serde_json::Value::String(global_id.clone()))
            }
            JobArgument::Plain(serde_json::Value::Null) => None,
            JobArgument::Plain(value) => Some(value.clone()),
        }
    }
}

impl<'de> Deserialize<'de> for JobArgument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if let serde_json::Value::Object(map) = &value {
            if map.len() == 1 {
                if let Some(serde_json::Value::String(global_id)) = map.get(GLOBAL_ID_KEY) {
                    return Ok(JobArgument::identified(global_id.clone()));
                }
            }
        }
        Ok(JobArgument::Plain(value))
    }
}

impl From<serde_json::Value> for JobArgument {
    fn from(value: serde_json::Value) -> Self {
        JobArgument::Plain(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_global_id_only_for_identified() {
        let user = JobArgument::identified("gid://app/User/7");
        assert_eq!(user.global_id(), Some("gid://app/User/7"));
        assert_eq!(JobArgument::from(json!("plain")).global_id(), None);
    }

    #[test]
    fn test_object_with_extra_keys_stays_plain() {
        let arg: JobArgument =
            serde_json::from_value(json!({"_aj_globalid": "gid://app/User/7", "x": 1})).unwrap();
        assert!(matches!(arg, JobArgument::Plain(_)));
    }

    #[test]
    fn test_log_value() {
        assert_eq!(
            JobArgument::identified("gid://app/Post/3").log_value(),
            Some(json!("gid://app/Post/3"))
        );
        assert_eq!(JobArgument::from(json!({"a": 1})).log_value(), Some(json!({"a": 1})));
        assert_eq!(JobArgument::from(json!(null)).log_value(), None);
        assert_eq!(JobArgument::from(json!(false)).log_value(), Some(json!(false)));
    }

    #[test]
    fn test_identified_serializes_back_to_wire_shape() {
        let value = serde_json::to_value(JobArgument::identified("gid://app/User/1")).unwrap();
        assert_eq!(value, json!({"_aj_globalid": "gid://app/User/1"}));
    }
}
