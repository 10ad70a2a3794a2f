// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record formatters.
//!
//! Each formatter implements [`Formatter`] and is picked once, at
//! configuration time, through [`FormatterFactory`]:
//!
//! * `logstash` - Logstash event JSON (behind the `logstash` cargo feature)
//! * `json` - the record as a JSON object
//! * `key_value` - space-separated `key=value` pairs
//! * `plain` - the human-readable message line only

mod json;
mod key_value;
#[cfg(feature = "logstash")]
mod logstash;
mod plain;

pub use json::JsonFormatter;
pub use key_value::KeyValueFormatter;
#[cfg(feature = "logstash")]
pub use logstash::LogstashFormatter;
pub use plain::PlainFormatter;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::ConfigError;
use crate::record::LogRecord;
use crate::traits::Formatter;
use crate::utils::display_value;

/// Formatter selection as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatterKind {
    #[default]
    Logstash,
    Json,
    KeyValue,
    Plain,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Logstash => "logstash",
            FormatterKind::Json => "json",
            FormatterKind::KeyValue => "key_value",
            FormatterKind::Plain => "plain",
        }
    }
}

/// Builds formatter instances from their configured kind.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Create the formatter for `kind`.
    ///
    /// Fails with [`ConfigError::FormatterUnavailable`] when the formatter was
    /// not compiled into this build; the remediation is logged before
    /// returning.
    pub fn create(kind: FormatterKind) -> Result<Arc<dyn Formatter>, ConfigError> {
        match kind {
            FormatterKind::Logstash => Self::create_logstash(),
            FormatterKind::Json => Ok(Arc::new(JsonFormatter::new())),
            FormatterKind::KeyValue => Ok(Arc::new(KeyValueFormatter::new())),
            FormatterKind::Plain => Ok(Arc::new(PlainFormatter::new())),
        }
    }

    #[cfg(feature = "logstash")]
    fn create_logstash() -> Result<Arc<dyn Formatter>, ConfigError> {
        Ok(Arc::new(LogstashFormatter::new()))
    }

    #[cfg(not(feature = "logstash"))]
    fn create_logstash() -> Result<Arc<dyn Formatter>, ConfigError> {
        use crate::observability::messages::{config::FormatterDependencyMissing, StructuredLog};

        let formatter = FormatterKind::Logstash.as_str();
        let remedy = "rebuild jobscribe with `--features logstash` to use the logstash output";
        FormatterDependencyMissing { formatter, remedy }.log();
        Err(ConfigError::FormatterUnavailable { formatter, remedy })
    }

    /// Formatters compiled into this build.
    pub fn list_available() -> Vec<FormatterKind> {
        let mut kinds = Vec::new();
        if cfg!(feature = "logstash") {
            kinds.push(FormatterKind::Logstash);
        }
        kinds.extend([FormatterKind::Json, FormatterKind::KeyValue, FormatterKind::Plain]);
        kinds
    }

    pub fn is_available(kind: FormatterKind) -> bool {
        Self::list_available().contains(&kind)
    }
}

/// `[status] method path (controller#action)` for request-style records.
pub fn controller_message(record: &LogRecord) -> String {
    let field = |key: &str| record.get(key).map(display_value).unwrap_or_default();
    format!(
        "[{}] {} {} ({}#{})",
        field("status"),
        field("method"),
        field("path"),
        field("controller"),
        field("action")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_controller_message() {
        let record: LogRecord = [
            ("method", json!("GET")),
            ("path", json!("/users")),
            ("controller", json!("UsersController")),
            ("action", json!("index")),
            ("status", json!(200)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            controller_message(&record),
            "[200] GET /users (UsersController#index)"
        );
    }

    #[test]
    fn test_controller_message_missing_fields() {
        assert_eq!(controller_message(&LogRecord::new()), "[]   (#)");
    }

    #[test]
    fn test_factory_creates_named_formatters() {
        assert_eq!(FormatterFactory::create(FormatterKind::Json).unwrap().name(), "json");
        assert_eq!(
            FormatterFactory::create(FormatterKind::KeyValue).unwrap().name(),
            "key_value"
        );
        assert_eq!(FormatterFactory::create(FormatterKind::Plain).unwrap().name(), "plain");
    }

    #[cfg(feature = "logstash")]
    #[test]
    fn test_factory_creates_logstash() {
        assert!(FormatterFactory::is_available(FormatterKind::Logstash));
        assert_eq!(
            FormatterFactory::create(FormatterKind::Logstash).unwrap().name(),
            "logstash"
        );
    }

    #[cfg(not(feature = "logstash"))]
    #[test]
    fn test_factory_rejects_missing_logstash() {
        assert!(!FormatterFactory::is_available(FormatterKind::Logstash));
        let Err(err) = FormatterFactory::create(FormatterKind::Logstash) else {
            panic!("logstash formatter should be unavailable");
        };
        assert!(matches!(err, ConfigError::FormatterUnavailable { formatter: "logstash", .. }));
        assert!(err.to_string().contains("--features logstash"));
    }

    #[test]
    fn test_kind_deserializes_snake_case() {
        let kind: FormatterKind = serde_json::from_value(json!("key_value")).unwrap();
        assert_eq!(kind, FormatterKind::KeyValue);
        assert_eq!(FormatterKind::default(), FormatterKind::Logstash);
    }
}
