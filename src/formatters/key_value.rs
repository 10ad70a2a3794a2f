// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::errors::FormatError;
use crate::record::LogRecord;
use crate::traits::Formatter;
use crate::utils::display_value;

/// Space-separated `key=value` pairs in record order.
///
/// Floats are written with two decimals and `error` values are single-quoted.
/// Sequences and mappings are written as compact JSON.
#[derive(Debug, Default)]
pub struct KeyValueFormatter;

impl KeyValueFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_value(key: &str, value: &Value) -> String {
        if key == "error" {
            return format!("'{}'", display_value(value));
        }
        match value {
            Value::Number(n) if n.is_f64() => format!("{:.2}", n.as_f64().unwrap_or_default()),
            other => display_value(other),
        }
    }
}

impl Formatter for KeyValueFormatter {
    fn format(&self, record: &LogRecord, _kind: &str) -> Result<String, FormatError> {
        Ok(record
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::format_value(key, value)))
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn name(&self) -> &'static str {
        "key_value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::JOB_KIND;
    use serde_json::json;

    #[test]
    fn test_formats_pairs() {
        let record: LogRecord = [
            ("job_id", json!("42")),
            ("job_args", json!([{"a": 1}])),
            ("duration", json!(7.5)),
            ("state", json!("perform")),
            ("tags", json!(["job"])),
            ("queue_name", json!(null)),
        ]
        .into_iter()
        .collect();

        let line = KeyValueFormatter::new().format(&record, JOB_KIND).unwrap();

        assert_eq!(
            line,
            r#"job_id=42 job_args=[{"a":1}] duration=7.50 state=perform tags=["job"] queue_name="#
        );
    }

    #[test]
    fn test_error_is_quoted() {
        let record: LogRecord = [("error", json!("Timeout: upstream"))].into_iter().collect();

        let line = KeyValueFormatter::new().format(&record, JOB_KIND).unwrap();

        assert_eq!(line, "error='Timeout: upstream'");
    }
}
