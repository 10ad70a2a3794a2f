// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FormatError;
use crate::record::LogRecord;
use crate::traits::Formatter;

/// Serializes the record as-is into a JSON object.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord, _kind: &str) -> Result<String, FormatError> {
        Ok(serde_json::to_string(record)?)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
