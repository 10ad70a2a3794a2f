// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::controller_message;
use crate::errors::FormatError;
use crate::record::{LogRecord, HEADERS, MESSAGE};
use crate::traits::{Formatter, CONTROLLER_KIND, JOB_KIND};

/// Logstash event formatter: one JSON object per line.
///
/// A `headers` field that is not a mapping is dropped. The top-level
/// `message` is the controller line for request records and the record's own
/// message for job records.
#[derive(Debug, Default)]
pub struct LogstashFormatter;

impl LogstashFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for LogstashFormatter {
    fn format(&self, record: &LogRecord, kind: &str) -> Result<String, FormatError> {
        let mut event = record.clone();

        if event.get(HEADERS).is_some_and(|headers| !headers.is_object()) {
            event.remove(HEADERS);
        }

        match kind {
            CONTROLLER_KIND => {
                event.insert(MESSAGE, controller_message(record));
            }
            JOB_KIND => {
                event.insert(MESSAGE, record.get(MESSAGE).cloned().unwrap_or(Value::Null));
            }
            _ => {}
        }

        Ok(serde_json::to_string(&event)?)
    }

    fn name(&self) -> &'static str {
        "logstash"
    }
}
