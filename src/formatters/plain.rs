// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::controller_message;
use crate::errors::FormatError;
use crate::record::{LogRecord, MESSAGE};
use crate::traits::{Formatter, CONTROLLER_KIND};
use crate::utils::display_value;

/// Emits only the human-readable line.
#[derive(Debug, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for PlainFormatter {
    fn format(&self, record: &LogRecord, kind: &str) -> Result<String, FormatError> {
        if kind == CONTROLLER_KIND {
            return Ok(controller_message(record));
        }
        Ok(record.get(MESSAGE).map(display_value).unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
