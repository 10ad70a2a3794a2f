// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FormatError;
use crate::record::LogRecord;

/// Record kind tag for job lifecycle records.
pub const JOB_KIND: &str = "job";
/// Record kind tag for request/controller records.
pub const CONTROLLER_KIND: &str = "controller";

/// Serializes a record into a single wire-ready line.
///
/// `kind` names the record's domain ([`JOB_KIND`] or [`CONTROLLER_KIND`]);
/// formatters may shape their output by it.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord, kind: &str) -> Result<String, FormatError>;

    fn name(&self) -> &'static str;
}
