// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::sink::Severity;

/// Destination for formatted log lines.
///
/// Writes are fire-and-forget: a sink deals with its own failures.
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, line: &str);
}
