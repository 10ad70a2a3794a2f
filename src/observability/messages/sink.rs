// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for log sink failures.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A sink failed to write a line; the line is lost.
///
/// # Log Level
/// `warn!` - Degraded behavior
///
/// # Example
/// ```
/// use jobscribe::observability::messages::sink::SinkWriteFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
/// let msg = SinkWriteFailed {
///     sink: "writer",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Sink 'writer' failed to write line: closed");
/// ```
pub struct SinkWriteFailed<'a> {
    pub sink: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SinkWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Sink '{}' failed to write line: {}", self.sink, self.error)
    }
}

impl StructuredLog for SinkWriteFailed<'_> {
    fn log(&self) {
        tracing::warn!(sink = self.sink, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("sink", span_name = name, sink = self.sink)
    }
}
