// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for job event processing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A lifecycle event was turned into a record and handed to the sink.
///
/// # Log Level
/// `debug!` - Per-event detail
///
/// # Example
/// ```
/// use jobscribe::observability::messages::subscriber::JobEventProcessed;
///
/// let msg = JobEventProcessed {
///     state: "enqueue",
///     job_id: "42",
///     formatter: "json",
/// };
///
/// assert_eq!(msg.to_string(), "Processed enqueue event for job '42' with json formatter");
/// ```
pub struct JobEventProcessed<'a> {
    pub state: &'a str,
    pub job_id: &'a str,
    pub formatter: &'a str,
}

impl Display for JobEventProcessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed {} event for job '{}' with {} formatter",
            self.state, self.job_id, self.formatter
        )
    }
}

impl StructuredLog for JobEventProcessed<'_> {
    fn log(&self) {
        tracing::debug!(
            state = self.state,
            job_id = self.job_id,
            formatter = self.formatter,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "job_event",
            span_name = name,
            state = self.state,
            job_id = self.job_id,
            formatter = self.formatter,
        )
    }
}

/// A lifecycle event could not be turned into a record.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use jobscribe::observability::messages::subscriber::JobEventRejected;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "no duration");
/// let msg = JobEventRejected {
///     state: "perform",
///     job_class: "SendEmail",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Rejected perform event for SendEmail: no duration");
/// ```
pub struct JobEventRejected<'a> {
    pub state: &'a str,
    pub job_class: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for JobEventRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected {} event for {}: {}",
            self.state, self.job_class, self.error
        )
    }
}

impl StructuredLog for JobEventRejected<'_> {
    fn log(&self) {
        tracing::error!(
            state = self.state,
            job_class = self.job_class,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "job_event",
            span_name = name,
            state = self.state,
            job_class = self.job_class,
        )
    }
}

/// A serialized event could not be decoded and was skipped.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use jobscribe::observability::messages::subscriber::EventLineInvalid;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "expected value");
/// let msg = EventLineInvalid {
///     line: "{not json",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Skipped undecodable event '{not json': expected value");
/// ```
pub struct EventLineInvalid<'a> {
    pub line: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EventLineInvalid<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipped undecodable event '{}': {}", self.line, self.error)
    }
}

impl StructuredLog for EventLineInvalid<'_> {
    fn log(&self) {
        tracing::error!(line = self.line, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("job_event", span_name = name, line = self.line)
    }
}
