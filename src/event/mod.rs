// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Job lifecycle events as delivered by the host event bus.
//!
//! A [`LifecycleEvent`] pairs an [`EventKind`] with an [`EventPayload`]. The
//! payload carries the [`JobRef`] plus the kind-specific extras (duration for
//! completions, an exception for any kind, a scheduled time for scheduled
//! enqueues). Events are owned by a single dispatch call and consumed by it.
//!
//! # Wire shape
//! ```json
//! {
//!   "kind": "perform",
//!   "payload": {
//!     "job": {
//!       "job_id": "42",
//!       "queue_name": "mailers",
//!       "class_name": "SendEmail",
//!       "arguments": [{"_aj_globalid": "gid://app/User/1"}, {"password": "secret"}]
//!     },
//!     "duration": 7.891
//!   }
//! }
//! ```

mod argument;

pub use argument::{JobArgument, GLOBAL_ID_KEY};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four lifecycle occurrences of a background job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Enqueue,
    EnqueueAt,
    PerformStart,
    Perform,
}

impl EventKind {
    /// Tag name written to the record's `state` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Enqueue => "enqueue",
            EventKind::EnqueueAt => "enqueue_at",
            EventKind::PerformStart => "perform_start",
            EventKind::Perform => "perform",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the job an event is about.
///
/// Identifier and queue are optional: a job missing either still produces a
/// record, with the field left null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRef {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub queue_name: Option<String>,
    pub class_name: String,
    #[serde(default)]
    pub arguments: Vec<JobArgument>,
}

impl JobRef {
    pub fn new(
        job_id: impl Into<String>,
        queue_name: impl Into<String>,
        class_name: impl Into<String>,
        arguments: Vec<JobArgument>,
    ) -> Self {
        Self {
            job_id: Some(job_id.into()),
            queue_name: Some(queue_name.into()),
            class_name: class_name.into(),
            arguments,
        }
    }
}

/// Event payload: the job plus the optional, kind-specific extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub job: JobRef,
    /// Wall-clock duration in milliseconds (completion events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Exception information, copied verbatim into the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<serde_json::Value>,
    /// Time the job is scheduled to run (scheduled enqueues).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl EventPayload {
    pub fn new(job: JobRef) -> Self {
        Self {
            job,
            duration: None,
            exception: None,
            scheduled_at: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn with_exception(mut self, exception: serde_json::Value) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn with_scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self
    }
}

/// A single lifecycle notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub kind: EventKind,
    pub payload: EventPayload,
}

impl LifecycleEvent {
    pub fn new(kind: EventKind, payload: EventPayload) -> Self {
        Self { kind, payload }
    }

    pub fn job(&self) -> &JobRef {
        &self.payload.job
    }
}
