// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors returned by the job subscriber.
//!
//! A record that cannot be assembled points at a broken event source, so these
//! go back to the caller rather than being logged and dropped.

use thiserror::Error;

use super::FormatError;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// A completion event arrived without a duration.
    #[error("perform event for job '{}' carries no duration", .job_id.as_deref().unwrap_or(""))]
    MissingDuration { job_id: Option<String> },

    /// A scheduled enqueue arrived without a scheduled time.
    #[error("enqueue_at event for job '{}' carries no scheduled time", .job_id.as_deref().unwrap_or(""))]
    MissingScheduledAt { job_id: Option<String> },

    /// A serialized event did not decode.
    #[error("invalid event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    /// The configured formatter failed.
    #[error(transparent)]
    Format(#[from] FormatError),
}
