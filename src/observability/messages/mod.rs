// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the pipeline's own diagnostics.
//!
//! * `subscriber` - job event processing outcomes
//! * `config` - configuration loading and formatter availability
//! * `sink` - sink write failures
//!
//! # Usage Pattern
//!
//! ```rust
//! use jobscribe::observability::messages::{subscriber::JobEventProcessed, StructuredLog};
//!
//! let msg = JobEventProcessed {
//!     state: "perform",
//!     job_id: "42",
//!     formatter: "logstash",
//! };
//!
//! msg.log();
//! ```

pub mod config;
pub mod sink;
pub mod subscriber;

use tracing::Span;

/// A message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its documented level.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
