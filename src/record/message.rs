// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Human-readable `message` lines for job records.
//!
//! One type per lifecycle kind, each rendering its fixed template through
//! `Display`. A missing job id or queue renders as an empty string.
//!
//! # Example
//! ```
//! use jobscribe::record::message::JobEnqueued;
//!
//! let msg = JobEnqueued {
//!     job_class: "SendEmail",
//!     job_id: "42",
//!     queue_name: "mailers",
//! };
//!
//! assert_eq!(msg.to_string(), "Enqueued SendEmail (Job ID: 42) to mailers");
//! ```

use std::fmt::{Display, Formatter};

use crate::utils::display_float;

/// `Enqueued {class} (Job ID: {id}) to {queue}`
pub struct JobEnqueued<'a> {
    pub job_class: &'a str,
    pub job_id: &'a str,
    pub queue_name: &'a str,
}

impl Display for JobEnqueued<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Enqueued {} (Job ID: {}) to {}",
            self.job_class, self.job_id, self.queue_name
        )
    }
}

/// `Enqueued {class} (Job ID: {id}) to {queue} at {scheduled_at}`
pub struct JobEnqueuedAt<'a> {
    pub job_class: &'a str,
    pub job_id: &'a str,
    pub queue_name: &'a str,
    pub scheduled_at: &'a str,
}

impl Display for JobEnqueuedAt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} at {}",
            JobEnqueued {
                job_class: self.job_class,
                job_id: self.job_id,
                queue_name: self.queue_name,
            },
            self.scheduled_at
        )
    }
}

/// `Performing {class} (Job ID: {id}) from {queue}`
pub struct JobPerforming<'a> {
    pub job_class: &'a str,
    pub job_id: &'a str,
    pub queue_name: &'a str,
}

impl Display for JobPerforming<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Performing {} (Job ID: {}) from {}",
            self.job_class, self.job_id, self.queue_name
        )
    }
}

/// `Performed {class} (Job ID: {id}) from {queue} in {duration}ms`
///
/// `duration_ms` is expected to be rounded already.
pub struct JobPerformed<'a> {
    pub job_class: &'a str,
    pub job_id: &'a str,
    pub queue_name: &'a str,
    pub duration_ms: f64,
}

impl Display for JobPerformed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Performed {} (Job ID: {}) from {} in {}ms",
            self.job_class,
            self.job_id,
            self.queue_name,
            display_float(self.duration_ms)
        )
    }
}
