// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Field extraction from lifecycle events.
//!
//! * `metadata` - job id, queue, class and the redacted argument list
//! * `enrichment` - exception, duration and scheduled-time fields

mod enrichment;
mod metadata;

pub use enrichment::{
    duration, extract_duration, extract_exception, extract_scheduled_at, round_duration,
    scheduled_at, ScheduledAt,
};
pub use metadata::{extract_job_args, extract_metadata};
