// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::event::{JobArgument, LifecycleEvent};
use crate::record::{LogRecord, JOB_ARGS, JOB_CLASS, JOB_ID, QUEUE_NAME};
use crate::redaction::{redact, FilteredFields};

/// Base record fields for an event: `job_id`, `queue_name`, `job_class` and
/// `job_args`.
///
/// Redacts the job's arguments in place as a side effect. A job without an id
/// or queue yields `null` for that field.
pub fn extract_metadata(event: &mut LifecycleEvent, fields: &FilteredFields) -> LogRecord {
    let job = &mut event.payload.job;
    let job_args = extract_job_args(&mut job.arguments, fields);

    let mut record = LogRecord::new();
    record.insert(JOB_ID, job.job_id.clone());
    record.insert(QUEUE_NAME, job.queue_name.clone());
    record.insert(JOB_CLASS, job.class_name.clone());
    record.insert(JOB_ARGS, Value::Array(job_args));
    record
}

/// Redact `arguments` and map each one to its logged form: the global id for
/// identified arguments, the (redacted) value otherwise. Null arguments are
/// dropped.
pub fn extract_job_args(arguments: &mut [JobArgument], fields: &FilteredFields) -> Vec<Value> {
    redact(arguments, fields);
    arguments.iter().filter_map(JobArgument::log_value).collect()
}
