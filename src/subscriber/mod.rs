// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The job subscriber: lifecycle event in, one formatted log line out.
//!
//! Every event goes through the same fixed sequence:
//!
//! 1. base metadata (id, queue, class, redacted arguments)
//! 2. exception, when the event carries one
//! 3. `scheduled_at`, for `enqueue_at` only
//! 4. `duration`, for `perform` only
//! 5. `state`
//! 6. `tags`
//! 7. `message`
//! 8. the pre-format hook
//! 9. the formatter, with kind `"job"`
//! 10. the logger, at the configured severity
//!
//! Later steps may overwrite keys set by earlier ones. A failure in any step
//! is returned to the caller.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use jobscribe::config::SubscriberConfig;
//! use jobscribe::event::{EventPayload, JobRef};
//! use jobscribe::formatters::JsonFormatter;
//! use jobscribe::redaction::FilteredFields;
//! use jobscribe::sink::MemorySink;
//! use jobscribe::subscriber::JobSubscriber;
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = SubscriberConfig::new(FilteredFields::default(), Arc::new(JsonFormatter::new()));
//! let subscriber = JobSubscriber::new(config, sink.clone());
//!
//! subscriber
//!     .enqueue(EventPayload::new(JobRef::new("42", "mailers", "SendEmail", vec![])))
//!     .unwrap();
//!
//! assert!(sink.lines()[0].contains("Enqueued SendEmail (Job ID: 42) to mailers"));
//! ```


use serde_json::Value;
use std::sync::Arc;

use crate::config::SubscriberConfig;
use crate::errors::PipelineError;
use crate::event::{EventKind, EventPayload, LifecycleEvent};
use crate::extract::{
    duration, extract_duration, extract_exception, extract_metadata, extract_scheduled_at,
    scheduled_at,
};
use crate::observability::messages::subscriber::{
    EventLineInvalid, JobEventProcessed, JobEventRejected,
};
use crate::observability::messages::StructuredLog;
use crate::record::message::{JobEnqueued, JobEnqueuedAt, JobPerformed, JobPerforming};
use crate::record::{LogRecord, EXCEPTION, MESSAGE, STATE, TAGS, TAG_EXCEPTION, TAG_JOB};
use crate::sink::TracingSink;
use crate::traits::{LogSink, JOB_KIND};
use crate::utils::is_truthy;

/// Turns job lifecycle events into log lines.
///
/// Holds its configuration read-only, so one subscriber can serve events from
/// any number of threads.
pub struct JobSubscriber {
    config: Arc<SubscriberConfig>,
    default_logger: Arc<dyn LogSink>,
}

impl JobSubscriber {
    /// `default_logger` receives lines unless the configuration carries a
    /// logger override.
    pub fn new(config: SubscriberConfig, default_logger: Arc<dyn LogSink>) -> Self {
        Self {
            config: Arc::new(config),
            default_logger,
        }
    }

    /// Subscriber whose default logger is a [`TracingSink`].
    pub fn with_tracing(config: SubscriberConfig) -> Self {
        Self::new(config, Arc::new(TracingSink::new()))
    }

    pub fn config(&self) -> &SubscriberConfig {
        &self.config
    }

    /// The logger lines go to: the configured override, else the default.
    pub fn logger(&self) -> &dyn LogSink {
        match self.config.logger() {
            Some(logger) => logger.as_ref(),
            None => self.default_logger.as_ref(),
        }
    }

    pub fn enqueue(&self, payload: EventPayload) -> Result<String, PipelineError> {
        self.handle(LifecycleEvent::new(EventKind::Enqueue, payload))
    }

    pub fn enqueue_at(&self, payload: EventPayload) -> Result<String, PipelineError> {
        self.handle(LifecycleEvent::new(EventKind::EnqueueAt, payload))
    }

    pub fn perform_start(&self, payload: EventPayload) -> Result<String, PipelineError> {
        self.handle(LifecycleEvent::new(EventKind::PerformStart, payload))
    }

    pub fn perform(&self, payload: EventPayload) -> Result<String, PipelineError> {
        self.handle(LifecycleEvent::new(EventKind::Perform, payload))
    }

    /// Decode one JSON-encoded [`LifecycleEvent`] and [`handle`](Self::handle) it.
    ///
    /// A line that does not decode is logged and returned as
    /// [`PipelineError::InvalidEvent`], like any other rejection.
    pub fn handle_json(&self, line: &str) -> Result<String, PipelineError> {
        let event: LifecycleEvent = serde_json::from_str(line).map_err(|error| {
            EventLineInvalid { line, error: &error }.log();
            PipelineError::InvalidEvent(error)
        })?;
        self.handle(event)
    }

    /// Process one event: build its record, format it and write it to the
    /// logger. Returns the line that was written.
    ///
    /// The event's arguments are redacted in place along the way.
    pub fn handle(&self, mut event: LifecycleEvent) -> Result<String, PipelineError> {
        let kind = event.kind;
        let result = self
            .build_record(&mut event)
            .and_then(|record| {
                self.config
                    .formatter()
                    .format(&record, JOB_KIND)
                    .map_err(PipelineError::from)
            });

        let line = match result {
            Ok(line) => line,
            Err(error) => {
                JobEventRejected {
                    state: kind.as_str(),
                    job_class: &event.job().class_name,
                    error: &error,
                }
                .log();
                return Err(error);
            }
        };

        self.logger().write(self.config.log_level(), &line);

        JobEventProcessed {
            state: kind.as_str(),
            job_id: event.job().job_id.as_deref().unwrap_or_default(),
            formatter: self.config.formatter().name(),
        }
        .log();

        Ok(line)
    }

    /// Assemble the record for `event` and run the pre-format hook on it.
    pub fn build_record(&self, event: &mut LifecycleEvent) -> Result<LogRecord, PipelineError> {
        let mut record = extract_metadata(event, self.config.filtered_fields());
        record.merge(extract_exception(event));
        if event.kind == EventKind::EnqueueAt {
            record.merge(extract_scheduled_at(event)?);
        }
        if event.kind == EventKind::Perform {
            record.merge(extract_duration(event)?);
        }

        record.insert(STATE, event.kind.as_str());
        record.insert(TAGS, tags(&record));
        record.insert(MESSAGE, job_message(event)?);

        Ok(self.config.before_format(record, &event.payload))
    }
}

fn tags(record: &LogRecord) -> Value {
    let mut tags = vec![TAG_JOB];
    if record.get(EXCEPTION).is_some_and(is_truthy) {
        tags.push(TAG_EXCEPTION);
    }
    Value::from(tags)
}

fn job_message(event: &LifecycleEvent) -> Result<String, PipelineError> {
    let job = event.job();
    let job_class = job.class_name.as_str();
    let job_id = job.job_id.as_deref().unwrap_or_default();
    let queue_name = job.queue_name.as_deref().unwrap_or_default();

    let message = match event.kind {
        EventKind::Enqueue => JobEnqueued {
            job_class,
            job_id,
            queue_name,
        }
        .to_string(),
        EventKind::EnqueueAt => JobEnqueuedAt {
            job_class,
            job_id,
            queue_name,
            scheduled_at: &scheduled_at(event)?.to_string(),
        }
        .to_string(),
        EventKind::PerformStart => JobPerforming {
            job_class,
            job_id,
            queue_name,
        }
        .to_string(),
        EventKind::Perform => JobPerformed {
            job_class,
            job_id,
            queue_name,
            duration_ms: duration(event)?,
        }
        .to_string(),
    };
    Ok(message)
}
