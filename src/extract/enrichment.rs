// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{Display, Formatter};

use crate::errors::PipelineError;
use crate::event::LifecycleEvent;
use crate::record::{LogRecord, DURATION, EXCEPTION, SCHEDULED_AT};

/// The event's exception, copied verbatim; empty when the event has none.
pub fn extract_exception(event: &LifecycleEvent) -> LogRecord {
    let mut record = LogRecord::new();
    if let Some(exception) = &event.payload.exception {
        record.insert(EXCEPTION, exception.clone());
    }
    record
}

/// `duration` in milliseconds, rounded to two decimal places.
pub fn extract_duration(event: &LifecycleEvent) -> Result<LogRecord, PipelineError> {
    let mut record = LogRecord::new();
    record.insert(DURATION, duration(event)?);
    Ok(record)
}

/// Rounded duration of a `perform` event.
///
/// Both the record field and the message line use this value.
pub fn duration(event: &LifecycleEvent) -> Result<f64, PipelineError> {
    event
        .payload
        .duration
        .map(round_duration)
        .ok_or_else(|| PipelineError::MissingDuration {
            job_id: event.job().job_id.clone(),
        })
}

/// `scheduled_at` as an RFC 3339 UTC timestamp with millisecond precision.
pub fn extract_scheduled_at(event: &LifecycleEvent) -> Result<LogRecord, PipelineError> {
    let scheduled = scheduled_at(event)?;

    let mut record = LogRecord::new();
    record.insert(SCHEDULED_AT, scheduled.to_record_value());
    Ok(record)
}

/// Scheduled time of an `enqueue_at` event.
///
/// Both the record field and the message line are rendered from this value.
pub fn scheduled_at(event: &LifecycleEvent) -> Result<ScheduledAt, PipelineError> {
    event
        .payload
        .scheduled_at
        .map(ScheduledAt)
        .ok_or_else(|| PipelineError::MissingScheduledAt {
            job_id: event.job().job_id.clone(),
        })
}

/// Round half away from zero to two decimal places.
///
/// A value whose decimal half-way point is only reached after scaling by 100
/// loses precision (`1.015 * 100.0 == 101.49999999999999`), so the scaled
/// result is bumped when the half-way point divided back down still lies
/// within the input.
pub fn round_duration(duration_ms: f64) -> f64 {
    const SCALE: f64 = 100.0;

    let mut scaled = (duration_ms * SCALE).round();
    if duration_ms > 0.0 && (scaled + 0.5) / SCALE <= duration_ms {
        scaled += 1.0;
    } else if duration_ms < 0.0 && (scaled - 0.5) / SCALE >= duration_ms {
        scaled -= 1.0;
    }
    scaled / SCALE
}

/// A job's scheduled time.
///
/// `Display` gives the message form, `2024-05-01 12:30:00 UTC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAt(pub DateTime<Utc>);

impl ScheduledAt {
    /// Record form, `2024-05-01T12:30:00.000Z`.
    pub fn to_record_value(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Display for ScheduledAt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, EventPayload, JobRef};
    use chrono::TimeZone;
    use serde_json::json;

    fn payload() -> EventPayload {
        EventPayload::new(JobRef::new("42", "mailers", "SendEmail", vec![]))
    }

    #[test]
    fn test_exception_copied_verbatim() {
        let event = LifecycleEvent::new(
            EventKind::Perform,
            payload().with_exception(json!(["RuntimeError", "boom"])),
        );

        let record = extract_exception(&event);

        assert_eq!(record.get(EXCEPTION), Some(&json!(["RuntimeError", "boom"])));
    }

    #[test]
    fn test_no_exception_yields_empty_record() {
        let event = LifecycleEvent::new(EventKind::Perform, payload());
        assert!(extract_exception(&event).is_empty());
    }

    #[test]
    fn test_duration_rounded() {
        let event = LifecycleEvent::new(EventKind::Perform, payload().with_duration(12.3456));

        let record = extract_duration(&event).unwrap();

        assert_eq!(record.get(DURATION), Some(&json!(12.35)));
    }

    #[test]
    fn test_missing_duration_is_an_error() {
        let event = LifecycleEvent::new(EventKind::Perform, payload());

        let err = extract_duration(&event).unwrap_err();

        assert!(matches!(err, PipelineError::MissingDuration { job_id: Some(ref id) } if id == "42"));
    }

    #[test]
    fn test_round_duration() {
        assert_eq!(round_duration(7.891), 7.89);
        assert_eq!(round_duration(12.3456), 12.35);
        assert_eq!(round_duration(0.004), 0.0);
        assert_eq!(round_duration(5.0), 5.0);
    }

    #[test]
    fn test_round_duration_at_binary_half_way_points() {
        assert_eq!(round_duration(1.015), 1.02);
        assert_eq!(round_duration(2.675), 2.68);
        assert_eq!(round_duration(1.005), 1.01);
        assert_eq!(round_duration(-1.015), -1.02);
        assert_eq!(round_duration(1.0149), 1.01);
    }

    #[test]
    fn test_scheduled_at_renderings_share_one_source() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let event = LifecycleEvent::new(EventKind::EnqueueAt, payload().with_scheduled_at(at));

        let scheduled = scheduled_at(&event).unwrap();
        let record = extract_scheduled_at(&event).unwrap();

        assert_eq!(scheduled.to_string(), "2024-05-01 12:30:00 UTC");
        assert_eq!(record.get(SCHEDULED_AT), Some(&json!("2024-05-01T12:30:00.000Z")));
    }

    #[test]
    fn test_missing_scheduled_at_is_an_error() {
        let event = LifecycleEvent::new(EventKind::EnqueueAt, payload());
        assert!(matches!(
            extract_scheduled_at(&event),
            Err(PipelineError::MissingScheduledAt { .. })
        ));
    }
}
