// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Log sinks and the severity they are written at.
//!
//! * [`TracingSink`] - emits each line as a `tracing` event
//! * [`WriterSink`] - writes newline-framed lines to any `io::Write`
//! * [`MemorySink`] - keeps lines in memory

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::observability::messages::{sink::SinkWriteFailed, StructuredLog};
use crate::traits::LogSink;

/// Tracing target used by [`TracingSink`].
pub const JOB_LOG_TARGET: &str = "jobscribe::jobs";

/// Severity a formatted line is written at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => tracing::Level::TRACE,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

/// Emits lines as `tracing` events under [`JOB_LOG_TARGET`].
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn write(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Trace => tracing::trace!(target: JOB_LOG_TARGET, "{}", line),
            Severity::Debug => tracing::debug!(target: JOB_LOG_TARGET, "{}", line),
            Severity::Info => tracing::info!(target: JOB_LOG_TARGET, "{}", line),
            Severity::Warn => tracing::warn!(target: JOB_LOG_TARGET, "{}", line),
            Severity::Error => tracing::error!(target: JOB_LOG_TARGET, "{}", line),
        }
    }
}

/// Writes one line per record to an `io::Write`.
///
/// Lines below `min_severity` are skipped. Write failures are reported
/// through `tracing` and otherwise ignored.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    min_severity: Severity,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_min_severity(writer, Severity::Trace)
    }

    pub fn with_min_severity(writer: W, min_severity: Severity) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_severity,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write(&self, severity: Severity, line: &str) {
        if severity < self.min_severity {
            return;
        }
        let mut writer = self.lock();
        let result = writeln!(writer, "{}", line).and_then(|_| writer.flush());
        if let Err(error) = result {
            SinkWriteFailed {
                sink: "writer",
                error: &error,
            }
            .log();
        }
    }
}

/// Keeps every written line, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far with their severity.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.lock().clone()
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Severity, String)>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write(&self, severity: Severity, line: &str) {
        self.lock().push((severity, line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_and_names() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Warn < Severity::Error);
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(tracing::Level::from(Severity::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_writer_sink_frames_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.write(Severity::Info, "first");
        sink.write(Severity::Debug, "second");

        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_writer_sink_min_severity() {
        let sink = WriterSink::with_min_severity(Vec::new(), Severity::Warn);
        sink.write(Severity::Info, "skipped");
        sink.write(Severity::Error, "kept");

        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "kept\n");
    }

    #[test]
    fn test_writer_sink_swallows_write_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(Broken);
        sink.write(Severity::Info, "lost");
    }

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        sink.write(Severity::Warn, "a");
        sink.write(Severity::Info, "b");

        assert_eq!(sink.lines(), vec!["a", "b"]);
        assert_eq!(sink.entries()[0], (Severity::Warn, "a".to_string()));
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        TracingSink::new().write(Severity::Info, "{\"job_id\":\"1\"}");
    }
}
