// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::ConfigError;
use crate::event::EventPayload;
use crate::formatters::FormatterFactory;
use crate::record::LogRecord;
use crate::redaction::FilteredFields;
use crate::sink::Severity;
use crate::traits::{Formatter, LogSink};

/// Hook run on every assembled record, right before formatting.
///
/// Receives the record and the event payload it came from, and returns the
/// record to format.
pub type BeforeFormat = Arc<dyn Fn(LogRecord, &EventPayload) -> LogRecord + Send + Sync>;

/// Everything the job subscriber reads while processing events.
///
/// Built once at startup and shared read-only afterwards; the `with_*`
/// methods consume the value, so there is no way to change a configuration
/// that a subscriber already holds.
#[derive(Clone)]
pub struct SubscriberConfig {
    filtered_fields: FilteredFields,
    formatter: Arc<dyn Formatter>,
    log_level: Severity,
    before_format: BeforeFormat,
    logger: Option<Arc<dyn LogSink>>,
}

impl SubscriberConfig {
    /// Configuration with an identity hook, `info` severity and no logger
    /// override.
    pub fn new(filtered_fields: FilteredFields, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            filtered_fields,
            formatter,
            log_level: Severity::default(),
            before_format: Arc::new(unchanged),
            logger: None,
        }
    }

    pub fn with_log_level(mut self, log_level: Severity) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_before_format<F>(mut self, hook: F) -> Self
    where
        F: Fn(LogRecord, &EventPayload) -> LogRecord + Send + Sync + 'static,
    {
        self.before_format = Arc::new(hook);
        self
    }

    /// Send records to `logger` instead of the subscriber's default logger.
    pub fn with_logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn filtered_fields(&self) -> &FilteredFields {
        &self.filtered_fields
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    pub fn log_level(&self) -> Severity {
        self.log_level
    }

    pub fn before_format(&self, record: LogRecord, payload: &EventPayload) -> LogRecord {
        (self.before_format)(record, payload)
    }

    pub fn logger(&self) -> Option<&Arc<dyn LogSink>> {
        self.logger.as_ref()
    }
}

fn unchanged(record: LogRecord, _payload: &EventPayload) -> LogRecord {
    record
}

impl fmt::Debug for SubscriberConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberConfig")
            .field("filtered_fields", &self.filtered_fields)
            .field("formatter", &self.formatter.name())
            .field("log_level", &self.log_level)
            .field("logger_override", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}

/// Runtime builder - turns a loaded [`Config`] into a [`SubscriberConfig`].
///
/// # Example
/// ```
/// use jobscribe::config::{Config, RuntimeBuilder};
/// use jobscribe::formatters::FormatterKind;
///
/// let config = Config {
///     formatter: FormatterKind::Json,
///     ..Config::default()
/// };
///
/// let runtime = RuntimeBuilder::from_config(&config).unwrap();
/// assert_eq!(runtime.formatter().name(), "json");
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Resolve the configured formatter and copy the remaining settings.
    ///
    /// Fails if the configured formatter is not available in this build.
    pub fn from_config(cfg: &Config) -> Result<SubscriberConfig, ConfigError> {
        let formatter = FormatterFactory::create(cfg.formatter)?;
        Ok(SubscriberConfig::new(cfg.filtered_params.clone(), formatter)
            .with_log_level(cfg.log_level))
    }
}
