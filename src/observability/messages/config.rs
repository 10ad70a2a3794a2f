// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and runtime assembly.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use jobscribe::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     source: "jobscribe.yaml",
///     formatter: "logstash",
///     log_level: "info",
///     filtered_param_count: 3,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Loaded config from jobscribe.yaml: formatter=logstash, log_level=info, filtered_params=3"
/// );
/// ```
pub struct ConfigLoaded<'a> {
    pub source: &'a str,
    pub formatter: &'a str,
    pub log_level: &'a str,
    pub filtered_param_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config from {}: formatter={}, log_level={}, filtered_params={}",
            self.source, self.formatter, self.log_level, self.filtered_param_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            formatter = self.formatter,
            log_level = self.log_level,
            filtered_param_count = self.filtered_param_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config",
            span_name = name,
            source = self.source,
            formatter = self.formatter,
        )
    }
}

/// The configured formatter is not compiled into this build.
///
/// # Log Level
/// `error!` - Deployment cannot produce log output
///
/// # Example
/// ```
/// use jobscribe::observability::messages::config::FormatterDependencyMissing;
///
/// let msg = FormatterDependencyMissing {
///     formatter: "logstash",
///     remedy: "rebuild with `--features logstash`",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "The logstash formatter is not available in this build; rebuild with `--features logstash`"
/// );
/// ```
pub struct FormatterDependencyMissing<'a> {
    pub formatter: &'a str,
    pub remedy: &'a str,
}

impl Display for FormatterDependencyMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "The {} formatter is not available in this build; {}",
            self.formatter, self.remedy
        )
    }
}

impl StructuredLog for FormatterDependencyMissing<'_> {
    fn log(&self) {
        tracing::error!(formatter = self.formatter, remedy = self.remedy, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("config", span_name = name, formatter = self.formatter)
    }
}
