// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading configuration and building the runtime.
//!
//! These describe a deployment that cannot produce log output at all, so they
//! surface at startup instead of being absorbed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML configuration could not be parsed.
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML configuration could not be parsed.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML.
    #[error("Unsupported config format for '{path}': expected .yaml, .yml or .toml")]
    UnsupportedFormat { path: PathBuf },

    /// The selected formatter was not compiled into this build.
    #[error("Formatter '{formatter}' is unavailable: {remedy}")]
    FormatterUnavailable {
        formatter: &'static str,
        remedy: &'static str,
    },
}
