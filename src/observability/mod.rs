// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Diagnostics for the pipeline itself.
//!
//! The crate's own operational logging goes through typed message structs in
//! [`messages`], each implementing `Display` and [`messages::StructuredLog`].
//! Job records themselves do not pass through here; they go to the configured
//! [`LogSink`](crate::traits::LogSink).
//!
//! # Usage
//!
//! ```rust
//! use jobscribe::observability::messages::{config::ConfigLoaded, StructuredLog};
//!
//! jobscribe::observability::init_tracing();
//!
//! ConfigLoaded {
//!     source: "jobscribe.yaml",
//!     formatter: "logstash",
//!     log_level: "info",
//!     filtered_param_count: 2,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
