// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod format;
mod pipeline;

pub use config::ConfigError;
pub use format::FormatError;
pub use pipeline::PipelineError;
