// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod formatter;
pub mod sink;

pub use formatter::{Formatter, CONTROLLER_KIND, JOB_KIND};
pub use sink::LogSink;
