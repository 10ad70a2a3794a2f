// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod value;

pub use value::{display_float, display_value, is_truthy};
