// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors a formatter can return while serializing a record.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}
