// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The flat, ordered record produced for every lifecycle event.
//!
//! Fields keep insertion order, so a record serializes in the order the
//! subscriber assembled it. Re-inserting an existing key overwrites its value
//! in place.

pub mod message;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JOB_ID: &str = "job_id";
pub const QUEUE_NAME: &str = "queue_name";
pub const JOB_CLASS: &str = "job_class";
pub const JOB_ARGS: &str = "job_args";
pub const EXCEPTION: &str = "exception";
pub const DURATION: &str = "duration";
pub const SCHEDULED_AT: &str = "scheduled_at";
pub const STATE: &str = "state";
pub const TAGS: &str = "tags";
pub const MESSAGE: &str = "message";
pub const HEADERS: &str = "headers";

/// Tag carried by every job record.
pub const TAG_JOB: &str = "job";
/// Tag added when the record carries an exception.
pub const TAG_EXCEPTION: &str = "exception";

/// Ordered field mapping handed to a formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Merge `other` into this record; keys already present are overwritten.
    pub fn merge(&mut self, other: LogRecord) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.0.get(key).cloned()?;
        self.0 = std::mem::take(&mut self.0)
            .into_iter()
            .filter(|(k, _)| k != key)
            .collect();
        Some(removed)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for LogRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for LogRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
