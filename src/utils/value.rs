// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Helpers for inspecting and rendering JSON values in log output.

use serde_json::Value;

/// Whether a value counts as set: anything except `null` and `false`.
///
/// # Example
/// ```
/// use jobscribe::utils::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("")));
/// assert!(is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!(null)));
/// assert!(!is_truthy(&json!(false)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Render a float the way it reads in log messages: shortest round-trip
/// digits, with integral values keeping one decimal place (`12.0`, not `12`).
pub fn display_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Render a value for interpolation into a message.
///
/// Strings are written bare, `null` renders as the empty string and
/// everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.is_f64(), n.as_f64()) {
            (true, Some(f)) => display_float(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
