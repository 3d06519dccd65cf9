//! Reusable field filters
//!
//! These filters normalize field values before validation runs

use anyhow::Result;
use serde_json::Value;

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

/// Filter: convert string to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.to_lowercase()))
        } else {
            Ok(value)
        }
    }
}
