//! Reusable field validators
//!
//! Validators inspect a single field value and report a human-readable
//! message on failure. Absent fields arrive as `Value::Null`, so anything
//! other than `required` lets null pass through.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static URL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Deliberately permissive: local@domain.tld
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex")
    })
}

fn url_re() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(r"^https?://[^\s]+$").expect("static url regex"))
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // International format with optional separators, e.g. "+995 555 123 456"
        Regex::new(r"^\+?[0-9][0-9 \-()]{6,}$").expect("static phone regex")
    })
}

/// Validator: field is required (not null, not empty string)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        let empty = value.is_null() || value.as_str().is_some_and(|s| s.is_empty());
        if empty {
            Err(format!("field '{field}' is required"))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must have at least `min` characters
pub fn min_length(min: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len < min {
                return Err(format!(
                    "'{field}' must have at least {min} characters (currently: {len})"
                ));
            }
        }
        Ok(())
    }
}

/// Validator: string must not exceed `max` characters
pub fn max_length(max: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len > max {
                return Err(format!(
                    "'{field}' must not exceed {max} characters (currently: {len})"
                ));
            }
        }
        Ok(())
    }
}

/// Validator: number must be at least `min`
pub fn min_value(min: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num < min {
                return Err(format!("'{field}' must be at least {min} (value: {num})"));
            }
        }
        Ok(())
    }
}

/// Validator: number must not exceed `max`
pub fn max_value(max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num > max {
                return Err(format!("'{field}' must not exceed {max} (value: {num})"));
            }
        }
        Ok(())
    }
}

/// Validator: string must look like an email address
pub fn email() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.is_empty() && !email_re().is_match(s) => {
            Err(format!("'{field}' must be a valid email address"))
        }
        _ => Ok(()),
    }
}

/// Validator: string must be an http(s) URL
pub fn url() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.is_empty() && !url_re().is_match(s) => {
            Err(format!("'{field}' must be a valid http(s) URL"))
        }
        _ => Ok(()),
    }
}

/// Validator: string must look like a phone number
pub fn phone() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.is_empty() && !phone_re().is_match(s) => {
            Err(format!("'{field}' must be a valid phone number"))
        }
        _ => Ok(()),
    }
}
