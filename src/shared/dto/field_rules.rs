//! Per-field rules shared by the create and update validators.
//!
//! Each rule returns the cleaned value or the message the client gets
//! back. Callers run rules in field order, so the first failure wins.

use serde::{Deserialize, Deserializer};

use crate::task::{TaskCategory, PRIORITY_MAX, PRIORITY_MIN, TITLE_MAX_CHARS};
use crate::validation_error::ValidationError;

/// Trim and bound the title. Whitespace-only counts as missing.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::new("Title is required"));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::new("Title must be at most 200 characters"));
    }
    Ok(title.to_string())
}

pub fn validate_priority(raw: i64) -> Result<u8, ValidationError> {
    if raw < i64::from(PRIORITY_MIN) || raw > i64::from(PRIORITY_MAX) {
        return Err(ValidationError::new("Priority must be between 1 and 10"));
    }
    Ok(raw as u8)
}

pub fn validate_category(raw: &str) -> Result<TaskCategory, ValidationError> {
    TaskCategory::parse(raw).ok_or_else(|| ValidationError::new("Invalid category"))
}

/// Deserialize an optional integer that may arrive as a JSON number or a
/// numeric string (the shape an HTML number input submits). Range
/// checking happens in `validate_priority`, not here.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(n)) => Ok(Some(n)),
        Some(Raw::Float(f)) if f.fract() == 0.0 => Ok(Some(f as i64)),
        Some(Raw::Float(_)) => Err(serde::de::Error::custom("expected an integer")),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("expected a number")),
    }
}

// ── Tests ──────────────────────────────────────────────────────
