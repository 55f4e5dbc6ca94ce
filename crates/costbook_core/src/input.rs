//! Raw-input parsing for the UI command boundary.
//!
//! # Responsibility
//! - Convert raw UI strings into validated typed values.
//! - Report which field failed and what was expected, so the UI can
//!   re-prompt for that field alone.
//!
//! # Invariants
//! - Helpers never mutate state; callers abort before any mutation.
//! - Accepted numbers are always finite.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Parse or precondition failure for one user-supplied field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable expectation for re-prompting.
    pub reason: String,
}

impl InvalidInput {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl Error for InvalidInput {}

/// Parses a required name field. Surrounding whitespace is trimmed.
pub fn required_name(field: &'static str, raw: &str) -> Result<String, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::new(field, "a non-empty name is required"));
    }
    Ok(trimmed.to_string())
}

/// Parses any finite real number.
pub fn real(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        InvalidInput::new(field, format!("expected a number, got `{trimmed}`"))
    })?;
    if !value.is_finite() {
        return Err(InvalidInput::new(
            field,
            format!("expected a finite number, got `{trimmed}`"),
        ));
    }
    Ok(value)
}

/// Parses a finite real number that must be strictly positive.
pub fn positive_real(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    let value = real(field, raw)?;
    if value <= 0.0 {
        return Err(InvalidInput::new(
            field,
            format!("expected a number greater than zero, got `{value}`"),
        ));
    }
    Ok(value)
}

/// Parses a finite real number that must not be negative.
pub fn non_negative_real(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    let value = real(field, raw)?;
    if value < 0.0 {
        return Err(InvalidInput::new(
            field,
            format!("expected a non-negative number, got `{value}`"),
        ));
    }
    Ok(value)
}
