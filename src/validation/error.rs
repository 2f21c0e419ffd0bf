//! Validation error taxonomy for manual candle entry.

use serde::Serialize;
use thiserror::Error;

/// A single violated entry rule.
///
/// Violations are reported as data, never thrown: the validator collects
/// every failure into a [`ValidationErrorList`] so the user sees all
/// problems at once. The `Display` output is the exact message shown in
/// the error panel.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be a finite number, got '{value}'")]
    UnparseableNumber { field: &'static str, value: String },

    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
    },

    #[error("{fields} must lie within the low/high range")]
    InconsistentOhlc { fields: String },

    #[error("'{date} {time}' is not a valid timestamp")]
    InvalidTimestamp { date: String, time: String },
}

/// Ordered list of violations; insertion order is display order and
/// duplicates are preserved.
pub type ValidationErrorList = Vec<ValidationError>;
