//! Form models for pages that post data.
//!
//! Each form mirrors the fields of an HTML form, deserializes from the urlencoded body,
//! and converts into the backend request DTO after local validation. Validation failures
//! are plain messages shown above the re-rendered form.

pub mod auth;
pub mod destination;
pub mod guide;
pub mod trip;
pub mod trip_registration;

use std::str::FromStr;

/// Empty or whitespace-only input becomes `None`.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims the value and fails with `"{label} is required."` when it is empty.
pub(crate) fn required(value: &str, label: &str) -> Result<String, String> {
    optional(value).ok_or_else(|| format!("{} is required.", label))
}

/// Parses a numeric field, failing with `"{label} must be a number."`.
pub(crate) fn number<T: FromStr>(value: &str, label: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a number.", label))
}
