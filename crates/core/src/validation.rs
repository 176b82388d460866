//! Input validation utilities.
//!
//! Small helpers shared by the operations that accept caller input. They
//! return [`MedicineError::InvalidInput`] with the offending field named, so
//! the caller-facing message says which field to fix.

use chrono::{DateTime, Utc};

use crate::error::{MedicineError, MedicineResult};

/// Validates that a required free-text field is non-empty.
///
/// The input is trimmed of leading and trailing whitespace; a value that is
/// empty or whitespace-only is rejected. The trimmed value is returned and is
/// what gets stored.
///
/// # Errors
///
/// Returns [`MedicineError::InvalidInput`] naming `field` if the trimmed
/// input is empty.
pub fn require_non_empty(field: &'static str, value: &str) -> MedicineResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MedicineError::InvalidInput(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Parses a required RFC 3339 timestamp field.
///
/// # Errors
///
/// Returns [`MedicineError::InvalidInput`] naming `field` if the input is
/// empty or not a valid RFC 3339 timestamp.
pub fn parse_timestamp(field: &'static str, value: &str) -> MedicineResult<DateTime<Utc>> {
    let trimmed = require_non_empty(field, value)?;
    DateTime::parse_from_rfc3339(&trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            MedicineError::InvalidInput(format!("{field} must be an RFC 3339 timestamp: {e}"))
        })
}
