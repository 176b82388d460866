//! Medicine identifiers.
//!
//! Records are keyed by a *canonical* UUID representation: **32 lowercase
//! hexadecimal characters** (no hyphens), the same value produced by
//! `Uuid::new_v4().simple()`.
//!
//! This module provides a small wrapper type ([`MedicineId`]) that guarantees
//! the canonical format once constructed:
//! - [`MedicineId::generate`] allocates a fresh identifier at record creation.
//! - [`MedicineId::parse`] validates an externally supplied identifier
//!   (API path segments, request bodies).
//!
//! Non-canonical values (uppercase, hyphenated, wrong length, non-hex) are
//! rejected, so the map key space never holds two spellings of one id.

use std::fmt;

use uuid::Uuid;

use crate::error::{MedicineError, MedicineResult};

/// Canonical medicine record identifier (32 lowercase hex characters).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MedicineId(Uuid);

impl MedicineId {
    /// Allocates a fresh identifier for a new record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates an externally supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MedicineError::InvalidInput`] if the input is empty or not
    /// already in canonical form.
    pub fn parse(input: &str) -> MedicineResult<Self> {
        if input.is_empty() {
            return Err(MedicineError::InvalidInput(
                "medicine id cannot be empty".into(),
            ));
        }

        if !Self::is_canonical(input) {
            return Err(MedicineError::InvalidInput(
                "medicine id must be 32 lowercase hex characters".into(),
            ));
        }

        // is_canonical guarantees a parseable simple-form UUID.
        let uuid = Uuid::parse_str(input)
            .map_err(|e| MedicineError::InvalidInput(format!("medicine id is not a UUID: {e}")))?;

        Ok(Self(uuid))
    }

    /// Returns true if `input` is exactly 32 lowercase hex characters.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
