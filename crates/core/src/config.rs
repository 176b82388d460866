//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! record store service by handle. Request handling never reads process-wide
//! environment variables, which keeps behaviour consistent across
//! multi-threaded runtimes and test harnesses.

use crate::constants::DEFAULT_INITIAL_PAGE_SIZE;
use crate::error::{MedicineError, MedicineResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    initial_page_size: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`MedicineError::InvalidInput`] if `initial_page_size` is zero.
    pub fn new(initial_page_size: usize) -> MedicineResult<Self> {
        if initial_page_size == 0 {
            return Err(MedicineError::InvalidInput(
                "initial page size must be at least 1".into(),
            ));
        }

        Ok(Self { initial_page_size })
    }

    /// Number of records served by the initial-page query.
    pub fn initial_page_size(&self) -> usize {
        self.initial_page_size
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            initial_page_size: DEFAULT_INITIAL_PAGE_SIZE,
        }
    }
}

/// Parse the initial page size from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, the default page size is used.
///
/// # Errors
///
/// Returns [`MedicineError::InvalidInput`] if the value is present but not a
/// positive integer.
pub fn initial_page_size_from_env_value(value: Option<String>) -> MedicineResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_INITIAL_PAGE_SIZE),
        Some(v) => {
            let parsed = v.parse::<usize>().map_err(|e| {
                MedicineError::InvalidInput(format!("invalid page size {v:?}: {e}"))
            })?;
            if parsed == 0 {
                return Err(MedicineError::InvalidInput(
                    "initial page size must be at least 1".into(),
                ));
            }
            Ok(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_page_size() {
        assert!(CoreConfig::new(0).is_err());
        assert_eq!(CoreConfig::new(5).unwrap().initial_page_size(), 5);
    }

    #[test]
    fn env_value_falls_back_to_default() {
        assert_eq!(
            initial_page_size_from_env_value(None).unwrap(),
            DEFAULT_INITIAL_PAGE_SIZE
        );
        assert_eq!(
            initial_page_size_from_env_value(Some("  ".into())).unwrap(),
            DEFAULT_INITIAL_PAGE_SIZE
        );
    }

    #[test]
    fn env_value_parses_positive_integer() {
        assert_eq!(
            initial_page_size_from_env_value(Some("25".into())).unwrap(),
            25
        );
        assert!(initial_page_size_from_env_value(Some("0".into())).is_err());
        assert!(initial_page_size_from_env_value(Some("ten".into())).is_err());
    }
}
