//! Argument checks run by every API call before a request is built.
//!
//! ```rust
//! # use moov_rust::{error::ValidationError, validation::check_string};
//! assert!(check_string("acc_1").or(ValidationError::MissingAccountId).is_ok());
//! assert_eq!(
//!     check_string("").or(ValidationError::MissingAccountId),
//!     Err(ValidationError::MissingAccountId)
//! );
//! ```

use crate::error::ValidationError;
use std::collections::HashMap;

/// Outcome of a check, turned into a named error with [`Check::or`].
#[derive(Debug, Clone, Copy)]
#[must_use = "a check does nothing until resolved with `or`"]
pub struct Check(bool);

impl Check {
    /// Fails with `error` if the check did not pass.
    pub fn or(self, error: ValidationError) -> Result<(), ValidationError> {
        if self.0 {
            Ok(())
        } else {
            Err(error)
        }
    }

    pub fn passed(&self) -> bool {
        self.0
    }
}

/// Passes for a present, non-empty string.
pub fn check_string<'a>(value: impl Into<Option<&'a str>>) -> Check {
    Check(value.into().map_or(false, |v| !v.is_empty()))
}

/// Passes for an identifier which can be used as a single URL path segment.
///
/// Empty strings fail, and so do `.` and `..`, which a URL parser would resolve as
/// relative segments.
pub fn check_id(value: &str) -> Check {
    Check(!matches!(value, "" | "." | ".."))
}

/// Passes for a present value.
pub fn check<T: Defined + ?Sized>(value: &T) -> Check {
    Check(value.is_defined())
}

/// Values which can be missing.
///
/// Collections count as missing when empty.
pub trait Defined {
    fn is_defined(&self) -> bool;
}

impl<T> Defined for Option<T> {
    fn is_defined(&self) -> bool {
        self.is_some()
    }
}

impl Defined for serde_json::Value {
    fn is_defined(&self) -> bool {
        !self.is_null()
    }
}

impl<T> Defined for [T] {
    fn is_defined(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Defined for Vec<T> {
    fn is_defined(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Defined for HashMap<K, V, S> {
    fn is_defined(&self) -> bool {
        !self.is_empty()
    }
}
