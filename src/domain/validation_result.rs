// ============================================================================
// Validation Result
// Per-call accumulator of validation errors keyed by code
// ============================================================================

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    /// Stable machine-readable code (e.g., "doubleNumber.e001")
    pub code: String,

    /// Human-readable English message
    pub message: String,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a single matcher call.
///
/// Behaves like an insertion-ordered map from error code to message: adding
/// a code that is already present replaces its message in place. An empty
/// result means the value is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    errors: SmallVec<[ValidationError; 2]>,
}

impl ValidationResult {
    /// Create an empty (valid) result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn add_error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        let error = ValidationError::new(code, message);
        match self.errors.iter_mut().find(|e| e.code == error.code) {
            Some(existing) => existing.message = error.message,
            None => self.errors.push(error),
        }
    }

    /// Append every error of `other`, in order
    pub fn merge(&mut self, other: ValidationResult) {
        for error in other.errors {
            self.add_error(error.code, error.message);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Same as `is_empty`, for call sites that read better as a predicate
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in the order they were added
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Message recorded for `code`, if any
    pub fn message(&self, code: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.message.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.code.as_str())
    }

    /// Serialize to JSON for API responses
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
