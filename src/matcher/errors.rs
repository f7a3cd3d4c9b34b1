// ============================================================================
// Decimal Number Error Registry
// Stable codes and messages reported by the decimal number matcher
// ============================================================================

use std::fmt;

/// Code prefix shared by every decimal number matcher error
pub const CODE_PREFIX: &str = "doubleNumber.";

/// Failures the decimal number matcher can report.
///
/// Codes are a public contract: callers match on them, so they never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalNumberError {
    /// Value does not parse as a decimal number
    NotDecimalNumber,
    /// Value has more significant digits than allowed
    MaxNumberOfDigitsExceeded,
    /// Value has more decimal places than allowed
    MaxNumOfDecimalPlacesExceeded,
}

impl DecimalNumberError {
    /// Every variant, in code order
    pub const ALL: [DecimalNumberError; 3] = [
        DecimalNumberError::NotDecimalNumber,
        DecimalNumberError::MaxNumberOfDigitsExceeded,
        DecimalNumberError::MaxNumOfDecimalPlacesExceeded,
    ];

    /// Namespaced error code
    pub const fn code(self) -> &'static str {
        match self {
            DecimalNumberError::NotDecimalNumber => "doubleNumber.e001",
            DecimalNumberError::MaxNumberOfDigitsExceeded => "doubleNumber.e002",
            DecimalNumberError::MaxNumOfDecimalPlacesExceeded => "doubleNumber.e003",
        }
    }

    /// Fixed English message
    pub const fn message(self) -> &'static str {
        match self {
            DecimalNumberError::NotDecimalNumber => "The value is not a valid decimal number.",
            DecimalNumberError::MaxNumberOfDigitsExceeded => {
                "The value exceeded maximum number of digits."
            },
            DecimalNumberError::MaxNumOfDecimalPlacesExceeded => {
                "The value exceeded maximum number of decimal places."
            },
        }
    }

    /// Look up a variant by its code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

impl fmt::Display for DecimalNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
