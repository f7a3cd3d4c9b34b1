// ============================================================================
// Numeric Errors
// Error types for decimal parsing and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or converting a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string was empty
    EmptyInput,
    /// Input string is not a decimal number
    InvalidInput,
    /// Exponent does not fit the supported range
    ExponentOverflow,
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::EmptyInput => write!(f, "invalid input: empty string"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ExponentOverflow => {
                write!(f, "exponent overflow: exponent is out of range")
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
