// ============================================================================
// Matcher Configuration
// Digit and decimal place limits for the decimal number matcher
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total digit limit used when none (or zero) is configured
pub const DEFAULT_MAX_TOTAL_DIGITS: u32 = 11;

/// Maximum number of positional parameters accepted by `from_params`
const MAX_PARAMS: usize = 2;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while building a matcher configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// More positional parameters than the matcher understands
    TooManyParams { count: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyParams { count } => write!(
                f,
                "too many parameters: expected at most {}, got {}",
                MAX_PARAMS, count
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Decimal Matcher Configuration
// ============================================================================

/// Limits applied by the decimal number matcher.
///
/// Immutable once handed to a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalMatcherConfig {
    /// Maximum number of significant digits.
    /// `None` and `Some(0)` both mean `DEFAULT_MAX_TOTAL_DIGITS`.
    pub max_total_digits: Option<u32>,

    /// Maximum number of decimal places.
    /// Presence alone enables the check, so `Some(0)` rejects any fraction.
    pub max_decimal_places: Option<u32>,
}

impl DecimalMatcherConfig {
    /// Create a configuration with no explicit limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from positional parameters.
    ///
    /// - `[]`: default total digit limit, no decimal place check
    /// - `[total]`: total digit limit, no decimal place check
    /// - `[total, places]`: total digit limit and decimal place limit
    ///
    /// # Errors
    /// Returns `TooManyParams` for more than two parameters.
    pub fn from_params(params: &[u32]) -> Result<Self, ConfigError> {
        match *params {
            [] => Ok(Self::new()),
            [total] => Ok(Self::new().with_max_total_digits(total)),
            [total, places] => Ok(Self::new()
                .with_max_total_digits(total)
                .with_max_decimal_places(places)),
            _ => Err(ConfigError::TooManyParams {
                count: params.len(),
            }),
        }
    }

    /// Builder method: Set the total digit limit
    pub fn with_max_total_digits(mut self, digits: u32) -> Self {
        self.max_total_digits = Some(digits);
        self
    }

    /// Builder method: Set the decimal place limit and enable its check
    pub fn with_max_decimal_places(mut self, places: u32) -> Self {
        self.max_decimal_places = Some(places);
        self
    }

    /// Total digit limit after applying the default fallback.
    ///
    /// A configured zero falls back to the default rather than rejecting
    /// every value.
    pub fn effective_max_total_digits(&self) -> u32 {
        match self.max_total_digits {
            Some(digits) if digits > 0 => digits,
            _ => DEFAULT_MAX_TOTAL_DIGITS,
        }
    }

    /// Whether the decimal place check runs
    pub fn validates_decimal_places(&self) -> bool {
        self.max_decimal_places.is_some()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DecimalMatcherConfig {
    /// Monetary amounts
    /// - Default total digit limit (11)
    /// - At most 2 decimal places
    pub fn monetary() -> Self {
        Self::new()
            .with_max_total_digits(DEFAULT_MAX_TOTAL_DIGITS)
            .with_max_decimal_places(2)
    }

    /// Whole numbers with at most `digits` digits
    pub fn integer_only(digits: u32) -> Self {
        Self::new()
            .with_max_total_digits(digits)
            .with_max_decimal_places(0)
    }
}
