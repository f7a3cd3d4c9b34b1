// ============================================================================
// Decimal Matcher Library
// Validation matcher for decimal numbers with digit and decimal place limits
// ============================================================================

//! # Decimal Matcher
//!
//! Validates that a textual value is a decimal number within configurable
//! magnitude limits, reporting failures as a structured result instead of
//! an error.
//!
//! ## Features
//!
//! - **Exact digit counting** for inputs of any length (no floating point)
//! - **Total digit limit** (default 11) and optional **decimal place limit**
//! - **Stable error codes** (`doubleNumber.e001` .. `doubleNumber.e003`)
//! - **Stateless per call**: one matcher can be shared across threads
//!
//! ## Example
//!
//! ```rust
//! use decimal_matcher::prelude::*;
//!
//! // At most 5 digits, at most 2 of them after the decimal point
//! let matcher = DecimalNumberMatcher::new(
//!     DecimalMatcherConfig::new()
//!         .with_max_total_digits(5)
//!         .with_max_decimal_places(2),
//! );
//!
//! assert!(matcher.match_value(Some("123.45")).is_empty());
//! assert!(matcher.match_value(None).is_empty());
//!
//! let result = matcher.match_value(Some("123.456"));
//! assert!(result.has_error(DecimalNumberError::MaxNumberOfDigitsExceeded.code()));
//! assert!(result.has_error(DecimalNumberError::MaxNumOfDecimalPlacesExceeded.code()));
//!
//! let result = matcher.match_value(Some("twelve"));
//! assert_eq!(
//!     result.codes().collect::<Vec<_>>(),
//!     vec![DecimalNumberError::NotDecimalNumber.code()]
//! );
//! ```

pub mod domain;
pub mod interfaces;
pub mod matcher;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, DecimalMatcherConfig, ValidationError, ValidationResult,
        DEFAULT_MAX_TOTAL_DIGITS,
    };
    pub use crate::interfaces::Matcher;
    pub use crate::matcher::{
        create_from_config, create_from_params, DecimalNumberError, DecimalNumberMatcher,
    };
    pub use crate::numeric::{DecimalValue, NumericError};
}
