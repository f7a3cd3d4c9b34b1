// ============================================================================
// Domain Models Module
// Matcher configuration and validation outcome types
// ============================================================================

pub mod config;
pub mod validation_result;

pub use config::{ConfigError, DecimalMatcherConfig, DEFAULT_MAX_TOTAL_DIGITS};
pub use validation_result::{ValidationError, ValidationResult};
