// ============================================================================
// Matcher Factory
// Creates matchers from configuration
// ============================================================================

use crate::domain::config::{ConfigError, DecimalMatcherConfig};
use crate::interfaces::Matcher;
use crate::matcher::DecimalNumberMatcher;

/// Creates a decimal number matcher from configuration
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
/// use decimal_matcher::matcher::factory::create_from_config;
///
/// let matcher = create_from_config(DecimalMatcherConfig::monetary());
/// assert!(matcher.match_value(Some("19.99")).is_empty());
/// ```
pub fn create_from_config(config: DecimalMatcherConfig) -> Box<dyn Matcher> {
    tracing::debug!(
        max_total_digits = config.effective_max_total_digits(),
        max_decimal_places = ?config.max_decimal_places,
        "creating decimal number matcher"
    );
    Box::new(DecimalNumberMatcher::new(config))
}

/// Creates a decimal number matcher from positional parameters
///
/// # Errors
/// Returns `TooManyParams` for more than two parameters.
///
/// # Example
/// ```
/// use decimal_matcher::matcher::factory::create_from_params;
///
/// let matcher = create_from_params(&[5, 2]).unwrap();
/// assert!(matcher.match_value(Some("123.45")).is_empty());
/// assert!(create_from_params(&[5, 2, 1]).is_err());
/// ```
pub fn create_from_params(params: &[u32]) -> Result<Box<dyn Matcher>, ConfigError> {
    let config = DecimalMatcherConfig::from_params(params)?;
    Ok(create_from_config(config))
}
