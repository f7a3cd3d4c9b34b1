// ============================================================================
// Decimal Number Matcher
// Validates that a value is a decimal number within digit limits
// ============================================================================

use super::errors::DecimalNumberError;
use crate::domain::{DecimalMatcherConfig, ValidationResult};
use crate::interfaces::Matcher;
use crate::numeric::DecimalValue;

/// Decimal number matcher
///
/// Accepts a value when it is absent, or when it parses as a decimal number
/// (`.` separator only) and
/// - has at most `effective_max_total_digits()` significant digits, and
/// - has at most `max_decimal_places` decimal places, if that limit is set.
///
/// The two limit checks are independent, so one value can fail both.
/// A parse failure is reported alone.
#[derive(Debug, Clone, Default)]
pub struct DecimalNumberMatcher {
    config: DecimalMatcherConfig,
}

impl DecimalNumberMatcher {
    /// Create a new matcher
    pub fn new(config: DecimalMatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecimalMatcherConfig {
        &self.config
    }

    /// Run the limit checks on an already parsed value
    pub fn match_decimal(&self, value: &DecimalValue) -> ValidationResult {
        let mut result = ValidationResult::new();

        self.validate_max_number_of_digits(value, &mut result);

        if let Some(max_places) = self.config.max_decimal_places {
            Self::validate_max_decimal_places(value, max_places, &mut result);
        }

        if !result.is_empty() {
            tracing::debug!(
                value = %value,
                codes = ?result.codes().collect::<Vec<_>>(),
                "decimal number rejected"
            );
        }

        result
    }

    fn validate_max_number_of_digits(&self, value: &DecimalValue, result: &mut ValidationResult) {
        let max_digits = self.config.effective_max_total_digits();

        if value.total_digits() > u64::from(max_digits) {
            Self::report(result, DecimalNumberError::MaxNumberOfDigitsExceeded);
        }
    }

    fn validate_max_decimal_places(
        value: &DecimalValue,
        max_places: u32,
        result: &mut ValidationResult,
    ) {
        if value.fractional_digits() > u64::from(max_places) {
            Self::report(result, DecimalNumberError::MaxNumOfDecimalPlacesExceeded);
        }
    }

    #[inline]
    fn report(result: &mut ValidationResult, error: DecimalNumberError) {
        result.add_error(error.code(), error.message());
    }
}

impl Matcher for DecimalNumberMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let Some(raw) = value else {
            return ValidationResult::new();
        };

        tracing::trace!(value = raw, matcher = self.name(), "matching value");

        match DecimalValue::parse(raw) {
            Ok(number) => self.match_decimal(&number),
            Err(err) => {
                tracing::debug!(value = raw, error = %err, "value is not a decimal number");
                let mut result = ValidationResult::new();
                Self::report(&mut result, DecimalNumberError::NotDecimalNumber);
                result
            },
        }
    }

    fn name(&self) -> &str {
        "DecimalNumber"
    }
}
