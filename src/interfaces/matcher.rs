// ============================================================================
// Matcher Interface
// Defines the contract for pluggable validation matchers
// ============================================================================

use crate::domain::ValidationResult;

/// Strategy pattern interface for validation rules
/// Implementations: DecimalNumberMatcher
pub trait Matcher: Send + Sync {
    /// Validate a raw input value
    ///
    /// # Arguments
    /// * `value` - The value to check, `None` when the field is absent
    ///
    /// # Returns
    /// A fresh result; empty when the value passes. Absence is always valid,
    /// presence checks belong to a separate matcher.
    fn match_value(&self, value: Option<&str>) -> ValidationResult;

    /// Get the matcher name for logging
    fn name(&self) -> &str;

    /// Validate several values, one result per value
    fn match_values<'a, I>(&self, values: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = Option<&'a str>>,
        Self: Sized,
    {
        values.into_iter().map(|v| self.match_value(v)).collect()
    }
}
