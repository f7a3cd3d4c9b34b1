// ============================================================================
// Matcher Module
// Contains the validation matchers and their error registry
// ============================================================================

mod decimal_number;
mod errors;

pub mod factory;

pub use decimal_number::DecimalNumberMatcher;
pub use errors::{DecimalNumberError, CODE_PREFIX};
pub use factory::{create_from_config, create_from_params};
