// ============================================================================
// Numeric Module
// Exact decimal parsing for digit-count validation
// ============================================================================
//
// This module provides:
// - DecimalValue: normalized arbitrary-precision decimal parsed from text
// - NumericError: Error types for parsing and conversion
//
// Design principles:
// - No floating-point operations
// - Parsing returns Result (no panics)
// - Any input length is counted exactly; rust_decimal is only used at
//   API boundaries where values are already typed

mod decimal_value;
mod errors;

pub use decimal_value::DecimalValue;
pub use errors::{NumericError, NumericResult};
