// ============================================================================
// Decimal Value
// Exact arbitrary-precision decimal parsed from text
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

/// Largest scale representable by `rust_decimal::Decimal`
const MAX_DECIMAL_SCALE: u32 = 28;

/// Exact decimal number in normalized form.
///
/// The value is `coefficient × 10^exponent`, where `coefficient` holds the
/// significant digits with neither leading nor trailing zeros. Zero has an
/// empty coefficient, a zero exponent and no sign, so structural equality is
/// numeric equality.
///
/// There is no arithmetic: the type exists to answer "how many digits" and
/// "how many decimal places" for inputs of any length.
///
/// # Example
/// ```
/// use decimal_matcher::numeric::DecimalValue;
///
/// let value: DecimalValue = "123.450".parse().unwrap();
/// assert_eq!(value.total_digits(), 5);
/// assert_eq!(value.fractional_digits(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    negative: bool,
    coefficient: String,
    exponent: i64,
}

impl DecimalValue {
    /// Zero value
    pub const ZERO: Self = Self {
        negative: false,
        coefficient: String::new(),
        exponent: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a decimal string.
    ///
    /// Accepted syntax is an optional sign, digits with at most one `.`
    /// (at least one digit on either side), and an optional `e`/`E` exponent:
    /// `"42"`, `"-0.5"`, `"+.5"`, `"1."`, `"1.25e-3"`.
    ///
    /// Whitespace, digit separators, `NaN`, `Infinity` and radix prefixes
    /// are rejected.
    ///
    /// # Errors
    /// - `EmptyInput` for `""`
    /// - `InvalidInput` for anything outside the syntax above
    /// - `ExponentOverflow` if the exponent does not fit an `i64`
    pub fn parse(s: &str) -> NumericResult<Self> {
        if s.is_empty() {
            return Err(NumericError::EmptyInput);
        }

        let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(pos) => (&unsigned[..pos], parse_exponent(&unsigned[pos + 1..])?),
            None => (unsigned, 0),
        };

        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        // A second '.' lands in frac_str and fails here
        if !is_ascii_digits(int_str) || !is_ascii_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let frac_len = i64::try_from(frac_str.len()).map_err(|_| NumericError::ExponentOverflow)?;
        let exponent = exponent
            .checked_sub(frac_len)
            .ok_or(NumericError::ExponentOverflow)?;

        let digits = [int_str, frac_str].concat();
        let (coefficient, trailing_zeros) = trim_zeros(&digits);
        if coefficient.is_empty() {
            return Ok(Self::ZERO);
        }

        let exponent = i64::try_from(trailing_zeros)
            .ok()
            .and_then(|zeros| exponent.checked_add(zeros))
            .ok_or(NumericError::ExponentOverflow)?;

        Ok(Self {
            negative,
            coefficient: coefficient.to_owned(),
            exponent,
        })
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// Every `Decimal` is representable, so this cannot fail.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        let digits = mantissa.unsigned_abs().to_string();
        let (coefficient, trailing_zeros) = trim_zeros(&digits);
        if coefficient.is_empty() {
            return Self::ZERO;
        }

        // At most 29 digits and a scale of at most 28
        Self {
            negative: mantissa < 0,
            coefficient: coefficient.to_owned(),
            exponent: trailing_zeros as i64 - i64::from(d.scale()),
        }
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `Overflow` if the value exceeds the 96-bit mantissa
    /// - `PrecisionLoss` if it has more than 28 decimal places
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        use rust_decimal::Decimal;

        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let mut mantissa: i128 = self
            .coefficient
            .parse()
            .map_err(|_| NumericError::Overflow)?;

        let scale = if self.exponent < 0 {
            u32::try_from(self.exponent.unsigned_abs())
                .ok()
                .filter(|scale| *scale <= MAX_DECIMAL_SCALE)
                .ok_or(NumericError::PrecisionLoss)?
        } else {
            let factor = u32::try_from(self.exponent)
                .ok()
                .and_then(|exp| 10i128.checked_pow(exp))
                .ok_or(NumericError::Overflow)?;
            mantissa = mantissa
                .checked_mul(factor)
                .ok_or(NumericError::Overflow)?;
            0
        };

        if self.negative {
            mantissa = -mantissa;
        }

        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total number of significant digits, integer and fractional combined.
    ///
    /// Leading zeros and trailing fractional zeros are not counted; trailing
    /// zeros of the integer part are. Zero counts as one digit.
    ///
    /// - `"123.45"` -> 5
    /// - `"100"` -> 3
    /// - `"0.0010"` -> 1
    pub fn total_digits(&self) -> u64 {
        if self.is_zero() {
            return 1;
        }
        let significant = self.coefficient.len() as u64;
        if self.exponent > 0 {
            significant.saturating_add(self.exponent.unsigned_abs())
        } else {
            significant
        }
    }

    /// Number of digits after the decimal point, trailing zeros removed.
    ///
    /// - `"123.45"` -> 2
    /// - `"1.50"` -> 1
    /// - `"1e-3"` -> 3
    pub fn fractional_digits(&self) -> u64 {
        if self.exponent < 0 {
            self.exponent.unsigned_abs()
        } else {
            0
        }
    }

    /// Significant digits without leading or trailing zeros.
    #[inline]
    pub fn coefficient(&self) -> &str {
        &self.coefficient
    }

    /// Power of ten applied to the coefficient.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_empty()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

// ============================================================================
// Parsing Helpers
// ============================================================================

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Split off leading zeros and count trailing zeros.
fn trim_zeros(digits: &str) -> (&str, usize) {
    let significant = digits.trim_start_matches('0');
    let coefficient = significant.trim_end_matches('0');
    (coefficient, significant.len() - coefficient.len())
}

fn parse_exponent(s: &str) -> NumericResult<i64> {
    let digits = s
        .strip_prefix('+')
        .or_else(|| s.strip_prefix('-'))
        .unwrap_or(s);

    if digits.is_empty() || !is_ascii_digits(digits) {
        return Err(NumericError::InvalidInput);
    }

    s.parse().map_err(|_| NumericError::ExponentOverflow)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for DecimalValue {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<rust_decimal::Decimal> for DecimalValue {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_decimal(d)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalValue({}, digits={}, places={})",
            self,
            self.total_digits(),
            self.fractional_digits()
        )
    }
}

impl fmt::Display for DecimalValue {
    /// Plain notation, switching to exponent notation when the leading digit
    /// sits at 10^21 or above, or at 10^-7 or below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.negative {
            write!(f, "-")?;
        }

        let len = self.coefficient.len() as i64;
        let adjusted = self.exponent.saturating_add(len - 1);

        if adjusted <= -7 || adjusted >= 21 {
            let (head, tail) = self.coefficient.split_at(1);
            write!(f, "{}", head)?;
            if !tail.is_empty() {
                write!(f, ".{}", tail)?;
            }
            let sign = if adjusted < 0 { '-' } else { '+' };
            write!(f, "e{}{}", sign, adjusted.unsigned_abs())
        } else if self.exponent >= 0 {
            write!(
                f,
                "{}{}",
                self.coefficient,
                "0".repeat(self.exponent as usize)
            )
        } else {
            let places = self.exponent.unsigned_abs() as usize;
            let len = self.coefficient.len();
            if places >= len {
                write!(f, "0.{}{}", "0".repeat(places - len), self.coefficient)
            } else {
                let (int_part, frac_part) = self.coefficient.split_at(len - places);
                write!(f, "{}.{}", int_part, frac_part)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
