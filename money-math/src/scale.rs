//! # Scaled Integer Conversions
//!
//! Normalizes every accepted kind of input (decimal strings, machine
//! numbers, whole-unit big integers and existing [`Money`] values) into one
//! canonical representation: a `BigInt` equal to the amount times
//! `10^SCALE`.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use tracing::trace;

use crate::{divide, pow10, scale_factor, Money, MoneyError, MoneyResult, Round, MAX_SAFE_INTEGER, SCALE};

/// Any value that can take part in money arithmetic
#[derive(Debug, Clone)]
pub enum Amount<'a> {
    /// An existing money value; its scaled integer is used as is
    Money(&'a Money),
    /// A decimal string such as `"-12.345"`
    Str(&'a str),
    /// A machine integer within `±MAX_SAFE_INTEGER`
    Int(i64),
    /// A machine number; must be integral and within `±MAX_SAFE_INTEGER`
    Number(f64),
    /// A whole-unit integer of any size
    BigInt(BigInt),
}

impl<'a> From<&'a Money> for Amount<'a> {
    fn from(value: &'a Money) -> Self {
        Amount::Money(value)
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Str(value)
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    fn from(value: &'a String) -> Self {
        Amount::Str(value.as_str())
    }
}

impl From<i64> for Amount<'_> {
    fn from(value: i64) -> Self {
        Amount::Int(value)
    }
}

impl From<i32> for Amount<'_> {
    fn from(value: i32) -> Self {
        Amount::Int(i64::from(value))
    }
}

impl From<u32> for Amount<'_> {
    fn from(value: u32) -> Self {
        Amount::Int(i64::from(value))
    }
}

impl From<f64> for Amount<'_> {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<BigInt> for Amount<'_> {
    fn from(value: BigInt) -> Self {
        Amount::BigInt(value)
    }
}

/// Convert any [`Amount`] into a scaled integer
///
/// Strings with more fractional digits than [`SCALE`] are rounded with
/// `round`; they are never silently truncated.
///
/// # Examples
/// ```
/// use money_math::{to_scaled, Amount, Round};
///
/// let scaled = to_scaled(Amount::Str("1.5"), Round::HalfToEven).unwrap();
/// assert_eq!(scaled.to_string(), "150000000000000000000");
///
/// let scaled = to_scaled(Amount::Int(-2), Round::HalfToEven).unwrap();
/// assert_eq!(scaled.to_string(), "-200000000000000000000");
///
/// assert!(to_scaled(Amount::Str("1,5"), Round::HalfToEven).is_err());
/// ```
pub fn to_scaled(input: Amount<'_>, round: Round) -> MoneyResult<BigInt> {
    match input {
        Amount::Money(money) => Ok(money.to_source().clone()),
        Amount::BigInt(whole) => Ok(whole * scale_factor()),
        Amount::Int(value) => int_to_scaled(value),
        Amount::Number(value) => number_to_scaled(value),
        Amount::Str(value) => parse_decimal(value, round),
    }
}

fn int_to_scaled(value: i64) -> MoneyResult<BigInt> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER.unsigned_abs() {
        return Err(MoneyError::Overflow(value.to_string()));
    }
    Ok(BigInt::from(value) * scale_factor())
}

fn number_to_scaled(value: f64) -> MoneyResult<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(MoneyError::Overflow(value.to_string()));
    }
    // Integral and inside the safe range, so the cast is exact
    int_to_scaled(value as i64)
}

/// Parse `(-)?digits?(.digits?)?` into a scaled integer
fn parse_decimal(input: &str, round: Round) -> MoneyResult<BigInt> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (whole_digits, fraction_digits) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };

    let is_digits = |digits: &str| digits.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole_digits) || !fraction_digits.map_or(true, is_digits) {
        return Err(MoneyError::Format(input.to_string()));
    }

    let mut magnitude = parse_digits(whole_digits, input)? * scale_factor();

    if let Some(digits) = fraction_digits {
        let fraction = parse_digits(digits, input)?;
        let length = u32::try_from(digits.len()).map_err(|_| MoneyError::Format(input.to_string()))?;

        if length <= SCALE {
            magnitude += fraction * pow10(SCALE - length);
        } else {
            // Lossy: round the digits beyond SCALE away under the active policy
            let narrowed = divide(&fraction, &pow10(length - SCALE), round)?;
            trace!(input, ?round, dropped = length - SCALE, "narrowed fractional digits");
            magnitude += narrowed;
        }
    }

    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_digits(digits: &str, input: &str) -> MoneyResult<BigInt> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .map(BigInt::from)
        .ok_or_else(|| MoneyError::Format(input.to_string()))
}
