//! # Rounding Division
//!
//! Division of big integers under a selectable rounding policy. Every
//! rounding decision made anywhere in the crate goes through this module.

use std::cmp::Ordering;
use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use tracing::trace;

use crate::{MoneyError, MoneyResult, SCALE};

/// Rounding policy applied whenever a result has to drop digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    /// Ties go to the even neighbour
    #[default]
    HalfToEven,
    /// Ties go away from zero
    HalfAwayFromZero,
    /// Ties go towards zero
    HalfTowardsZero,
    /// Drops the discarded digits entirely, even above the half
    Truncate,
}

impl Round {
    /// Alias of [`Round::HalfToEven`]
    pub const BANKERS: Round = Round::HalfToEven;
    /// Alias of [`Round::Truncate`]
    pub const TOWARDS_ZERO: Round = Round::Truncate;
}

/// `10^exponent` as a big integer
///
/// # Examples
/// ```
/// use money_math::pow10;
///
/// assert_eq!(pow10(3).to_string(), "1000");
/// ```
pub fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

/// `10^SCALE`, the factor between a human amount and its scaled integer
pub fn scale_factor() -> &'static BigInt {
    static FACTOR: OnceLock<BigInt> = OnceLock::new();
    FACTOR.get_or_init(|| pow10(SCALE))
}

/// Divide `a` by `b`, rounding the quotient with `round`
///
/// The magnitude is rounded first; the sign (negative iff exactly one
/// operand is negative) is applied afterwards.
///
/// # Examples
/// ```
/// use money_math::{divide, Round};
/// use num_bigint::BigInt;
///
/// let q = divide(&BigInt::from(7), &BigInt::from(2), Round::HalfToEven).unwrap();
/// assert_eq!(q, BigInt::from(4));
///
/// let q = divide(&BigInt::from(-5), &BigInt::from(2), Round::HalfAwayFromZero).unwrap();
/// assert_eq!(q, BigInt::from(-3));
///
/// assert!(divide(&BigInt::from(1), &BigInt::from(0), Round::Truncate).is_err());
/// ```
pub fn divide(a: &BigInt, b: &BigInt, round: Round) -> MoneyResult<BigInt> {
    if b.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }

    let magnitude = round_quotient(a.magnitude(), b.magnitude(), round);
    Ok(apply_sign(magnitude, a.sign() != b.sign()))
}

/// Divide `value` by `10^exponent`, rounding with `round`
///
/// The divisor can never be zero, so unlike [`divide`] this cannot fail.
pub fn divide_pow10(value: &BigInt, exponent: u32, round: Round) -> BigInt {
    if exponent == 0 {
        return value.clone();
    }

    let divisor = if exponent == SCALE {
        scale_factor().magnitude().clone()
    } else {
        BigUint::from(10u32).pow(exponent)
    };
    let magnitude = round_quotient(value.magnitude(), &divisor, round);
    apply_sign(magnitude, value.sign() == Sign::Minus)
}

/// Rounded `|a| / |b|`; `b` must be non-zero
fn round_quotient(a: &BigUint, b: &BigUint, round: Round) -> BigUint {
    let mut quotient = a / b;
    let remainder = a % b;
    let twice_remainder = remainder * 2u32;

    let round_up = match twice_remainder.cmp(b) {
        Ordering::Greater => round != Round::Truncate,
        Ordering::Equal => match round {
            Round::HalfToEven => !(&quotient % 2u32).is_zero(),
            Round::HalfAwayFromZero => true,
            Round::HalfTowardsZero | Round::Truncate => false,
        },
        Ordering::Less => false,
    };

    if round_up {
        trace!(?round, "rounded quotient away from zero");
        quotient += 1u32;
    }
    quotient
}

fn apply_sign(magnitude: BigUint, negative: bool) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}
