//! # Fixed-Precision Rendering
//!
//! Renders a scaled integer as a decimal string with an exact number of
//! fractional digits. Digits beyond the requested precision are rounded
//! through [`divide_pow10`]; missing digits are padded with zeros.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{divide_pow10, pow10, scale_factor, Round, SCALE};

/// Render a scaled integer with exactly `precision` fractional digits
///
/// A zero whole part of a negative value keeps its sign, so `-0.004`
/// renders as `"-0.00"` at precision 2.
///
/// # Examples
/// ```
/// use money_math::{to_fixed, pow10, Round, SCALE};
/// use num_bigint::BigInt;
///
/// let one = pow10(SCALE);
/// assert_eq!(to_fixed(&one, 2, Round::HalfToEven), "1.00");
///
/// // 0.995 carries into the whole part
/// let value = BigInt::from(995) * pow10(SCALE - 3);
/// assert_eq!(to_fixed(&value, 2, Round::HalfToEven), "1.00");
/// ```
pub fn to_fixed(value: &BigInt, precision: u32, round: Round) -> String {
    if precision == 0 {
        return divide_pow10(value, SCALE, round).to_string();
    }

    let negative = value.is_negative();
    let mut whole = value / scale_factor();
    let remainder = value % scale_factor();

    let remainder = match precision.cmp(&SCALE) {
        // More digits than stored: pad, never invent digits
        Ordering::Greater => remainder * pow10(precision - SCALE),
        Ordering::Less => divide_pow10(&remainder, SCALE - precision, round),
        Ordering::Equal => remainder,
    };

    let width = precision as usize;
    let mut fraction = format!("{:0>width$}", remainder.magnitude().to_string());

    if fraction.len() > width {
        // The fraction rounded all the way up into the whole part
        if negative {
            whole -= 1u32;
        } else {
            whole += 1u32;
        }
        fraction = "0".repeat(width);
    }

    if whole.is_zero() && negative {
        format!("-0.{fraction}")
    } else {
        format!("{whole}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(units: i64, exponent: u32, precision: u32) -> String {
        let value = BigInt::from(units) * pow10(exponent);
        to_fixed(&value, precision, Round::BANKERS)
    }

    #[test]
    fn test_positive_values() {
        assert_eq!(to_fixed(&BigInt::from(1), 0, Round::BANKERS), "0");
        assert_eq!(fixed(1, SCALE, 0), "1");
        assert_eq!(fixed(1, SCALE - 1, 0), "0");
        assert_eq!(fixed(1, SCALE - 1, 1), "0.1");
        assert_eq!(fixed(1, SCALE - 2, 2), "0.01");
        assert_eq!(fixed(4, SCALE - 3, 2), "0.00");
        assert_eq!(fixed(5, SCALE - 3, 2), "0.00");
        assert_eq!(fixed(6, SCALE - 3, 2), "0.01");
        assert_eq!(fixed(99, SCALE - 2, 2), "0.99");
        assert_eq!(fixed(995, SCALE - 3, 2), "1.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(to_fixed(&BigInt::from(-1), 0, Round::BANKERS), "0");
        assert_eq!(fixed(-1, SCALE, 0), "-1");
        assert_eq!(fixed(-1, SCALE - 1, 0), "0");
        assert_eq!(fixed(-1, SCALE - 1, 1), "-0.1");
        assert_eq!(fixed(-1, SCALE - 2, 2), "-0.01");
        assert_eq!(fixed(-4, SCALE - 3, 2), "-0.00");
        assert_eq!(fixed(-5, SCALE - 3, 2), "-0.00");
        assert_eq!(fixed(-6, SCALE - 3, 2), "-0.01");
        assert_eq!(fixed(-99, SCALE - 2, 2), "-0.99");
        assert_eq!(fixed(-995, SCALE - 3, 2), "-1.00");
    }

    #[test]
    fn test_whole_parts_and_carry() {
        assert_eq!(fixed(12_345, SCALE - 2, 2), "123.45");
        assert_eq!(fixed(12_345, SCALE - 2, 1), "123.4");
        assert_eq!(fixed(19_995, SCALE - 3, 2), "20.00");
        assert_eq!(fixed(-19_995, SCALE - 3, 2), "-20.00");
        assert_eq!(fixed(-12_345, SCALE - 2, 0), "-123");
    }

    #[test]
    fn test_rounding_policy_is_respected() {
        let value = BigInt::from(125) * pow10(SCALE - 3); // 0.125
        assert_eq!(to_fixed(&value, 2, Round::HalfToEven), "0.12");
        assert_eq!(to_fixed(&value, 2, Round::HalfAwayFromZero), "0.13");
        assert_eq!(to_fixed(&value, 2, Round::HalfTowardsZero), "0.12");

        let value = BigInt::from(129) * pow10(SCALE - 3); // 0.129
        assert_eq!(to_fixed(&value, 2, Round::Truncate), "0.12");
        assert_eq!(to_fixed(&value, 2, Round::HalfTowardsZero), "0.13");
    }

    #[test]
    fn test_precision_beyond_scale_pads() {
        let value = BigInt::from(1); // 0.00000000000000000001
        assert_eq!(
            to_fixed(&value, SCALE + 2, Round::BANKERS),
            "0.0000000000000000000100"
        );
        assert_eq!(fixed(3, SCALE, SCALE + 1), "3.000000000000000000000");
        assert_eq!(fixed(-15, SCALE - 1, SCALE + 1), "-1.500000000000000000000");
    }

    #[test]
    fn test_precision_equal_to_scale() {
        let value = BigInt::from(-1);
        assert_eq!(to_fixed(&value, SCALE, Round::BANKERS), "-0.00000000000000000001");
        assert_eq!(to_fixed(&BigInt::zero(), SCALE, Round::BANKERS), "0.00000000000000000000");
    }
}
