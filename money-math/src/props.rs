//! Property-based tests for money arithmetic.
//!
//! - Decimal strings survive parsing and fixed rendering unchanged
//! - Addition and subtraction obey the usual laws within one currency
//! - Allocation conserves the value and keeps shares within one unit
//! - Rounding division stays within half a divisor of the exact quotient

use num_bigint::BigInt;
use num_traits::Signed;
use proptest::prelude::*;

use crate::{divide, divide_pow10, pow10, Money, Round, SCALE};

/// Strategy for decimal strings with up to 20 fractional digits.
fn decimal_string() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u64..1_000_000_000_000, "[0-9]{1,20}")
        .prop_map(|(negative, whole, fraction)| {
            let sign = if negative { "-" } else { "" };
            format!("{sign}{whole}.{fraction}")
        })
}

/// Strategy for amounts with at most 6 decimals (-1,000,000 to 1,000,000).
fn amount() -> impl Strategy<Value = Money> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|micros| {
        Money::from_source(BigInt::from(micros) * pow10(SCALE - 6), "USD", Round::HalfToEven)
    })
}

fn any_round() -> impl Strategy<Value = Round> {
    prop_oneof![
        Just(Round::HalfToEven),
        Just(Round::HalfAwayFromZero),
        Just(Round::HalfTowardsZero),
        Just(Round::Truncate),
    ]
}

/// The canonical form of a generated decimal: zero never carries a sign.
fn canonical(input: &str) -> String {
    let unsigned = input.trim_start_matches('-');
    if unsigned.bytes().all(|b| b == b'0' || b == b'.') {
        unsigned.to_string()
    } else {
        input.to_string()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_decimal_round_trip(input in decimal_string()) {
        let digits = input.split_once('.').map_or(0, |(_, fraction)| fraction.len());
        let money = Money::new(input.as_str(), "USD").unwrap();
        prop_assert_eq!(money.to_fixed(digits as u32), canonical(&input));
    }

    #[test]
    fn prop_add_is_commutative(a in amount(), b in amount()) {
        prop_assert!(a.add(&b).unwrap().is_equal(&b.add(&a).unwrap()).unwrap());
    }

    #[test]
    fn prop_add_is_associative(a in amount(), b in amount(), c in amount()) {
        let left = a.add(&b).unwrap().add(&c).unwrap();
        let right = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert!(left.is_equal(&right).unwrap());
    }

    #[test]
    fn prop_subtract_self_is_zero(a in amount()) {
        prop_assert!(a.subtract(&a).unwrap().is_equal(0).unwrap());
    }

    #[test]
    fn prop_allocation_conserves_value(
        money in amount(),
        parts in 1usize..50,
        precision in 0u32..=8,
    ) {
        let shares = money.allocate(parts, precision).unwrap();
        prop_assert_eq!(shares.len(), parts);

        let sum = shares
            .iter()
            .try_fold(Money::zero("USD"), |sum, share| sum.add(share))
            .unwrap();

        // The sum is the source rounded to the output precision
        let unit = pow10(SCALE - precision);
        let expected = divide_pow10(money.to_source(), SCALE - precision, money.round()) * &unit;
        prop_assert_eq!(sum.to_source(), &expected);

        let largest = shares.iter().map(|s| s.to_source().abs()).max().unwrap();
        let smallest = shares.iter().map(|s| s.to_source().abs()).min().unwrap();
        prop_assert!(largest - smallest <= unit);
    }

    #[test]
    fn prop_division_is_within_half(
        a in -1_000_000i64..1_000_000,
        b in (1i64..10_000).prop_flat_map(|b| prop_oneof![Just(b), Just(-b)]),
        round in any_round(),
    ) {
        let quotient = divide(&BigInt::from(a), &BigInt::from(b), round).unwrap();
        let error = (BigInt::from(a) - &quotient * BigInt::from(b)).abs() * 2;
        if round == Round::Truncate {
            prop_assert!(error < BigInt::from(2 * b.abs()));
        } else {
            prop_assert!(error <= BigInt::from(b.abs()));
        }
    }

    #[test]
    fn prop_division_is_symmetric(
        a in -1_000_000i64..1_000_000,
        b in 1i64..10_000,
        round in any_round(),
    ) {
        let positive = divide(&BigInt::from(a), &BigInt::from(b), round).unwrap();
        let negative = divide(&BigInt::from(-a), &BigInt::from(b), round).unwrap();
        prop_assert_eq!(positive, -negative);
    }
}
