//! # Allocation
//!
//! Splits a [`Money`] value into a fixed number of parts without losing or
//! creating a single unit at the requested precision.
//!
//! The value is narrowed once to the output precision, divided evenly, and
//! the leftover units are handed out round-robin starting with the first
//! part. Negative values spread debt the same way.

use num_bigint::BigInt;
use num_traits::{One, Signed};
use tracing::debug;

use crate::{divide_pow10, pow10, Money, MoneyError, MoneyResult, SCALE};

impl Money {
    /// Allocate this value to `parts` shares with `precision` decimals
    ///
    /// The shares sum exactly to this value rounded to `precision`, and no
    /// two shares differ by more than one unit at that precision.
    ///
    /// # Examples
    /// ```
    /// use money_math::Money;
    ///
    /// let dollar = Money::new("1.00", "USD").unwrap();
    /// let shares: Vec<String> = dollar
    ///     .allocate(3, 2)
    ///     .unwrap()
    ///     .iter()
    ///     .map(|share| share.to_fixed(2))
    ///     .collect();
    /// assert_eq!(shares, ["0.34", "0.33", "0.33"]);
    /// ```
    pub fn allocate(&self, parts: usize, precision: u32) -> MoneyResult<Vec<Money>> {
        if parts == 0 {
            return Err(MoneyError::Domain("cannot allocate to zero parts".to_string()));
        }
        if precision > SCALE {
            return Err(MoneyError::Domain(format!(
                "allocation precision {precision} exceeds the supported {SCALE} decimals"
            )));
        }

        let exponent = SCALE - precision;
        let precision_rounder = pow10(exponent);

        // Both remainders (per part and below the precision) end up in one count
        let units = divide_pow10(self.to_source(), exponent, self.round());
        let count = BigInt::from(parts);
        let fraction = &units / &count;
        let extra_units = &units % &count;

        let step = if extra_units.is_negative() {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        let extra = usize::try_from(extra_units.magnitude())
            .map_err(|_| MoneyError::Domain("allocation remainder out of range".to_string()))?;

        debug!(parts, precision, extra, currency = self.currency(), "allocating money");

        let shares = (0..parts)
            .map(|index| {
                let share = if index < extra { &fraction + &step } else { fraction.clone() };
                self.derive(share * &precision_rounder)
            })
            .collect();

        Ok(shares)
    }
}
