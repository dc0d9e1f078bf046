//! # Money Value Type
//!
//! [`Money`] pairs a scaled integer with an opaque currency tag and a
//! rounding policy. Every operation returns a new value; nothing mutates an
//! existing one.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::{
    divide, divide_pow10, scale_factor, to_fixed, to_scaled, Amount, MoneyError, MoneyResult, Round,
    SCALE,
};

/// An exact monetary amount in a single currency
///
/// # Examples
/// ```
/// use money_math::Money;
///
/// let price = Money::new("19.99", "USD").unwrap();
/// let total = price.multiply(3).unwrap().add("0.03").unwrap();
/// assert_eq!(total.to_fixed(2), "60.00");
/// assert_eq!(total.to_string(), "60 USD");
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    value: BigInt,
    currency: String,
    round: Round,
}

impl Money {
    /// Create a value that rounds half to even
    pub fn new<'a>(value: impl Into<Amount<'a>>, currency: impl Into<String>) -> MoneyResult<Self> {
        Self::with_round(value, currency, Round::default())
    }

    /// Create a value with an explicit rounding policy
    ///
    /// # Examples
    /// ```
    /// use money_math::{Money, Round};
    ///
    /// let value = Money::with_round("0.125", "EUR", Round::HalfAwayFromZero).unwrap();
    /// assert_eq!(value.to_fixed(2), "0.13");
    ///
    /// assert!(Money::with_round("12,5", "EUR", Round::Truncate).is_err());
    /// ```
    pub fn with_round<'a>(
        value: impl Into<Amount<'a>>,
        currency: impl Into<String>,
        round: Round,
    ) -> MoneyResult<Self> {
        let value = to_scaled(value.into(), round)?;
        Ok(Self::from_source(value, currency, round))
    }

    /// Wrap an already scaled integer without any validation
    ///
    /// `value` must already be multiplied by `10^SCALE`; it is the inverse
    /// of [`Money::to_source`].
    pub fn from_source(value: BigInt, currency: impl Into<String>, round: Round) -> Self {
        Self {
            value,
            currency: currency.into(),
            round,
        }
    }

    /// Zero in the given currency
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::from_source(BigInt::zero(), currency, Round::default())
    }

    /// The underlying scaled integer (the amount times `10^SCALE`)
    pub fn to_source(&self) -> &BigInt {
        &self.value
    }

    /// The currency tag
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The rounding policy carried by this value
    pub fn round(&self) -> Round {
        self.round
    }

    /// True when the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// True when the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// New value in this currency and policy
    pub(crate) fn derive(&self, value: BigInt) -> Self {
        Self::from_source(value, self.currency.clone(), self.round)
    }

    fn ensure_same_currency(&self, operand: &Amount<'_>, operation: &'static str) -> MoneyResult<()> {
        match operand {
            Amount::Money(other) if other.currency != self.currency => {
                Err(MoneyError::IncompatibleCurrency {
                    operation,
                    expected: self.currency.clone(),
                    found: other.currency.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Exact addition; a [`Money`] operand must share the currency
    pub fn add<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        let operand = operand.into();
        self.ensure_same_currency(&operand, "add")?;

        let addend = to_scaled(operand, self.round)?;
        Ok(self.derive(&self.value + addend))
    }

    /// Exact subtraction; a [`Money`] operand must share the currency
    pub fn subtract<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        let operand = operand.into();
        self.ensure_same_currency(&operand, "subtract")?;

        let subtrahend = to_scaled(operand, self.round)?;
        Ok(self.derive(&self.value - subtrahend))
    }

    /// Multiply by a dimensionless factor
    ///
    /// The operand's currency is ignored; the result keeps this value's
    /// currency.
    ///
    /// # Examples
    /// ```
    /// use money_math::Money;
    ///
    /// let usd = Money::new(1, "USD").unwrap();
    /// let eur = Money::new(2, "EUR").unwrap();
    /// let product = usd.multiply(&eur).unwrap();
    /// assert_eq!(product.currency(), "USD");
    /// assert_eq!(product.format(), "2");
    /// ```
    pub fn multiply<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        let factor = to_scaled(operand.into(), self.round)?;

        // The product carries 10^SCALE twice; one rounding pass removes it
        let product = factor * &self.value;
        Ok(self.derive(divide_pow10(&product, SCALE, self.round)))
    }

    /// Divide by a dimensionless divisor
    ///
    /// # Examples
    /// ```
    /// use money_math::Money;
    ///
    /// let total = Money::new(10, "USD").unwrap();
    /// assert_eq!(total.divide(4).unwrap().to_fixed(2), "2.50");
    /// assert!(total.divide(0).is_err());
    /// ```
    pub fn divide<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        // Scaling the receiver once more keeps SCALE digits in the quotient
        let dividend = to_scaled(Amount::BigInt(self.value.clone()), self.round)?;
        let divisor = to_scaled(operand.into(), self.round)?;

        Ok(self.derive(divide(&dividend, &divisor, self.round)?))
    }

    /// Raise to an integer power
    ///
    /// Negative exponents are computed as `1 / self^-exponent`.
    ///
    /// # Examples
    /// ```
    /// use money_math::Money;
    ///
    /// let rate = Money::new("1.1", "USD").unwrap();
    /// assert_eq!(rate.pow(2).unwrap().format(), "1.21");
    /// assert_eq!(rate.pow(0).unwrap().format(), "1");
    ///
    /// let two = Money::new(2, "USD").unwrap();
    /// assert_eq!(two.pow(-2).unwrap().format(), "0.25");
    /// ```
    pub fn pow(&self, exponent: i32) -> MoneyResult<Self> {
        match exponent {
            0 => Ok(self.derive(scale_factor().clone())),
            1 => Ok(self.clone()),
            e if e > 1 => {
                let e = e.unsigned_abs();
                let correction = SCALE.checked_mul(e - 1).ok_or_else(|| {
                    MoneyError::Domain(format!("exponent {exponent} is too large"))
                })?;
                let raised = self.value.pow(e);
                Ok(self.derive(divide_pow10(&raised, correction, self.round)))
            }
            e => {
                let positive = e.checked_neg().ok_or_else(|| {
                    MoneyError::Domain(format!("exponent {exponent} is too large"))
                })?;
                let one = self.derive(scale_factor().clone());
                one.divide(&self.pow(positive)?)
            }
        }
    }

    /// The absolute value, equivalent to multiplying by [`Money::sign`]
    pub fn abs(&self) -> Self {
        self.derive(self.value.abs())
    }

    /// `-1`, `0` or `1` depending on how this value compares to zero
    pub fn sign(&self) -> i32 {
        match self.value.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Three-way comparison; a [`Money`] operand must share the currency
    ///
    /// # Examples
    /// ```
    /// use money_math::Money;
    /// use std::cmp::Ordering;
    ///
    /// let a = Money::new("10.50", "USD").unwrap();
    /// assert_eq!(a.compare("10.5").unwrap(), Ordering::Equal);
    /// assert_eq!(a.compare(11).unwrap(), Ordering::Less);
    /// assert!(a.compare(&Money::new(1, "EUR").unwrap()).is_err());
    /// ```
    pub fn compare<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<Ordering> {
        let operand = operand.into();
        self.ensure_same_currency(&operand, "compare")?;

        let other = to_scaled(operand, self.round)?;
        Ok(self.value.cmp(&other))
    }

    /// True if this value is less than the operand
    pub fn is_lesser_than<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        Ok(self.compare(operand)? == Ordering::Less)
    }

    /// True if this value is greater than the operand
    pub fn is_greater_than<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        Ok(self.compare(operand)? == Ordering::Greater)
    }

    /// True if this value equals the operand
    pub fn is_equal<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        Ok(self.compare(operand)? == Ordering::Equal)
    }

    /// True if this value is less than or equal to the operand
    pub fn is_lesser_than_or_equal<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        Ok(self.compare(operand)? != Ordering::Greater)
    }

    /// True if this value is greater than or equal to the operand
    pub fn is_greater_than_or_equal<'a>(&self, operand: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        Ok(self.compare(operand)? != Ordering::Less)
    }

    /// Render with exactly `precision` fractional digits
    ///
    /// Decimals are always returned: `Money::new(1, "USD")?.to_fixed(2)` is
    /// `"1.00"`.
    pub fn to_fixed(&self, precision: u32) -> String {
        to_fixed(&self.value, precision, self.round)
    }

    /// Render at full precision with trailing zeros removed
    ///
    /// # Examples
    /// ```
    /// use money_math::Money;
    ///
    /// assert_eq!(Money::new("100.50", "USD").unwrap().format(), "100.5");
    /// assert_eq!(Money::new("100", "USD").unwrap().format(), "100");
    /// assert_eq!(Money::new("-0.25", "USD").unwrap().format(), "-0.25");
    /// ```
    pub fn format(&self) -> String {
        let fixed = self.to_fixed(SCALE);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format(), self.currency)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.value == other.value
    }
}

impl Eq for Money {}

/// Values in different currencies are unordered
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.value.cmp(&other.value))
    }
}
