//! # Serde Interchange
//!
//! A [`Money`] value travels as the ordered pair `[formatted, currency]`,
//! e.g. `["12.5", "USD"]`. The rounding policy is not part of the pair;
//! deserialized values round half to even.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Money;

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.format(), self.currency()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (amount, currency) = <(String, String)>::deserialize(deserializer)?;
        Money::new(amount.as_str(), currency).map_err(D::Error::custom)
    }
}
