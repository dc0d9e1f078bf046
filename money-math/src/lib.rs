//! # Money Math Library
//!
//! Exact fixed-point money arithmetic on top of arbitrary-precision integers.
//! Amounts never touch binary floating point: every value is stored as a
//! `BigInt` holding the decimal amount multiplied by `10^SCALE`.
//!
//! ## Key Features
//!
//! - **Lossless storage** of up to [`SCALE`] fractional digits
//! - **Explicit rounding policy** per value ([`Round`])
//! - **Currency tags** that guard additive and comparative operations
//! - **Fair allocation** of an amount into parts that sum back exactly
//!
//! ## Fixed-Point Representation
//!
//! ```rust
//! use money_math::Money;
//!
//! // 123.45 is stored as 123.45 * 10^20
//! let price = Money::new("123.45", "USD").unwrap();
//! assert_eq!(price.to_source().to_string(), "12345000000000000000000");
//! assert_eq!(price.to_fixed(2), "123.45");
//! ```

pub mod allocation;
pub mod fixed;
pub mod money;
pub mod rounding;
pub mod scale;
#[cfg(feature = "serde")]
pub mod serde_impl;

#[cfg(test)]
mod props;

pub use fixed::*;
pub use money::*;
pub use rounding::*;
pub use scale::*;

pub use num_bigint::BigInt;

use thiserror::Error;

/// Number of fractional digits carried by every scaled integer
pub const SCALE: u32 = 20;

/// Largest integer a caller may pass as a machine number (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Core error type for money operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Input string is not a plain decimal number
    #[error("input string must follow the pattern (-)##.## or -##, got {0:?}")]
    Format(String),
    /// Machine number is not an exactly representable integer
    #[error("the number {0} is not a safe integer, convert it before passing it")]
    Overflow(String),
    /// Two amounts carry different currency tags
    #[error("cannot {operation} money in different currencies ({expected} and {found}), convert first")]
    IncompatibleCurrency {
        /// The rejected operation
        operation: &'static str,
        /// Currency of the receiver
        expected: String,
        /// Currency of the operand
        found: String,
    },
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Argument outside the operation's domain
    #[error("{0}")]
    Domain(String),
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
