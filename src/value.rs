//! Numeric input handling for the spelling entry points
//!
//! This module implements the Value type wrapping a `Decimal`, so that
//! decimal strings such as "1000.50" parse exactly and fractional input
//! truncates without going through floating point. Construction comes in two
//! layers: a strict one ([`Value::parse`], [`Value::from_f64`]) that reports
//! failures, and a lenient one ([`Value::coerce`]) that collapses anything
//! unparseable to zero, which is the contract the spelling functions expose.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during strict value construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Cannot parse value from string: {0}")]
    ParseError(String),
    #[error("Cannot create value from non-finite number: {0}")]
    NonFinite(f64),
}

/// Result type for strict value construction
pub type ValueResult<T> = Result<T, ValueError>;

/// A numeric input to the spelling functions
///
/// The spelling entry points accept anything convertible into a `Value`.
/// Conversions from text are lenient: non-numeric strings become zero rather
/// than an error, so the public operations built on top stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    quantity: Decimal,
}

impl Value {
    /// The zero value, which spells as "zero"
    pub const ZERO: Value = Value { quantity: Decimal::ZERO };

    /// Create a value from a Decimal
    pub fn from_decimal(quantity: Decimal) -> Self {
        Self { quantity }
    }

    /// Create a value from an integer
    pub fn from_i64(value: i64) -> Self {
        Self::from_decimal(Decimal::from(value))
    }

    /// Create a value from an unsigned integer
    pub fn from_u64(value: u64) -> Self {
        Self::from_decimal(Decimal::from(value))
    }

    /// Create a value from a double
    ///
    /// Fails for non-finite input and for magnitudes a `Decimal` cannot hold.
    pub fn from_f64(value: f64) -> ValueResult<Self> {
        if !value.is_finite() {
            return Err(ValueError::NonFinite(value));
        }

        let quantity =
            Decimal::try_from(value).map_err(|e| ValueError::ParseError(e.to_string()))?;
        Ok(Self::from_decimal(quantity))
    }

    /// Parse a value from a string, strictly
    pub fn parse(text: &str) -> ValueResult<Self> {
        let trimmed = text.trim();
        let quantity =
            trimmed.parse::<Decimal>().map_err(|e| ValueError::ParseError(e.to_string()))?;
        Ok(Self::from_decimal(quantity))
    }

    /// Parse a value from a string, leniently
    ///
    /// Empty and non-numeric text becomes zero. This is the coercion behavior
    /// behind the `From<&str>` conversion used by the spelling entry points.
    pub fn coerce(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|_| {
            debug!("non-numeric input {:?} coerced to zero", text);
            Self::ZERO
        })
    }

    /// Check if this value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.quantity.is_zero()
    }

    /// The integer magnitude the spelling engine consumes
    ///
    /// Absolute value truncated toward zero; "1207.99" has magnitude 1207.
    pub fn magnitude(&self) -> u128 {
        self.quantity.abs().trunc().to_u128().unwrap_or(0)
    }

    /// Get the underlying Decimal
    pub fn to_decimal(&self) -> Decimal {
        self.quantity
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::coerce(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::coerce(&value)
    }
}

impl TryFrom<f64> for Value {
    type Error = ValueError;

    fn try_from(value: f64) -> ValueResult<Self> {
        Self::from_f64(value)
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strict() {
        let value = Value::parse("1000.50").unwrap();
        assert_eq!(value.magnitude(), 1000);
        assert!(!value.is_zero());

        assert!(Value::parse("not a number").is_err());
        assert!(Value::parse("").is_err());
    }

    #[test]
    fn test_coerce_falls_back_to_zero() {
        assert_eq!(Value::coerce("abc"), Value::ZERO);
        assert_eq!(Value::coerce(""), Value::ZERO);
        assert_eq!(Value::coerce("  42  ").magnitude(), 42);
    }

    #[test]
    fn test_magnitude_truncates() {
        assert_eq!(Value::coerce("1207.99").magnitude(), 1207);
        assert_eq!(Value::coerce("0.9").magnitude(), 0);
        assert_eq!(Value::from_i64(-15).magnitude(), 15);
    }

    #[test]
    fn test_from_f64_non_finite() {
        assert!(matches!(Value::from_f64(f64::NAN), Err(ValueError::NonFinite(_))));
        assert!(matches!(Value::from_f64(f64::INFINITY), Err(ValueError::NonFinite(_))));
        assert_eq!(Value::from_f64(2.9).unwrap().magnitude(), 2);
    }

    #[test]
    fn test_from_str_trait() {
        let value: Value = "360.00".parse().unwrap();
        assert_eq!(value.magnitude(), 360);

        assert!("invalid".parse::<Value>().is_err());
    }

    #[test]
    fn test_conversion_ladder() {
        assert_eq!(Value::from(42i32).magnitude(), 42);
        assert_eq!(Value::from(42u64).magnitude(), 42);
        assert_eq!(Value::from("42").magnitude(), 42);
        assert_eq!(Value::from("x".to_string()), Value::ZERO);
    }
}
