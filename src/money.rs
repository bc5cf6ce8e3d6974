//! Money Type
//!
//! Every monetary value that crosses the API or store boundary (`price`,
//! `totalAmount`) goes through [`Amount`].
//!
//! ## Design Principles
//! 1. Decimal internally: no binary float drift in arithmetic or comparisons
//! 2. Strict input: format is checked while deserializing, so handlers never
//!    see a malformed or negative amount
//! 3. Number output: amounts render as JSON / BSON numbers, which is what
//!    existing clients of the catalog expect
//!
//! ## Accepted input
//! - JSON number: `599.98`, `10`
//! - JSON string: `"599.98"`
//!
//! ## Rejected input
//! - negative values (`-1`, `"-0.5"`)
//! - empty strings, `.5` (use `0.5`), `5.` (use `5` or `5.0`)
//! - scientific notation in strings (`"1e3"`)

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Amount parse errors
#[derive(Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("Amount cannot be empty")]
    Empty,

    #[error("Invalid format: use 0.5 not .5")]
    LeadingDot,

    #[error("Invalid format: use 5.0 not 5.")]
    TrailingDot,

    #[error("Invalid format: scientific notation not allowed")]
    Scientific,

    #[error("Amount cannot be negative")]
    Negative,

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Amount is not a finite number")]
    NotFinite,
}

/// Non-negative decimal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Wrap a decimal, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative);
        }
        Ok(Self(value))
    }

    /// `mantissa * 10^-scale`, e.g. `from_scaled(49999, 2)` is `499.99`.
    ///
    /// Panics if `scale` exceeds 28.
    pub fn from_scaled(mantissa: u32, scale: u32) -> Self {
        Self(Decimal::new(i64::from(mantissa), scale))
    }

    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    /// Parse with strict format rules
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        if s.is_empty() {
            return Err(MoneyError::Empty);
        }
        if s.starts_with('.') {
            return Err(MoneyError::LeadingDot);
        }
        if s.ends_with('.') {
            return Err(MoneyError::TrailingDot);
        }
        if s.contains('e') || s.contains('E') {
            return Err(MoneyError::Scientific);
        }
        let d = Decimal::from_str(s).map_err(|e| MoneyError::InvalidDecimal(e.to_string()))?;
        Self::new(d)
    }

    /// Convert a float the way it prints, so `599.98_f64` becomes exactly `599.98`.
    pub fn from_f64(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        let d = Decimal::from_str(&value.to_string())
            .map_err(|e| MoneyError::InvalidDecimal(e.to_string()))?;
        Self::new(d)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.normalize().fmt(f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0.to_f64().unwrap_or_default())
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative decimal number or decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Amount::from_f64(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Amount::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(v)))
    }

    fn visit_i32<E: de::Error>(self, v: i32) -> Result<Amount, E> {
        self.visit_i64(i64::from(v))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

// ============================================================================
// Tests
// ============================================================================
