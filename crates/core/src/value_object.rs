//! Value objects: equality by value, not identity.
//!
//! `Quantity` and `Price` are the only way the console turns raw text into
//! record fields. Their `parse` functions are pure parse-and-validate steps;
//! retrying on failure is the caller's decision.

use crate::error::InputError;

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A non-negative stock quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parse a whole number typed by the user.
    ///
    /// Anything that is not an integer in range is `InvalidNumber`; a
    /// well-formed negative integer is reported as `Negative` instead.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let value: i64 = input.trim().parse().map_err(|_| InputError::InvalidNumber)?;
        if value < 0 {
            return Err(InputError::Negative("Quantity"));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| InputError::InvalidNumber)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// A non-negative, finite unit price.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Validate an already-numeric price.
    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() {
            return Err(InputError::InvalidDecimal);
        }
        if value < 0.0 {
            return Err(InputError::Negative("Price"));
        }
        // -0.0 would otherwise render as "-0.00".
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Parse a decimal number typed by the user.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let value: f64 = input.trim().parse().map_err(|_| InputError::InvalidDecimal)?;
        Self::new(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}
