//! Products

use std::{fmt, num::NonZeroU32};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::cart::CartError;

/// Product identifier, the unique key of a cart line.
///
/// Identifiers are always positive; zero and negative values are rejected at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "i64")]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Create a product id from a raw unsigned value.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidProductId`] if `raw` is zero.
    pub fn new(raw: u32) -> Result<Self, CartError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(CartError::InvalidProductId(i64::from(raw)))
    }

    /// Returns the raw identifier value.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for ProductId {
    type Error = CartError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(CartError::InvalidProductId(value))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'static, Currency>,
}
