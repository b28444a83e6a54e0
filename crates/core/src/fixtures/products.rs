//! Product Fixtures

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<i64, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "2.99 GBP")
    pub price: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
        })
    }
}

impl TryFrom<ProductsFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: ProductsFixture) -> Result<Self, Self::Error> {
        // Sorted so the currency check and error reporting are deterministic.
        let mut entries: Vec<(i64, ProductFixture)> = fixture.products.into_iter().collect();
        entries.sort_by_key(|(id, _)| *id);

        let mut catalog: Option<Catalog> = None;

        for (raw_id, product_fixture) in entries {
            let id = ProductId::try_from(raw_id)
                .map_err(|_err| FixtureError::InvalidProductId(raw_id))?;

            let product = Product::try_from(product_fixture)?;

            catalog
                .get_or_insert_with(|| Catalog::new(product.price.currency()))
                .insert(id, product)?;
        }

        catalog.ok_or(FixtureError::NoProducts)
    }
}

/// Parse a fixture price such as `"2.99 GBP"` into minor units and its currency.
///
/// Amounts are rounded half away from zero to whole minor units.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] unless the price is exactly one non-negative decimal
/// amount followed by a currency code, and [`FixtureError::UnknownCurrency`] for a code outside
/// GBP, USD and EUR.
pub fn parse_price(price: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let invalid = || FixtureError::InvalidPrice(price.to_string());

    let mut tokens = price.split_whitespace();

    let (Some(amount), Some(code), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };

    let amount: Decimal = amount.parse().map_err(|_err| invalid())?;

    if amount.is_sign_negative() {
        return Err(invalid());
    }

    let currency = [GBP, USD, EUR]
        .into_iter()
        .find(|currency| currency.iso_alpha_code == code)
        .ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|minor| minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|minor| minor.to_i64())
        .ok_or_else(invalid)?;

    Ok((minor_units, currency))
}
