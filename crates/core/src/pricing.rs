//! Prices

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{cart::Cart, catalog::Catalog, items::CartItem, products::ProductId};

/// Errors that can occur while pricing cart lines.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A cart line refers to a product the catalog does not have.
    #[error("Product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    /// A line or cart total does not fit in minor units.
    #[error("Price of product {0} overflows")]
    Overflow(ProductId),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the price of a cart line: the product's unit price times the line quantity.
///
/// # Errors
///
/// - [`PricingError::UnknownProduct`]: the line's product is not in the catalog.
/// - [`PricingError::Overflow`]: the line total does not fit in minor units.
pub fn line_total(
    item: &CartItem,
    catalog: &Catalog,
) -> Result<Money<'static, Currency>, PricingError> {
    let product = catalog
        .get(item.id())
        .ok_or(PricingError::UnknownProduct(item.id()))?;

    let minor_units = product
        .price
        .to_minor_units()
        .checked_mul(i64::from(item.quantity()))
        .ok_or(PricingError::Overflow(item.id()))?;

    Ok(Money::from_minor(minor_units, catalog.currency()))
}

/// Calculates the subtotal of a cart in the catalog currency. An empty cart costs nothing.
///
/// # Errors
///
/// - [`PricingError::UnknownProduct`]: a line's product is not in the catalog.
/// - [`PricingError::Overflow`]: a line total does not fit in minor units.
/// - [`PricingError::Money`]: wrapped money arithmetic error.
pub fn cart_subtotal(
    cart: &Cart,
    catalog: &Catalog,
) -> Result<Money<'static, Currency>, PricingError> {
    cart.iter().try_fold(
        Money::from_minor(0, catalog.currency()),
        |acc, item| Ok(acc.add(line_total(item, catalog)?)?),
    )
}
