//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    actions::{ActionParseError, CartAction},
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError},
    config::{CartConfig, ConfigError, MissingItemPolicy},
    fixtures::{Fixture, FixtureError},
    items::CartItem,
    pricing::{PricingError, cart_subtotal, line_total},
    products::{Product, ProductId},
    state::CartState,
    summary::{CartSummary, SummaryError},
};
