//! Trolley
//!
//! Trolley is the shopping-cart state container behind a storefront UI: which products are in the
//! cart, how many of each, and whether the cart panel is open.

pub mod actions;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod state;
pub mod summary;
pub mod utils;
