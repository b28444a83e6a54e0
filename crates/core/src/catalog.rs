//! Catalog

use std::collections::BTreeMap;

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors building a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A product's price currency differs from the catalog currency (product, product currency,
    /// catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// Products available to add to the cart, keyed by id and priced in a single currency.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: BTreeMap::new(),
            currency,
        }
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the id is taken or the price is in another currency.
    pub fn insert(&mut self, id: ProductId, product: Product) -> Result<(), CatalogError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if self.products.contains_key(&id) {
            return Err(CatalogError::DuplicateProduct(id));
        }

        self.products.insert(id, product);

        Ok(())
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Iterate over the products in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products.iter().map(|(id, product)| (*id, product))
    }

    /// Get the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
