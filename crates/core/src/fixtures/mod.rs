//! Fixtures

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    config::{CartConfig, ConfigError},
    fixtures::products::ProductsFixture,
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product id is zero, negative or out of range
    #[error("Invalid product id: {0}")]
    InvalidProductId(i64),

    /// Fixture has no products, so the currency is unknown
    #[error("No products in fixture; currency unknown")]
    NoProducts,

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Fixture
///
/// Loads named catalog and configuration sets from a base directory laid out as
/// `products/<name>.yml` and `config/<name>.yml`.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from a products YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the products do not form a
    /// valid catalog.
    pub fn catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        catalog_from_str(&contents)
    }

    /// Load a cart configuration YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn config(&self, name: &str) -> Result<CartConfig, FixtureError> {
        let file_path = self.base_path.join("config").join(format!("{name}.yml"));

        Ok(CartConfig::from_path(file_path)?)
    }
}

/// Parse a catalog from products fixture YAML
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the products do not form a valid catalog.
pub fn catalog_from_str(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    Catalog::try_from(fixture)
}
