//! Cart configuration

use std::{fs, io, num::NonZeroU32, path::Path};

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// How decrease and remove treat a product that has no line in the cart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingItemPolicy {
    /// Leave the cart unchanged.
    #[default]
    Ignore,

    /// Fail with [`crate::cart::CartError::ItemNotFound`].
    Reject,
}

/// Cart behaviour settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CartConfig {
    /// Policy for decrease/remove on a product that is not in the cart
    pub missing_item: MissingItemPolicy,

    /// Largest quantity a single line may hold
    pub max_quantity: Option<NonZeroU32>,

    /// Whether the cart panel starts open
    pub open_on_start: bool,
}

impl CartConfig {
    /// Parse a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed or has unknown fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }
}
