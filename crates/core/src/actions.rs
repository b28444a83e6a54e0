//! Cart actions
//!
//! A [`CartAction`] names one user-triggered operation on a [`CartState`], so a sequence of them
//! can be parsed, replayed and generated.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{cart::CartError, products::ProductId, state::CartState};

/// Errors parsing a cart action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionParseError {
    /// The action name is not recognised.
    #[error("Unknown cart action: {0}")]
    UnknownAction(String),

    /// The action needs a product id (e.g. `increase:1`).
    #[error("Cart action '{0}' requires a product id")]
    MissingProductId(String),

    /// The action does not take a product id.
    #[error("Cart action '{0}' does not take a product id")]
    UnexpectedProductId(String),

    /// The product id could not be parsed.
    #[error("Invalid product id '{0}'")]
    InvalidProductId(String),
}

/// One operation on the cart state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product
    Increase(ProductId),

    /// Take one unit of a product away
    Decrease(ProductId),

    /// Drop a product's line
    Remove(ProductId),

    /// Show the cart panel
    Open,

    /// Hide the cart panel
    Close,

    /// Flip the cart panel
    Toggle,
}

impl CartState {
    /// Apply an action to the state.
    ///
    /// Returns `Ok(true)` when the cart lines changed. Panel actions always return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] of the underlying operation.
    pub fn apply(&mut self, action: CartAction) -> Result<bool, CartError> {
        match action {
            CartAction::Increase(id) => self.increase_quantity(id),
            CartAction::Decrease(id) => self.decrease_quantity(id),
            CartAction::Remove(id) => self.remove_item(id),
            CartAction::Open => {
                self.open();
                Ok(false)
            }
            CartAction::Close => {
                self.close();
                Ok(false)
            }
            CartAction::Toggle => {
                self.toggle();
                Ok(false)
            }
        }
    }
}

impl FromStr for CartAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, id) = match s.trim().split_once(':') {
            Some((name, id)) => (name.trim(), Some(id.trim())),
            None => (s.trim(), None),
        };

        let parse_id = |id: Option<&str>| -> Result<ProductId, ActionParseError> {
            let raw = id.ok_or_else(|| ActionParseError::MissingProductId(name.to_string()))?;

            raw.parse::<i64>()
                .ok()
                .and_then(|value| ProductId::try_from(value).ok())
                .ok_or_else(|| ActionParseError::InvalidProductId(raw.to_string()))
        };

        let no_id = |action: Self| -> Result<Self, ActionParseError> {
            match id {
                Some(_) => Err(ActionParseError::UnexpectedProductId(name.to_string())),
                None => Ok(action),
            }
        };

        match name {
            "increase" | "add" => Ok(Self::Increase(parse_id(id)?)),
            "decrease" => Ok(Self::Decrease(parse_id(id)?)),
            "remove" => Ok(Self::Remove(parse_id(id)?)),
            "open" => no_id(Self::Open),
            "close" => no_id(Self::Close),
            "toggle" => no_id(Self::Toggle),
            other => Err(ActionParseError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase(id) => write!(f, "increase:{id}"),
            Self::Decrease(id) => write!(f, "decrease:{id}"),
            Self::Remove(id) => write!(f, "remove:{id}"),
            Self::Open => f.write_str("open"),
            Self::Close => f.write_str("close"),
            Self::Toggle => f.write_str("toggle"),
        }
    }
}
