//! Cart state
//!
//! [`CartState`] is the single owner of the current cart snapshot and the cart panel's visibility
//! flag. Every change to either goes through its methods.

use tracing::{debug, trace, warn};

use crate::{
    cart::{Cart, CartError},
    config::{CartConfig, MissingItemPolicy},
    items::CartItem,
    products::ProductId,
};

/// Cart contents plus panel visibility for one session.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Cart,
    is_open: bool,
    config: CartConfig,
}

impl CartState {
    /// Create an empty state with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state with the given configuration.
    pub fn with_config(config: CartConfig) -> Self {
        Self {
            cart: Cart::new(),
            is_open: config.open_on_start,
            config,
        }
    }

    /// Quantity of the product in the cart, or 0 when absent.
    pub fn item_quantity(&self, id: ProductId) -> u32 {
        self.cart.quantity(id)
    }

    /// Add one unit of the product.
    ///
    /// Returns `Ok(true)` when the cart changed.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityLimit`] when the line is already at the configured maximum, or
    /// [`CartError::QuantityOverflow`] when the quantity cannot grow further.
    pub fn increase_quantity(&mut self, id: ProductId) -> Result<bool, CartError> {
        if let Some(limit) = self.config.max_quantity
            && self.cart.quantity(id) >= limit.get()
        {
            warn!(product_id = %id, limit = limit.get(), "cart line at quantity limit");

            return Err(CartError::QuantityLimit { id, limit });
        }

        let next = self.cart.increased(id).inspect_err(|error| {
            warn!(product_id = %id, %error, "failed to increase cart quantity");
        })?;

        Ok(self.replace(next, id))
    }

    /// Take one unit of the product away, dropping its line at zero.
    ///
    /// Returns `Ok(true)` when the cart changed.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] for a product not in the cart when the missing-item
    /// policy is [`MissingItemPolicy::Reject`].
    pub fn decrease_quantity(&mut self, id: ProductId) -> Result<bool, CartError> {
        match self.cart.decreased(id) {
            Ok(next) => Ok(self.replace(next, id)),
            Err(error) => self.tolerate(error, "decrease"),
        }
    }

    /// Drop the product's line regardless of its quantity.
    ///
    /// Returns `Ok(true)` when the cart changed.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] for a product not in the cart when the missing-item
    /// policy is [`MissingItemPolicy::Reject`].
    pub fn remove_item(&mut self, id: ProductId) -> Result<bool, CartError> {
        match self.cart.removed(id) {
            Ok(next) => Ok(self.replace(next, id)),
            Err(error) => self.tolerate(error, "remove"),
        }
    }

    /// Clear every line from the cart.
    ///
    /// Returns `true` when the cart changed.
    pub fn clear(&mut self) -> bool {
        if self.cart.is_empty() {
            return false;
        }

        debug!(lines = self.cart.len(), "cleared cart");

        self.cart = Cart::new();

        true
    }

    /// Show the cart panel.
    pub fn open(&mut self) {
        self.set_open(true);
    }

    /// Hide the cart panel.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Flip the cart panel between shown and hidden.
    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    /// Whether the cart panel is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current cart lines in order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Total number of units across all lines.
    pub fn cart_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// The configuration this state was created with.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    fn replace(&mut self, next: Cart, id: ProductId) -> bool {
        debug!(
            product_id = %id,
            quantity = next.quantity(id),
            cart_quantity = next.total_quantity(),
            "updated cart"
        );

        self.cart = next;

        true
    }

    fn tolerate(&self, error: CartError, operation: &'static str) -> Result<bool, CartError> {
        if let CartError::ItemNotFound(id) = &error
            && self.config.missing_item == MissingItemPolicy::Ignore
        {
            trace!(product_id = %id, operation, "product not in cart, ignoring");

            return Ok(false);
        }

        warn!(%error, operation, "rejected cart operation");

        Err(error)
    }

    fn set_open(&mut self, is_open: bool) {
        if self.is_open != is_open {
            debug!(is_open, "cart panel visibility changed");
        }

        self.is_open = is_open;
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use super::*;

    fn id(raw: u32) -> Result<ProductId, CartError> {
        ProductId::new(raw)
    }

    fn rejecting() -> CartState {
        CartState::with_config(CartConfig {
            missing_item: MissingItemPolicy::Reject,
            ..CartConfig::default()
        })
    }

    #[test]
    fn new_is_empty_and_closed() -> TestResult {
        let state = CartState::new();

        assert!(state.items().is_empty());
        assert_eq!(state.cart_quantity(), 0);
        assert_eq!(state.item_quantity(id(1)?), 0);
        assert!(!state.is_open());

        Ok(())
    }

    #[test]
    fn with_config_open_on_start() {
        let state = CartState::with_config(CartConfig {
            open_on_start: true,
            ..CartConfig::default()
        });

        assert!(state.is_open());
    }

    #[test]
    fn increase_reports_change() -> TestResult {
        let mut state = CartState::new();

        assert!(state.increase_quantity(id(1)?)?);
        assert!(state.increase_quantity(id(1)?)?);
        assert_eq!(state.item_quantity(id(1)?), 2);
        assert_eq!(state.cart_quantity(), 2);

        Ok(())
    }

    #[test]
    fn increase_replaces_snapshot() -> TestResult {
        let mut state = CartState::new();
        state.increase_quantity(id(1)?)?;

        let before = state.cart().clone();
        state.increase_quantity(id(2)?)?;

        assert!(!before.ptr_eq(state.cart()));
        assert_eq!(before.len(), 1);
        assert_eq!(state.cart().len(), 2);

        Ok(())
    }

    #[test]
    fn increase_respects_max_quantity() -> TestResult {
        let limit = NonZeroU32::MIN.saturating_add(1);
        let mut state = CartState::with_config(CartConfig {
            max_quantity: Some(limit),
            ..CartConfig::default()
        });

        state.increase_quantity(id(1)?)?;
        state.increase_quantity(id(1)?)?;

        assert_eq!(
            state.increase_quantity(id(1)?),
            Err(CartError::QuantityLimit { id: id(1)?, limit })
        );
        assert_eq!(state.item_quantity(id(1)?), 2);

        Ok(())
    }

    #[test]
    fn decrease_missing_ignored_by_default() -> TestResult {
        let mut state = CartState::new();
        state.increase_quantity(id(1)?)?;
        let before = state.cart().clone();

        assert!(!state.decrease_quantity(id(2)?)?);
        assert!(before.ptr_eq(state.cart()));
        assert_eq!(state.item_quantity(id(2)?), 0);

        Ok(())
    }

    #[test]
    fn decrease_missing_rejected_when_configured() -> TestResult {
        let mut state = rejecting();

        assert_eq!(
            state.decrease_quantity(id(2)?),
            Err(CartError::ItemNotFound(id(2)?))
        );

        Ok(())
    }

    #[test]
    fn decrease_to_zero_removes_line() -> TestResult {
        let mut state = CartState::new();
        state.increase_quantity(id(1)?)?;

        assert!(state.decrease_quantity(id(1)?)?);
        assert!(state.items().is_empty());

        Ok(())
    }

    #[test]
    fn remove_missing_ignored_by_default() -> TestResult {
        let mut state = CartState::new();

        assert!(!state.remove_item(id(3)?)?);

        Ok(())
    }

    #[test]
    fn remove_missing_rejected_when_configured() -> TestResult {
        let mut state = rejecting();

        assert_eq!(
            state.remove_item(id(3)?),
            Err(CartError::ItemNotFound(id(3)?))
        );

        Ok(())
    }

    #[test]
    fn remove_drops_line_with_any_quantity() -> TestResult {
        let mut state = CartState::new();
        state.increase_quantity(id(4)?)?;
        state.increase_quantity(id(4)?)?;
        state.increase_quantity(id(4)?)?;

        assert!(state.remove_item(id(4)?)?);
        assert_eq!(state.item_quantity(id(4)?), 0);
        assert_eq!(state.cart_quantity(), 0);

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let mut state = CartState::new();
        state.increase_quantity(id(1)?)?;
        state.increase_quantity(id(2)?)?;

        assert!(state.clear());
        assert!(!state.clear());
        assert_eq!(state.cart_quantity(), 0);

        Ok(())
    }

    #[test]
    fn open_then_close_is_closed() {
        let mut state = CartState::new();

        state.open();
        state.close();

        assert!(!state.is_open());
    }

    #[test]
    fn close_then_open_is_open() {
        let mut state = CartState::new();

        state.close();
        state.open();

        assert!(state.is_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut state = CartState::new();

        state.open();
        state.open();
        assert!(state.is_open());

        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = CartState::new();

        state.toggle();
        assert!(state.is_open());

        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn visibility_independent_of_contents() -> TestResult {
        let mut state = CartState::new();
        state.open();

        state.increase_quantity(id(1)?)?;
        state.remove_item(id(1)?)?;

        assert!(state.is_open());

        Ok(())
    }
}
