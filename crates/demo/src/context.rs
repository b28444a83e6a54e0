//! Shopping cart context
//!
//! The cart lives in one [`RwSignal<CartState>`] provided at the top of the view tree. Components
//! reach it through [`use_shopping_cart`] instead of threading it through props, and change it only
//! through the [`ShoppingCartContext`] methods.

use leptos::prelude::*;

use trolley::{
    cart::{Cart, CartError},
    config::CartConfig,
    products::ProductId,
    state::CartState,
};

/// Handle to the shared cart state.
#[derive(Debug, Clone, Copy)]
pub struct ShoppingCartContext {
    state: RwSignal<CartState>,
    last_error: RwSignal<Option<String>>,
}

impl ShoppingCartContext {
    /// Create a cart context with an empty cart.
    pub fn new(config: CartConfig) -> Self {
        Self {
            state: RwSignal::new(CartState::with_config(config)),
            last_error: RwSignal::new(None),
        }
    }

    /// Quantity of the product in the cart, or 0 when absent.
    pub fn item_quantity(self, id: ProductId) -> u32 {
        self.state.with(|state| state.item_quantity(id))
    }

    /// Add one unit of the product.
    pub fn increase_cart_quantity(self, id: ProductId) {
        self.mutate(|state| state.increase_quantity(id));
    }

    /// Take one unit of the product away.
    pub fn decrease_cart_quantity(self, id: ProductId) {
        self.mutate(|state| state.decrease_quantity(id));
    }

    /// Drop the product's line.
    pub fn remove_from_cart(self, id: ProductId) {
        self.mutate(|state| state.remove_item(id));
    }

    /// Show the cart panel.
    pub fn open_cart(self) {
        self.set_open(true);
    }

    /// Hide the cart panel.
    pub fn close_cart(self) {
        self.set_open(false);
    }

    /// Whether the cart panel is shown.
    pub fn is_open(self) -> bool {
        self.state.with(CartState::is_open)
    }

    /// Current cart snapshot.
    pub fn cart_items(self) -> Cart {
        self.state.with(|state| state.cart().clone())
    }

    /// Total number of units in the cart.
    pub fn cart_quantity(self) -> u64 {
        self.state.with(CartState::cart_quantity)
    }

    /// Message from the last rejected cart operation, if any.
    pub fn last_error(self) -> Option<String> {
        self.last_error.get()
    }

    /// Message to show outside the cart panel: the last error, only while the panel is closed.
    pub fn closed_panel_notice(self) -> Option<String> {
        if self.is_open() {
            return None;
        }

        self.last_error()
    }

    /// Clear the last error message.
    pub fn dismiss_error(self) {
        self.last_error.set(None);
    }

    // Subscribers are only notified when the operation produced a new snapshot.
    fn mutate(self, operation: impl FnOnce(&mut CartState) -> Result<bool, CartError>) {
        let mut outcome = Ok(false);

        self.state.maybe_update(|state| {
            outcome = operation(state);
            matches!(outcome, Ok(true))
        });

        match outcome {
            Ok(_) => {
                if self.last_error.with_untracked(Option::is_some) {
                    self.last_error.set(None);
                }
            }
            Err(error) => self.last_error.set(Some(error.to_string())),
        }
    }

    fn set_open(self, is_open: bool) {
        self.state.maybe_update(|state| {
            let changed = state.is_open() != is_open;

            if is_open {
                state.open();
            } else {
                state.close();
            }

            changed
        });
    }
}

/// Provide the cart context to the current component and its descendants.
pub fn provide_shopping_cart(config: CartConfig) -> ShoppingCartContext {
    let context = ShoppingCartContext::new(config);

    provide_context(context);

    context
}

/// The cart context provided by an enclosing [`ShoppingCartProvider`].
pub fn use_shopping_cart() -> ShoppingCartContext {
    expect_context::<ShoppingCartContext>()
}

/// Provides the shared cart to its children.
#[component]
pub fn ShoppingCartProvider(
    /// Cart behaviour settings.
    config: CartConfig,
    /// Components that read or change the cart.
    children: Children,
) -> impl IntoView {
    provide_shopping_cart(config);

    children()
}

/// Label for the cart button badge.
pub fn cart_badge_label(quantity: u64) -> Option<String> {
    match quantity {
        0 => None,
        1..=99 => Some(quantity.to_string()),
        _ => Some("99+".to_string()),
    }
}
