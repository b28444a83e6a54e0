use std::sync::Arc;

use leptos::prelude::*;

use trolley::{cart::Cart, catalog::Catalog, pricing::cart_subtotal};

use crate::context::{ShoppingCartContext, use_shopping_cart};

pub(super) mod line_item;

use line_item::{CartLine, CartLineView};

/// Formatted cart subtotal, or `None` if a line cannot be priced.
pub(crate) fn subtotal_text(cart: &Cart, catalog: &Catalog) -> Option<String> {
    cart_subtotal(cart, catalog)
        .ok()
        .map(|subtotal| subtotal.to_string())
}

fn render_cart_body(cart: ShoppingCartContext, catalog: &Catalog) -> AnyView {
    let snapshot = cart.cart_items();

    if snapshot.is_empty() {
        return view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any();
    }

    let total = subtotal_text(&snapshot, catalog).unwrap_or_else(|| "N/A".to_string());

    view! {
        <ul class="cart-lines">
            {snapshot
                .iter()
                .map(|item| {
                    let line = CartLineView::from_item(item, catalog);

                    view! { <CartLine item=*item line=line /> }
                })
                .collect_view()}
        </ul>
        <p class="cart-total-row">
            <span>"Total"</span>
            <span>{total}</span>
        </p>
    }
    .into_any()
}

/// Off-canvas cart panel, rendered only while the cart is open.
#[component]
pub fn ShoppingCart(
    /// Catalog used to name and price cart lines.
    catalog: Arc<Catalog>,
) -> impl IntoView {
    let cart = use_shopping_cart();

    view! {
        {move || {
            if !cart.is_open() {
                return ().into_any();
            }

            view! {
                <div class="cart-backdrop" on:click=move |_| cart.close_cart()></div>
                <aside id="cart-panel" class="cart-panel" role="dialog" aria-label="Shopping cart">
                    <div class="panel-header">
                        <h2 class="panel-title">"Cart"</h2>
                        <button
                            class="icon-button"
                            aria-label="Close cart"
                            on:click=move |_| cart.close_cart()
                        >
                            "×"
                        </button>
                    </div>
                    {cart
                        .last_error()
                        .map(|message| {
                            view! {
                                <p class="error-text" role="alert">
                                    {message}
                                    <button class="link-button" on:click=move |_| cart.dismiss_error()>
                                        "Dismiss"
                                    </button>
                                </p>
                            }
                        })}
                    <div class="panel-card">{render_cart_body(cart, &catalog)}</div>
                </aside>
            }
            .into_any()
        }}
    }
}
