use leptos::prelude::*;

use trolley::{catalog::Catalog, items::CartItem, pricing::line_total};

use crate::context::use_shopping_cart;

/// Render model for a line in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartLineView {
    /// Product name, or a placeholder when the product is unknown.
    name: String,

    /// Units in the cart.
    quantity: u32,

    /// Formatted unit price.
    unit_price: Option<String>,

    /// Formatted line total.
    line_total: Option<String>,
}

impl CartLineView {
    pub(crate) fn from_item(item: &CartItem, catalog: &Catalog) -> Self {
        let product = catalog.get(item.id());

        Self {
            name: product.map_or_else(
                || format!("Unknown product #{}", item.id()),
                |product| product.name.clone(),
            ),
            quantity: item.quantity(),
            unit_price: product.map(|product| product.price.to_string()),
            line_total: line_total(item, catalog).ok().map(|total| total.to_string()),
        }
    }

    pub(crate) fn quantity_text(&self) -> Option<String> {
        (self.quantity > 1).then(|| format!("×{}", self.quantity))
    }
}

#[component]
pub(super) fn CartLine(item: CartItem, line: CartLineView) -> impl IntoView {
    let cart = use_shopping_cart();
    let id = item.id();
    let remove_label = format!("Remove {} from cart", line.name);
    let quantity_text = line.quantity_text();
    let CartLineView {
        name,
        unit_price,
        line_total,
        ..
    } = line;

    view! {
        <li class="cart-line">
            <div class="cart-line-details">
                <span class="cart-line-name">
                    {name}
                    {quantity_text
                        .map(|text| view! { <span class="cart-line-quantity">{text}</span> })}
                </span>
                <span class="cart-line-unit-price">{unit_price.unwrap_or_default()}</span>
            </div>
            <span class="cart-line-total">{line_total.unwrap_or_else(|| "N/A".to_string())}</span>
            <button
                class="icon-button cart-line-remove"
                aria-label=remove_label
                on:click=move |_| cart.remove_from_cart(id)
            >
                "×"
            </button>
        </li>
    }
}
