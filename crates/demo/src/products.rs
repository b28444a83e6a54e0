use std::sync::Arc;

use leptos::prelude::*;

use trolley::{
    catalog::Catalog,
    products::{Product, ProductId},
};

use crate::context::use_shopping_cart;

/// Accessible label for a quantity control.
pub(crate) fn quantity_label(name: &str, quantity: u32) -> String {
    match quantity {
        0 => format!("{name} is not in your cart"),
        1 => format!("1 {name} in cart"),
        n => format!("{n} × {name} in cart"),
    }
}

#[component]
fn QuantityControls(id: ProductId, name: String) -> impl IntoView {
    let cart = use_shopping_cart();
    let decrease_label = format!("Remove one {name}");
    let increase_label = format!("Add one {name}");
    let remove_label = format!("Remove {name} from cart");

    view! {
        <div class="store-item-controls">
            <div class="store-item-stepper">
                <button
                    class="icon-button"
                    aria-label=decrease_label
                    on:click=move |_| cart.decrease_cart_quantity(id)
                >
                    "−"
                </button>
                <span class="store-item-quantity" aria-live="polite">
                    <span class="store-item-quantity-value">{move || cart.item_quantity(id)}</span>
                    <span class="sr-only">{move || quantity_label(&name, cart.item_quantity(id))}</span>
                </span>
                <button
                    class="icon-button"
                    aria-label=increase_label
                    on:click=move |_| cart.increase_cart_quantity(id)
                >
                    "+"
                </button>
            </div>
            <button
                class="store-item-remove"
                aria-label=remove_label
                on:click=move |_| cart.remove_from_cart(id)
            >
                "Remove"
            </button>
        </div>
    }
}

/// One catalog product with its add / quantity controls.
#[component]
pub fn StoreItem(id: ProductId, product: Product) -> impl IntoView {
    let cart = use_shopping_cart();
    let price = product.price.to_string();
    let name = product.name;
    let heading = name.clone();

    view! {
        <li class="store-item">
            <div class="store-item-header">
                <h3 class="store-item-name">{heading}</h3>
                <span class="store-item-price">{price}</span>
            </div>
            {move || {
                if cart.item_quantity(id) == 0 {
                    let add_label = format!("Add {name} to cart");

                    view! {
                        <button
                            class="store-item-add"
                            aria-label=add_label
                            on:click=move |_| cart.increase_cart_quantity(id)
                        >
                            "+ Add To Cart"
                        </button>
                    }
                    .into_any()
                } else {
                    view! { <QuantityControls id=id name=name.clone() /> }.into_any()
                }
            }}
        </li>
    }
}

/// Grid of every catalog product.
#[component]
pub fn Store(
    /// Products available to add.
    catalog: Arc<Catalog>,
) -> impl IntoView {
    view! {
        <section class="store">
            <h2 class="panel-title">"Store"</h2>
            <ul class="store-grid">
                {catalog
                    .iter()
                    .map(|(id, product)| view! { <StoreItem id=id product=product.clone() /> })
                    .collect_view()}
            </ul>
        </section>
    }
}
