//! Leptos Trolley Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use trolley::{catalog::Catalog, config::CartConfig, fixtures::catalog_from_str};

mod cart;
mod context;
mod products;

use context::{ShoppingCartProvider, cart_badge_label, use_shopping_cart};

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/demo.yml");
const CONFIG_FIXTURE_YAML: &str = include_str!("../../../fixtures/config/demo.yml");

/// Parsed application fixtures used by the UI.
#[derive(Debug)]
struct AppData {
    /// Products shown in the store and priced in the cart.
    catalog: Arc<Catalog>,

    /// Cart behaviour settings.
    config: CartConfig,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let catalog = catalog_from_str(PRODUCTS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load products: {error}"))?;

        let config = CartConfig::from_yaml_str(CONFIG_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load cart config: {error}"))?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }
}

/// Top bar with the cart button and any cart notice.
#[component]
fn Navbar() -> impl IntoView {
    let cart = use_shopping_cart();

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Trolley"</span>
            <button
                class="cart-button"
                aria-label="Open cart"
                aria-controls="cart-panel"
                aria-expanded=move || cart.is_open().to_string()
                on:click=move |_| cart.open_cart()
            >
                <span>"Cart"</span>
                {move || {
                    cart_badge_label(cart.cart_quantity())
                        .map(|label| view! { <span class="cart-badge">{label}</span> })
                }}
            </button>
        </nav>
        {move || {
            cart.closed_panel_notice()
                .map(|message| {
                    view! {
                        <div class="cart-notice" role="alert">
                            <p class="error-text">{message}</p>
                            <button class="link-button" on:click=move |_| cart.dismiss_error()>
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
        }}
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => view! {
            <ShoppingCartProvider config=app_data.config>
                <Navbar />
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <div class="mx-auto max-w-5xl">
                        <products::Store catalog=Arc::clone(&app_data.catalog) />
                    </div>
                </main>
                <cart::ShoppingCart catalog=Arc::clone(&app_data.catalog) />
            </ShoppingCartProvider>
        }
        .into_any(),
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Trolley"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main server function
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bundled_fixtures_load() -> TestResult {
        let app_data = AppData::load()?;

        assert_eq!(app_data.catalog.len(), 6);
        assert!(!app_data.config.open_on_start);

        Ok(())
    }
}
