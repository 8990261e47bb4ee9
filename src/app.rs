//! Storefront App
//!
//! Composition root: provides the shop store and overlay context, and loads
//! the catalog once when the screen mounts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{CartTray, ProductList, ProductModal, ShopHeader};
use crate::context::ShopContext;
use crate::overlay::Overlay;
use crate::store::{store_set_products, ShopState, ShopStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = ShopStore::new(ShopState::default());
    let overlay = signal(Overlay::default());
    let cart_open = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(ShopContext::new(overlay, cart_open));

    // Load catalog on mount; failures leave the current catalog in place
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::fetch_products().await {
                Ok(products) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} products", products.len()).into());
                    store_set_products(&store, products);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load products: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="container">
            <ShopHeader />
            <CartTray />
            <ProductList />
            <ProductModal />
        </div>
    }
}
