//! Shop Header Component
//!
//! Screen title with a cart badge once something has been added. The badge
//! toggles the cart tray.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ShopHeader() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let cart_count = move || store.cart().with(|cart| cart.len());

    view! {
        <header class="shopping">
            <span class="shopping-title">"Shopping"</span>
            <Show when=move || { cart_count() > 0 }>
                <button
                    class=move || if ctx.cart_open.get() { "cart-badge active" } else { "cart-badge" }
                    on:click=move |_| ctx.toggle_cart()
                >
                    {move || format!("🛒 {}", cart_count())}
                </button>
            </Show>
        </header>
    }
}
