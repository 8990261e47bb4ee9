//! Cart Tray Component
//!
//! Collapsible summary of the in-memory cart with per-product removal.

use leptos::prelude::*;

use crate::cart::cart_total;
use crate::context::use_shop_context;
use crate::display::format_price;
use crate::models::Product;
use crate::store::{store_remove_from_cart, use_shop_store, ShopStateStoreFields};

#[component]
pub fn CartTray() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let total = move || store.cart().with(|cart| format_price(cart_total(cart)));

    view! {
        <Show when=move || ctx.cart_open.get() && store.cart().with(|cart| !cart.is_empty())>
            <div class="cart-tray">
                <For
                    each=move || store.cart().get()
                    key=|product| product.id
                    children=move |product: Product| {
                        let id = product.id;
                        view! {
                            <div class="cart-row">
                                <span class="cart-title">{product.title}</span>
                                <span class="cart-price">{format_price(product.price)}</span>
                                <button
                                    class="cart-remove-btn"
                                    on:click=move |_| store_remove_from_cart(&store, id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
                <div class="cart-total">
                    <span>"Total"</span>
                    <span>{total}</span>
                </div>
            </div>
        </Show>
    }
}
