//! Product Detail Modal
//!
//! Full-screen overlay for the selected product. The scrim, the Close button
//! and the Escape key all dismiss it; adding to the cart keeps it open.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::store::{store_add_to_cart, use_shop_store};

#[component]
pub fn ProductModal() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.overlay.with_untracked(|o| o.is_open()) {
            ctx.dismiss();
        }
    });
    on_cleanup(move || escape.remove());

    let card = move || {
        ctx.overlay.with(|o| o.selected().cloned()).map(|product| {
            let id = product.id;
            view! {
                <div class="modal-container">
                    <div class="card">
                        <img class="modal-image" src=product.image alt=product.title />
                        <div class="modal-description-row">
                            <span class="modal-description-label">"Description : "</span>
                            <span class="modal-description">{product.description}</span>
                        </div>
                        <div class="button-container">
                            <button class="add-button" on:click=move |_| store_add_to_cart(&store, id)>
                                "Add to Cart"
                            </button>
                            <button class="close-button" on:click=move |_| ctx.dismiss()>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <Show when=move || ctx.overlay.with(|o| o.is_open())>
            <div class="modal-root">
                <div class="overlay" on:click=move |_| ctx.dismiss()></div>
                {card}
            </div>
        </Show>
    }
}
