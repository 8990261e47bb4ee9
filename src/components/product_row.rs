//! Product Row Component
//!
//! One catalog entry in the list. Tapping it opens the detail overlay.

use leptos::prelude::*;

use crate::components::StarRating;
use crate::context::use_shop_context;
use crate::display::format_price;
use crate::models::Product;

/// A single product row
#[component]
pub fn ProductRow(product: Product) -> impl IntoView {
    let ctx = use_shop_context();

    let selected = product.clone();
    let price = format_price(product.price);

    view! {
        <div class="item-wrapper" on:click=move |_| ctx.open_product(selected.clone())>
            <div class="item-container">
                <img class="item-image" src=product.image alt=product.title.clone() />
                <div class="item-details">
                    <span class="item-title">{product.title}</span>
                    <StarRating rate=product.rating.rate count=product.rating.count />
                    <span class="item-price">{price}</span>
                    <span class="item-category">{product.category}</span>
                </div>
            </div>
        </div>
    }
}
