//! Product List Component
//!
//! Scrollable list of every product in the store's catalog.

use leptos::prelude::*;

use crate::components::ProductRow;
use crate::models::Product;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ProductList() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="product-list">
            <For
                each=move || store.products().get()
                key=|product| product.id
                children=move |product: Product| {
                    view! { <ProductRow product=product /> }
                }
            />
        </div>
    }
}
