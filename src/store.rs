//! Global Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The catalog is
//! replaced wholesale after a fetch; the cart is edited one product at a time.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::cart;
use crate::models::Product;

/// Global shop state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Catalog as last received from the shell
    pub products: Vec<Product>,
    /// Products picked by the user, unique by id, in insertion order
    pub cart: Vec<Product>,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the catalog in the store
pub fn store_set_products(store: &ShopStore, products: Vec<Product>) {
    *store.products().write() = products;
}

/// Add a catalog product to the cart by ID
pub fn store_add_to_cart(store: &ShopStore, product_id: u32) {
    // Subfields share one lock, so the catalog is copied out before the cart is written.
    let catalog = store.products().get_untracked();
    cart::add_to_cart(&catalog, &mut store.cart().write(), product_id);
}

/// Remove a product from the cart by ID
pub fn store_remove_from_cart(store: &ShopStore, product_id: u32) {
    cart::remove_from_cart(&mut store.cart().write(), product_id);
}
