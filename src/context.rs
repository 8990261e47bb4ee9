//! Application Context
//!
//! Shared UI signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Product;
use crate::overlay::Overlay;

/// Screen-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// Product detail overlay - read
    pub overlay: ReadSignal<Overlay>,
    /// Product detail overlay - write
    set_overlay: WriteSignal<Overlay>,
    /// Whether the cart tray is expanded - read
    pub cart_open: ReadSignal<bool>,
    /// Whether the cart tray is expanded - write
    set_cart_open: WriteSignal<bool>,
}

impl ShopContext {
    pub fn new(
        overlay: (ReadSignal<Overlay>, WriteSignal<Overlay>),
        cart_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            overlay: overlay.0,
            set_overlay: overlay.1,
            cart_open: cart_open.0,
            set_cart_open: cart_open.1,
        }
    }

    /// Show the detail overlay for a product
    pub fn open_product(&self, product: Product) {
        self.set_overlay.update(|o| o.open(product));
    }

    /// Hide the detail overlay
    pub fn dismiss(&self) {
        self.set_overlay.update(|o| o.dismiss());
    }

    pub fn toggle_cart(&self) {
        self.set_cart_open.update(|open| *open = !*open);
    }
}

pub fn use_shop_context() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}
