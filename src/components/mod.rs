//! UI Components
//!
//! Leptos components for the storefront screen.

mod shop_header;
mod cart_tray;
mod star_rating;
mod product_row;
mod product_list;
mod product_modal;

pub use shop_header::ShopHeader;
pub use cart_tray::CartTray;
pub use star_rating::StarRating;
pub use product_row::ProductRow;
pub use product_list::ProductList;
pub use product_modal::ProductModal;
