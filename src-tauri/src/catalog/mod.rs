//! Catalog Layer
//!
//! Where the product list comes from.

mod traits;
mod http_catalog;


pub use traits::CatalogSource;
pub use http_catalog::HttpCatalog;
