//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the catalog source.

mod catalog_cmd;

pub use catalog_cmd::*;
