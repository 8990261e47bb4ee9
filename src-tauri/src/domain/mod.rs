//! Domain Layer
//!
//! Contains the catalog entities and their errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod product;

pub use error::{DomainError, DomainResult};
pub use product::{Product, Rating};
