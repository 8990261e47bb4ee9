//! Product Entity
//!
//! A catalog entry exactly as served by the remote store API.

use serde::{Deserialize, Serialize};

/// Average review score (0-5) and number of votes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL
    pub image: String,
    pub rating: Rating,
}
