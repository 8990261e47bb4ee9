//! Frontend Models
//!
//! Data structures matching the catalog payload returned by the shell.

use serde::{Deserialize, Serialize};

/// Average score and number of votes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[cfg(test)]
pub fn make_product(id: u32, rate: f64, count: u32) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        price: 10.0 * id as f64 + 0.5,
        description: format!("Description of product {}", id),
        category: "electronics".to_string(),
        image: format!("https://fakestoreapi.com/img/{}.jpg", id),
        rating: Rating { rate, count },
    }
}
