//! Cart Rules
//!
//! Pure operations over the catalog and cart collections. A cart never holds
//! two products with the same id, and neither operation can fail.

use crate::models::Product;

/// Append the catalog product with `product_id` unless it is unknown or already in the cart.
/// Returns whether the cart changed.
pub fn add_to_cart(catalog: &[Product], cart: &mut Vec<Product>, product_id: u32) -> bool {
    if contains(cart, product_id) {
        return false;
    }
    match catalog.iter().find(|p| p.id == product_id) {
        Some(product) => {
            cart.push(product.clone());
            true
        }
        None => false,
    }
}

/// Drop the product with `product_id`. Returns whether the cart changed.
pub fn remove_from_cart(cart: &mut Vec<Product>, product_id: u32) -> bool {
    let before = cart.len();
    cart.retain(|p| p.id != product_id);
    cart.len() != before
}

pub fn contains(cart: &[Product], product_id: u32) -> bool {
    cart.iter().any(|p| p.id == product_id)
}

pub fn cart_total(cart: &[Product]) -> f64 {
    cart.iter().map(|p| p.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_product;

    fn catalog(ids: &[u32]) -> Vec<Product> {
        ids.iter().map(|&id| make_product(id, 3.0, 5)).collect()
    }

    #[test]
    fn test_add_to_cart() {
        let catalog = catalog(&[1, 2]);
        let mut cart = Vec::new();
        assert!(add_to_cart(&catalog, &mut cart, 2));
        assert_eq!(cart, vec![catalog[1].clone()]);
    }

    #[test]
    fn test_add_same_id_twice_keeps_one_entry() {
        let catalog = catalog(&[1, 2]);
        let mut cart = Vec::new();
        assert!(add_to_cart(&catalog, &mut cart, 2));
        assert!(!add_to_cart(&catalog, &mut cart, 2));
        assert_eq!(cart.iter().filter(|p| p.id == 2).count(), 1);
    }

    #[test]
    fn test_add_unknown_id_leaves_cart_unchanged() {
        let catalog = catalog(&[1]);
        let mut cart = Vec::new();
        add_to_cart(&catalog, &mut cart, 1);
        let before = cart.clone();
        assert!(!add_to_cart(&catalog, &mut cart, 42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let catalog = catalog(&[1, 2, 3]);
        let mut cart = Vec::new();
        for id in [3, 1, 2] {
            add_to_cart(&catalog, &mut cart, id);
        }
        let ids: Vec<u32> = cart.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_cart_entry_survives_catalog_replacement() {
        let mut catalog = catalog(&[1, 2]);
        let mut cart = Vec::new();
        add_to_cart(&catalog, &mut cart, 1);

        catalog = vec![make_product(9, 1.0, 1)];
        assert!(contains(&cart, 1));
        // 2 is no longer in the catalog
        assert!(!add_to_cart(&catalog, &mut cart, 2));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_from_cart() {
        let catalog = catalog(&[1, 2]);
        let mut cart = Vec::new();
        add_to_cart(&catalog, &mut cart, 1);
        add_to_cart(&catalog, &mut cart, 2);
        assert!(remove_from_cart(&mut cart, 1));
        assert!(!contains(&cart, 1));
        assert!(contains(&cart, 2));
    }

    #[test]
    fn test_remove_absent_id_leaves_cart_unchanged() {
        let catalog = catalog(&[1, 2]);
        let mut cart = Vec::new();
        add_to_cart(&catalog, &mut cart, 2);
        let before = cart.clone();
        assert!(!remove_from_cart(&mut cart, 1));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_total() {
        let catalog = catalog(&[1, 2]);
        let mut cart = Vec::new();
        assert_eq!(cart_total(&cart), 0.0);
        add_to_cart(&catalog, &mut cart, 1);
        add_to_cart(&catalog, &mut cart, 2);
        // 10.5 + 20.5
        assert!((cart_total(&cart) - 31.0).abs() < 1e-9);
    }
}
