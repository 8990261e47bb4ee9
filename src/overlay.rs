//! Product Detail Overlay State

use crate::models::Product;

/// Which product, if any, the detail overlay is showing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    selected: Option<Product>,
}

impl Overlay {
    pub fn open(&mut self, product: Product) {
        self.selected = Some(product);
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{filled_stars, format_rating_count};
    use crate::cart::add_to_cart;
    use crate::models::make_product;

    #[test]
    fn test_open_and_dismiss() {
        let mut overlay = Overlay::default();
        assert!(!overlay.is_open());

        overlay.open(make_product(3, 2.0, 1));
        assert!(overlay.is_open());
        assert_eq!(overlay.selected().map(|p| p.id), Some(3));

        overlay.dismiss();
        assert!(!overlay.is_open());
        assert!(overlay.selected().is_none());
    }

    #[test]
    fn test_open_replaces_selection() {
        let mut overlay = Overlay::default();
        overlay.open(make_product(1, 2.0, 1));
        overlay.open(make_product(2, 2.0, 1));
        assert_eq!(overlay.selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_browse_select_add_dismiss() {
        let payload = r#"[{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 4.2, "count": 10 }
        }]"#;
        let products: Vec<Product> = serde_json::from_str(payload).unwrap();

        assert_eq!(products.len(), 1);
        let mut cart = Vec::new();

        let row = &products[0];
        assert_eq!(filled_stars(row.rating.rate), 4);
        assert_eq!(format_rating_count(row.rating.count), "(10)");

        let mut overlay = Overlay::default();
        overlay.open(row.clone());
        let selected = overlay.selected().unwrap();
        assert_eq!(selected.description, "Your perfect pack for everyday use");

        let id = selected.id;
        assert!(add_to_cart(&products, &mut cart, id));
        assert_eq!(cart, vec![products[0].clone()]);

        // scrim tap
        overlay.dismiss();
        assert!(!overlay.is_open());
        assert_eq!(cart, vec![products[0].clone()]);
    }
}
