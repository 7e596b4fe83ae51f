//! Catalog Utilities
//!
//! Pure helpers for filtering and card formatting.

use crate::models::Product;

/// Filter value that selects the whole catalog
pub const FILTER_ALL: &str = "all";

/// Brand filter options (value, label)
pub const FILTER_BRANDS: &[(&str, &str)] = &[
    ("all", "All"),
    ("Adidas", "Adidas"),
    ("Nike", "Nike"),
    ("Puma", "Puma"),
];

/// Brand-equality filter; `"all"` keeps every product.
/// Relative order is preserved.
pub fn filter_by_brand(products: &[Product], filter: &str) -> Vec<Product> {
    if filter == FILTER_ALL {
        products.to_vec()
    } else {
        products
            .iter()
            .filter(|product| product.brand == filter)
            .cloned()
            .collect()
    }
}

/// Price label for card footers
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, brand: &str) -> Product {
        Product {
            id,
            name: format!("Sneaker {}", id),
            brand: brand.to_string(),
            category: "running".to_string(),
            price: 99.99,
            description: String::new(),
            image: format!("sneaker-{}.jpg", id),
        }
    }

    #[test]
    fn all_filter_returns_full_list() {
        let products = vec![
            make_product(1, "Nike"),
            make_product(2, "Adidas"),
            make_product(3, "Puma"),
        ];

        let filtered = filter_by_brand(&products, FILTER_ALL);
        assert_eq!(filtered, products);
    }

    #[test]
    fn brand_filter_keeps_only_matching_products_in_order() {
        let products = vec![
            make_product(1, "Nike"),
            make_product(2, "Adidas"),
            make_product(3, "Nike"),
            make_product(4, "Puma"),
        ];

        let filtered = filter_by_brand(&products, "Nike");
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filtered.iter().all(|p| p.brand == "Nike"));
    }

    #[test]
    fn unknown_brand_yields_empty_list() {
        let products = vec![make_product(1, "Nike")];
        assert!(filter_by_brand(&products, "Reebok").is_empty());
    }

    #[test]
    fn filter_values_cover_every_brand_served() {
        let products = vec![
            make_product(1, "Adidas"),
            make_product(2, "Nike"),
            make_product(3, "Puma"),
        ];

        for product in &products {
            assert!(
                FILTER_BRANDS.iter().any(|(value, _)| *value == product.brand),
                "no filter button for brand {}",
                product.brand
            );
        }
    }

    #[test]
    fn price_label_has_two_decimals() {
        assert_eq!(format_price(89.99), "$89.99");
        assert_eq!(format_price(150.0), "$150.00");
        assert_eq!(format_price(129.99), "$129.99");
    }
}
