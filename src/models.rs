//! Frontend Models
//!
//! Data structures matching the products API payload.

use serde::Deserialize;

/// Product data structure (matches the `/api/products` payload)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_from_api_payload() {
        let payload = r#"[
            {
                "id": 1,
                "name": "Adidas Sport Runner",
                "brand": "Adidas",
                "price": 129.99,
                "category": "running",
                "image": "adidas-blue.jpg",
                "description": "Classic Adidas sneakers with royal blue accents"
            }
        ]"#;

        let products: Vec<Product> = serde_json::from_str(payload).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].brand, "Adidas");
        assert_eq!(products[0].category, "running");
        assert_eq!(products[0].price, 129.99);
    }
}
