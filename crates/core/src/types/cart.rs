//! Cart and inventory data model.
//!
//! These types are shared between the cart store, the inventory client, and
//! the CLI. Wire payloads from the inventory service use camelCase field
//! names (`imageUrl`), so the structs carry a `rename_all` attribute.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// One distinct product in the cart with its currently selected quantity.
///
/// Invariants maintained by the cart store: at most one item per product id,
/// and `amount` is always at least 1 and never above the stock level known
/// at the time of the last mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image_url: String,
    pub amount: u32,
}

/// Product metadata as served by the inventory service's products endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image_url: String,
}

impl Product {
    /// Turn product metadata into a cart item with the given quantity.
    #[must_use]
    pub fn into_cart_item(self, amount: u32) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            price: self.price,
            image_url: self.image_url,
            amount,
        }
    }
}

/// Stock snapshot from the inventory service. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: ProductId,
    pub amount: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Trail Runner".to_string(),
            price: Decimal::new(17990, 2),
            image_url: "https://cdn.example.com/trail-runner.jpg".to_string(),
        }
    }

    #[test]
    fn test_into_cart_item_carries_metadata() {
        let item = sample_product().into_cart_item(1);
        assert_eq!(item.id, ProductId::new(1));
        assert_eq!(item.title, "Trail Runner");
        assert_eq!(item.amount, 1);
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{"id":2,"title":"Sandal","price":59.9,"imageUrl":"https://cdn.example.com/s.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.image_url, "https://cdn.example.com/s.jpg");
    }

    #[test]
    fn test_cart_item_serde_roundtrip() {
        let item = sample_product().into_cart_item(3);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"imageUrl\""));
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
