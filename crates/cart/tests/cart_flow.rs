//! End-to-end cart flow over the in-memory seams.
//!
//! Walks the full user journey: add a product twice, try to set a quantity
//! above stock, then empty the cart - checking state and notifications at
//! every step.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashMap;

use rust_decimal::Decimal;
use shopcart::inventory::{InventoryError, InventoryLookup};
use shopcart::notify::{BufferedNotifier, messages};
use shopcart::storage::MemoryStorage;
use shopcart::store::CartStore;
use shopcart_core::{Product, ProductId, StockLevel};

/// Map-backed inventory with a fixed catalog.
struct StaticInventory {
    stock: HashMap<i64, u32>,
    products: HashMap<i64, Product>,
}

impl StaticInventory {
    fn new() -> Self {
        let mut stock = HashMap::new();
        let mut products = HashMap::new();
        stock.insert(1, 5);
        products.insert(
            1,
            Product {
                id: ProductId::new(1),
                title: "Trail Runner".to_string(),
                price: Decimal::new(17990, 2),
                image_url: "https://cdn.example.com/trail-runner.jpg".to_string(),
            },
        );
        Self { stock, products }
    }
}

impl InventoryLookup for StaticInventory {
    async fn stock(&self, id: ProductId) -> Result<StockLevel, InventoryError> {
        self.stock
            .get(&id.as_i64())
            .map(|&amount| StockLevel { id, amount })
            .ok_or(InventoryError::NotFound(id))
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.products
            .get(&id.as_i64())
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }
}

#[tokio::test]
async fn full_cart_journey() {
    let storage = MemoryStorage::new();
    let notifier = BufferedNotifier::new();
    let mut cart =
        CartStore::open(StaticInventory::new(), storage.clone(), notifier.clone()).unwrap();
    assert!(cart.items().is_empty());

    // First add: new item with amount 1.
    cart.add_product(ProductId::new(1)).await.unwrap();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].amount, 1);
    assert_eq!(cart.items()[0].title, "Trail Runner");

    // Second add: increment within stock.
    cart.add_product(ProductId::new(1)).await.unwrap();
    assert_eq!(cart.items()[0].amount, 2);

    // Requesting more than stock: state unchanged, toast emitted.
    let result = cart.update_amount(ProductId::new(1), 10).await;
    assert!(result.is_err());
    assert_eq!(cart.items()[0].amount, 2);
    assert_eq!(notifier.messages(), vec![messages::OUT_OF_STOCK]);

    // Remove empties the cart.
    cart.remove_product(ProductId::new(1)).unwrap();
    assert!(cart.items().is_empty());

    // The persisted copy survived every step; a fresh store hydrates to the
    // same (now empty) state.
    let reopened =
        CartStore::open(StaticInventory::new(), storage, BufferedNotifier::new()).unwrap();
    assert!(reopened.items().is_empty());
}
