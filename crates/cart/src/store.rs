//! The cart store: authoritative cart state plus the three mutating
//! operations.
//!
//! Each operation is a single linear sequence with early-return aborts:
//! look at the current state, make at most one inventory request, and on
//! success persist the new state before committing it in memory. Failures
//! never leave a partially applied mutation behind, and every failure is
//! reported through the notifier before the error is returned.
//!
//! Operations take `&mut self`, so two mutations can never interleave on
//! the same store; there are no retries and no timeouts beyond the HTTP
//! client's.

use shopcart_core::{CartItem, ProductId};
use tracing::instrument;

use crate::error::CartError;
use crate::inventory::InventoryLookup;
use crate::notify::{Notifier, messages};
use crate::storage::{CartStorage, StorageError};

/// Fixed namespace key for the persisted cart payload.
pub const CART_STORAGE_KEY: &str = "shopcart:cart";

/// In-memory cart mirrored to durable storage on every mutation.
///
/// Generic over its three seams: the inventory lookup, the persistence
/// sink, and the notification sink.
pub struct CartStore<I, S, N> {
    items: Vec<CartItem>,
    inventory: I,
    storage: S,
    notifier: N,
}

impl<I, S, N> CartStore<I, S, N>
where
    I: InventoryLookup,
    S: CartStorage,
    N: Notifier,
{
    /// Open a cart store, hydrating state from storage.
    ///
    /// A missing payload yields an empty cart. A present but malformed
    /// payload also yields an empty cart, with a WARN log; it will be
    /// overwritten on the next successful mutation.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage backend itself cannot be read.
    pub fn open(inventory: I, storage: S, notifier: N) -> Result<Self, StorageError> {
        let items = match storage.get(CART_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(error = %err, "persisted cart payload is malformed, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            items,
            inventory,
            storage,
            notifier,
        })
    }

    /// Current cart state, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add one unit of a product to the cart.
    ///
    /// If the product is already in the cart, its quantity is incremented
    /// after a stock check. If not, its metadata is fetched and a new item
    /// with quantity 1 is appended; this branch performs no stock check
    /// (the first unit of a product is never validated against stock).
    ///
    /// # Errors
    ///
    /// `StockExceeded` if the increment would pass the stock level;
    /// `Inventory`/`Storage` on lookup or persistence failure. A
    /// notification is emitted before any error returns.
    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_add(product_id).await;
        if let Err(err) = &result {
            self.notify_failure(err, messages::ADD_FAILED);
        }
        result
    }

    async fn try_add(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut items = self.items.clone();

        if let Some(item) = items.iter_mut().find(|item| item.id == product_id) {
            let candidate = item.amount + 1;
            let stock = self.inventory.stock(product_id).await?;
            if candidate > stock.amount {
                return Err(CartError::StockExceeded {
                    id: product_id,
                    available: stock.amount,
                });
            }
            item.amount = candidate;
        } else {
            let product = self.inventory.product(product_id).await?;
            items.push(product.into_cart_item(1));
        }

        self.commit(items)
    }

    /// Remove a product from the cart entirely.
    ///
    /// # Errors
    ///
    /// `NotFound` if the product is not in the cart; `Storage` on
    /// persistence failure. A notification is emitted before any error
    /// returns.
    #[instrument(skip(self))]
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.try_remove(product_id);
        if result.is_err() {
            self.notifier.error(messages::REMOVE_FAILED);
        }
        result
    }

    fn try_remove(&mut self, product_id: ProductId) -> Result<(), CartError> {
        if !self.items.iter().any(|item| item.id == product_id) {
            return Err(CartError::NotFound(product_id));
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        self.commit(items)
    }

    /// Set a product's quantity to an exact value.
    ///
    /// A non-positive `amount` is a silent no-op: the UI's own decrement
    /// control stops at 1, and deletion goes through
    /// [`remove_product`](Self::remove_product).
    ///
    /// # Errors
    ///
    /// `NotFound` if the product is not in the cart; `StockExceeded` if
    /// `amount` passes the stock level; `Inventory`/`Storage` on lookup or
    /// persistence failure. A notification is emitted before any error
    /// returns.
    #[instrument(skip(self))]
    pub async fn update_amount(&mut self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        if amount <= 0 {
            return Ok(());
        }

        let result = self.try_update(product_id, amount).await;
        if let Err(err) = &result {
            self.notify_failure(err, messages::UPDATE_FAILED);
        }
        result
    }

    async fn try_update(&mut self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|item| item.id == product_id)
            .ok_or(CartError::NotFound(product_id))?;

        let stock = self.inventory.stock(product_id).await?;
        if amount > i64::from(stock.amount) {
            return Err(CartError::StockExceeded {
                id: product_id,
                available: stock.amount,
            });
        }

        // amount is in 1..=stock here, so the cast cannot truncate
        item.amount = u32::try_from(amount).unwrap_or(u32::MAX);
        self.commit(items)
    }

    /// Persist the new state, then commit it in memory.
    fn commit(&mut self, items: Vec<CartItem>) -> Result<(), CartError> {
        let payload = serde_json::to_string(&items)?;
        self.storage.set(CART_STORAGE_KEY, &payload)?;
        self.items = items;
        Ok(())
    }

    fn notify_failure(&self, err: &CartError, fallback: &str) {
        match err {
            CartError::StockExceeded { .. } => self.notifier.error(messages::OUT_OF_STOCK),
            _ => self.notifier.error(fallback),
        }
    }
}
