//! Unified error type for cart operations.
//!
//! The three cart operations never panic and never lose state on failure;
//! they return a `CartError` describing what went wrong and emit a
//! user-visible notification through the store's [`Notifier`] before
//! returning. Callers that only care about the toast may ignore the result.
//!
//! [`Notifier`]: crate::notify::Notifier

use shopcart_core::ProductId;
use thiserror::Error;

use crate::inventory::InventoryError;
use crate::storage::StorageError;

/// Errors returned by the cart store's mutating operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds the currently available stock.
    #[error("requested quantity for product {id} exceeds available stock ({available})")]
    StockExceeded {
        /// Product whose stock was consulted.
        id: ProductId,
        /// Stock level reported by the inventory service.
        available: u32,
    },

    /// The product is not in the cart.
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    /// Inventory lookup failed.
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Persisting the cart failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serializing the cart payload failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
