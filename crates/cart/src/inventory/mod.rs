//! Inventory service access.
//!
//! The cart consults an external, read-only inventory service for two
//! things: the current stock level of a product (a ceiling on allowed cart
//! quantity) and product metadata when a product first enters the cart.
//! The seam is the [`InventoryLookup`] trait; production uses
//! [`InventoryClient`], a `reqwest` JSON client.

mod client;

pub use client::InventoryClient;

use shopcart_core::{Product, ProductId, StockLevel};
use thiserror::Error;

/// Errors that can occur when talking to the inventory service.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service does not know this product.
    #[error("product {0} not found in inventory")]
    NotFound(ProductId),

    /// The service answered with a non-success status.
    #[error("inventory service returned HTTP {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only accessors for per-product stock levels and metadata.
///
/// One implementation call maps to at most one outbound request; there is
/// no batching and no pagination.
pub trait InventoryLookup {
    /// Fetch the current stock level for a product.
    fn stock(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<StockLevel, InventoryError>> + Send;

    /// Fetch product metadata (title, price, image).
    fn product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, InventoryError>> + Send;
}
