//! Inventory service client implementation.
//!
//! Plain JSON-over-HTTP via `reqwest`: `GET {base}/stock/{id}` and
//! `GET {base}/products/{id}`. Product metadata is cached with `moka`
//! (5-minute TTL); stock levels gate quantity mutations and are never
//! cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use shopcart_core::{Product, ProductId, StockLevel};
use tracing::{debug, instrument};

use crate::config::CartConfig;
use crate::inventory::{InventoryError, InventoryLookup};

const PRODUCT_CACHE_CAPACITY: u64 = 1000;
const PRODUCT_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Client for the inventory service.
///
/// Cheaply cloneable; clones share the HTTP connection pool and the
/// product metadata cache.
#[derive(Clone)]
pub struct InventoryClient {
    inner: Arc<InventoryClientInner>,
}

struct InventoryClientInner {
    client: reqwest::Client,
    base_url: String,
    products: Cache<ProductId, Product>,
}

impl InventoryClient {
    /// Create a new inventory client.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CartConfig) -> Result<Self, InventoryError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let products = Cache::builder()
            .max_capacity(PRODUCT_CACHE_CAPACITY)
            .time_to_live(PRODUCT_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(InventoryClientInner {
                client,
                base_url: config.inventory_url.as_str().trim_end_matches('/').to_string(),
                products,
            }),
        })
    }

    /// Fetch the current stock level for a product. Never cached.
    #[instrument(skip(self))]
    async fn fetch_stock(&self, id: ProductId) -> Result<StockLevel, InventoryError> {
        self.get_json(&endpoint(&self.inner.base_url, "stock", id), id)
            .await
    }

    /// Fetch product metadata, consulting the cache first.
    #[instrument(skip(self))]
    async fn fetch_product(&self, id: ProductId) -> Result<Product, InventoryError> {
        if let Some(product) = self.inner.products.get(&id).await {
            debug!(%id, "product cache hit");
            return Ok(product);
        }

        let product: Product = self
            .get_json(&endpoint(&self.inner.base_url, "products", id), id)
            .await?;
        self.inner.products.insert(id, product.clone()).await;
        Ok(product)
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        id: ProductId,
    ) -> Result<T, InventoryError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(InventoryError::NotFound(id));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(200).collect::<String>(),
                "inventory service returned non-success status"
            );
            return Err(InventoryError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str(&response_text)?)
    }
}

impl InventoryLookup for InventoryClient {
    async fn stock(&self, id: ProductId) -> Result<StockLevel, InventoryError> {
        self.fetch_stock(id).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.fetch_product(id).await
    }
}

/// Build a resource URL from the base URL, path segment, and product id.
fn endpoint(base_url: &str, resource: &str, id: ProductId) -> String {
    format!("{base_url}/{resource}/{id}")
}
