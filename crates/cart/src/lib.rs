//! Shopcart - storefront cart state management.
//!
//! This crate owns the cart for a storefront session: an ordered list of
//! selected products, mirrored to a durable key-value store on every
//! mutation and validated against a remote inventory service before any
//! quantity increases.
//!
//! # Architecture
//!
//! - [`CartStore`] holds the authoritative cart state and exposes the three
//!   mutating operations (add, remove, set quantity)
//! - [`InventoryClient`] is a `reqwest` JSON client for the inventory
//!   service's stock and products endpoints, with `moka` caching for
//!   product metadata
//! - Persistence and notifications are trait seams ([`CartStorage`],
//!   [`Notifier`]) so embedders and tests can substitute their own sinks
//!
//! # Example
//!
//! ```rust,ignore
//! use shopcart::{CartConfig, CartStore, InventoryClient, JsonFileStorage, TracingNotifier};
//! use shopcart_core::ProductId;
//!
//! let config = CartConfig::from_env()?;
//! let inventory = InventoryClient::new(&config)?;
//! let storage = JsonFileStorage::new(&config.storage_path);
//! let mut cart = CartStore::open(inventory, storage, TracingNotifier)?;
//!
//! cart.add_product(ProductId::new(1)).await?;
//! for item in cart.items() {
//!     println!("{} x{}", item.title, item.amount);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod inventory;
pub mod notify;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::CartError;
pub use inventory::{InventoryClient, InventoryError, InventoryLookup};
pub use notify::{BufferedNotifier, Notifier, TracingNotifier, messages};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::{CART_STORAGE_KEY, CartStore};
