//! Core types for Shopcart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;

pub use cart::{CartItem, Product, StockLevel};
pub use id::*;
