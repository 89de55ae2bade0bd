//! Shopcart Core - Shared types library.
//!
//! This crate provides common types used across all Shopcart components:
//! - `cart` - Cart state management library
//! - `cli` - Command-line tool for driving a cart from the terminal
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the cart/inventory data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
