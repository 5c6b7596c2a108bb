//! Shelf Core - Shared domain types.
//!
//! This crate provides the types used across all Shelf components:
//! - `storefront` - Catalog and cart stores over a key-value backend
//! - `cli` - Command-line driver for browsing, admin and cart operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, products, cart entries and price display

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
