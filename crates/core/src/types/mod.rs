//! Core types for Shelf.
//!
//! This module provides type-safe wrappers for the catalog and cart domain.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartEntry;
pub use id::*;
pub use price::format_price;
pub use product::{Product, ProductDraft};
