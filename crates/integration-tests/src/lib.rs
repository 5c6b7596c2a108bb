//! Integration tests for Shelf.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shelf-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_store` - Product CRUD, filtering and search
//! - `cart_store` - Cart entries, quantities and totals
//! - `file_backed` - The same flows against an on-disk store
//!
//! This library holds the shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use shelf_core::ProductDraft;
use shelf_storefront::Shop;
use shelf_storefront::config::StoreConfig;
use shelf_storefront::storage::MemoryStorage;

/// A valid product draft with the given name, price in cents and category.
#[must_use]
pub fn draft(name: &str, cents: i64, category: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        category: category.to_string(),
        image: format!("https://example.com/{}.jpg", name.to_lowercase().replace(' ', "-")),
        description: Some(format!("{name} description")),
    }
}

/// A shop over fresh in-memory storage with sample seeding disabled.
#[must_use]
pub fn empty_shop() -> Shop<MemoryStorage> {
    let config = StoreConfig {
        seed_sample_data: false,
        ..StoreConfig::default()
    };
    Shop::new(MemoryStorage::new(), config)
}

/// A shop over fresh in-memory storage, initialized with sample products.
///
/// # Panics
///
/// Panics if seeding fails, which in-memory storage never does.
#[must_use]
pub fn seeded_shop() -> Shop<MemoryStorage> {
    let shop = Shop::new(MemoryStorage::new(), StoreConfig::default());
    shop.initialize().expect("seeding in-memory storage");
    shop
}
