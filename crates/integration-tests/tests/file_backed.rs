//! Integration tests against the on-disk store.
//!
//! Each test gets its own temp directory; a second `Shop` over the same file
//! stands in for a later session (or another process).

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use rust_decimal::Decimal;
use shelf_integration_tests::draft;
use shelf_storefront::Shop;
use shelf_storefront::config::{IdStrategy, StoreConfig};

fn config_in(dir: &tempfile::TempDir) -> StoreConfig {
    StoreConfig::default().with_data_file(dir.path().join("shelf-data.json"))
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let first = Shop::open(config_in(&dir));
    first.initialize().unwrap();
    let lamp = first.catalog().add(draft("Desk Lamp", 3450, "Home")).unwrap();
    first.cart().add(lamp.id).unwrap();
    first.cart().add(lamp.id).unwrap();

    let second = Shop::open(config_in(&dir));
    second.initialize().unwrap();
    assert_eq!(second.catalog().get_all().len(), 9);
    assert_eq!(second.catalog().get_by_id(lamp.id).unwrap(), lamp);
    assert_eq!(second.cart().total(&second.catalog()), Decimal::new(69, 0));
}

#[test]
fn test_file_layout_matches_keyed_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let shop = Shop::open(config_in(&dir));
    shop.initialize().unwrap();
    shop.cart().add(shop.catalog().get_all()[0].id).unwrap();

    let raw = fs::read_to_string(dir.path().join("shelf-data.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let products: serde_json::Value =
        serde_json::from_str(document["ecommerce_products"].as_str().unwrap()).unwrap();
    let cart: serde_json::Value =
        serde_json::from_str(document["ecommerce_cart"].as_str().unwrap()).unwrap();

    assert_eq!(products.as_array().unwrap().len(), 8);
    assert!(products[0]["price"].is_number());
    assert_eq!(cart[0]["quantity"], 1);
    assert!(cart[0]["productId"].is_number());
}

#[test]
fn test_unreadable_file_reads_empty_and_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf-data.json");
    fs::write(&path, "this is not json").unwrap();

    let shop = Shop::open(StoreConfig::default().with_data_file(&path));
    assert!(shop.catalog().get_all().is_empty());
    assert!(shop.initialize().is_err());
    assert!(shop.cart().add(shelf_core::ProductId::new(1)).is_err());
    // The unreadable file is left as found
    assert_eq!(fs::read_to_string(&path).unwrap(), "this is not json");
}

#[test]
fn test_timestamp_ids_are_unique_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        id_strategy: IdStrategy::Timestamp,
        ..config_in(&dir)
    };
    let shop = Shop::open(config);
    shop.initialize().unwrap();

    let catalog = shop.catalog();
    let a = catalog.add(draft("A", 100, "X")).unwrap();
    let b = catalog.add(draft("B", 100, "X")).unwrap();
    assert!(b.id > a.id);

    let mut ids: Vec<_> = catalog.get_all().iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
