//! Shelf Storefront library.
//!
//! Catalog and cart stores persisted as JSON arrays in a string-valued
//! key-value backend. Every operation is a synchronous read-modify-write of
//! the whole collection.
//!
//! # Modules
//!
//! - [`storage`] - The [`KeyValueStore`](storage::KeyValueStore) seam and its backends
//! - [`catalog`] - Product CRUD, filtering, search and seeding
//! - [`cart`] - Cart entries, quantities and totals
//! - [`admin`] - Product form validation
//! - [`views`] - Display data for the listing and cart
//! - [`state`] - [`Shop`](state::Shop), which ties a backend to its stores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod views;

pub use error::{Result, StoreError};
pub use state::Shop;
