//! Command implementations.
//!
//! Output goes through `tracing` at info level, one line per record.

pub mod cart;
pub mod products;

use shelf_storefront::admin::ValidationErrors;
use shelf_storefront::config::ConfigError;
use shelf_storefront::storage::KeyValueStore;
use shelf_storefront::{Shop, StoreError};
use thiserror::Error;
use tracing::warn;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A write to the store failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The product form had invalid fields.
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Seed the catalog before a command runs.
///
/// Read-only commands carry on with whatever can be read when seeding fails.
/// Commands that write report the failure instead.
///
/// # Errors
///
/// Returns `CommandError` if seeding fails and the command writes.
pub fn prepare<S: KeyValueStore>(shop: &Shop<S>, read_only: bool) -> Result<(), CommandError> {
    match shop.initialize() {
        Ok(()) => Ok(()),
        Err(e) if read_only => {
            warn!(error = %e, "Catalog could not be initialized");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
