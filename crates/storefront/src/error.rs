//! Store-level error handling.
//!
//! Only writes can fail from a caller's point of view. Unreadable stored
//! content is recovered inside the stores, and a missing record is an
//! `Option`/`bool` result rather than an error.

use thiserror::Error;

use crate::storage::StorageError;

/// Error returned by catalog and cart mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key-value backend rejected the write.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Short message suitable for showing to an end user.
    ///
    /// Internal details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Storage(StorageError::QuotaExceeded { .. }) => {
                "Failed to save: storage is full"
            }
            Self::Storage(_) | Self::Serialization(_) => "Failed to save changes",
        }
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
