//! Key-value storage seam.
//!
//! Every collection lives under a single string key as a JSON array and is
//! replaced wholesale on each mutation. The [`KeyValueStore`] trait is the
//! only thing the stores know about persistence, so they run unchanged
//! against [`MemoryStorage`] in tests and [`FileStorage`] on disk.
//!
//! # Failure semantics
//!
//! - Reads of a collection never fail: unreadable content is reported as
//!   [`CollectionRead::Unreadable`] and callers that only want items get an
//!   empty `Vec` plus a warning in the logs.
//! - Writes propagate [`StorageError`] to the caller.
//! - A write is parsed back before it reaches the backend, so a value that
//!   would not read back (e.g. a price outside the numeric range) is
//!   rejected instead of replacing a readable collection.

mod file;
mod memory;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the value would exceed the backend's size limit.
    #[error("quota exceeded writing '{key}': need {needed} bytes, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// The backend is disabled or otherwise unusable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure in a file-backed store.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium itself is not a valid key-value document.
    #[error("storage corrupt: {0}")]
    Corrupt(String),
}

/// A string-keyed, string-valued store.
///
/// Methods take `&self` so several stores can share one backend; the
/// implementations use interior mutability and are single-threaded.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Outcome of reading a collection key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionRead<T> {
    /// Nothing has been stored under the key yet.
    Absent,
    /// The key held a well-formed array.
    Loaded(Vec<T>),
    /// The key (or the backend) could not be read or parsed.
    Unreadable(String),
}

impl<T> CollectionRead<T> {
    /// Items that were read, or an empty `Vec` for the other outcomes.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Loaded(items) => items,
            Self::Absent | Self::Unreadable(_) => Vec::new(),
        }
    }

    /// Whether a seeding pass should run: absent, empty or unreadable.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        match self {
            Self::Loaded(items) => items.is_empty(),
            Self::Absent | Self::Unreadable(_) => true,
        }
    }
}

/// A typed JSON array persisted under one key.
pub struct JsonCollection<'a, S: ?Sized, T> {
    storage: &'a S,
    key: &'a str,
    _item: PhantomData<fn() -> T>,
}

impl<'a, S, T> JsonCollection<'a, S, T>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + DeserializeOwned,
{
    /// Create a collection view over `key`.
    #[must_use]
    pub const fn new(storage: &'a S, key: &'a str) -> Self {
        Self {
            storage,
            key,
            _item: PhantomData,
        }
    }

    /// The storage key backing this collection.
    #[must_use]
    pub const fn key(&self) -> &str {
        self.key
    }

    /// Read the collection, distinguishing absent from unreadable.
    pub fn load(&self) -> CollectionRead<T> {
        match self.storage.get(self.key) {
            Ok(None) => CollectionRead::Absent,
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => CollectionRead::Loaded(items),
                Err(e) => CollectionRead::Unreadable(format!("invalid JSON: {e}")),
            },
            Err(e) => CollectionRead::Unreadable(e.to_string()),
        }
    }

    /// Read the collection, treating unreadable content as empty.
    pub fn items(&self) -> Vec<T> {
        let read = self.load();
        if let CollectionRead::Unreadable(reason) = &read {
            tracing::warn!(key = self.key, %reason, "Unreadable collection treated as empty");
        }
        read.into_items()
    }

    /// Serialize and persist the full collection.
    ///
    /// Returns the items as the next [`Self::load`] will see them, which can
    /// differ from `items` where the stored form is lossy.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization fails, if the serialized form
    /// does not parse back, or if the write fails. Nothing is written in the
    /// first two cases.
    pub fn save(&self, items: &[T]) -> crate::error::Result<Vec<T>> {
        let raw = serde_json::to_string(items)?;
        let stored = serde_json::from_str::<Vec<T>>(&raw)?;
        self.storage.set(self.key, &raw)?;
        Ok(stored)
    }

    /// Delete the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the removal.
    pub fn clear(&self) -> crate::error::Result<()> {
        self.storage.remove(self.key)?;
        Ok(())
    }
}
