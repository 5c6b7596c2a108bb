//! Shop state shared by every view.

use crate::cart::Cart;
use crate::catalog::{Catalog, generator_for};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::storage::{FileStorage, KeyValueStore};
use crate::views::{CartView, CatalogView};

/// A storage backend plus the configuration needed to open its stores.
///
/// Catalog and cart handles borrow from the shop, so both always see the
/// same backend.
#[derive(Debug)]
pub struct Shop<S> {
    storage: S,
    config: StoreConfig,
}

impl Shop<FileStorage> {
    /// Open a shop backed by the configured data file.
    #[must_use]
    pub fn open(config: StoreConfig) -> Self {
        let storage = FileStorage::new(&config.data_file);
        Self::new(storage, config)
    }
}

impl<S: KeyValueStore> Shop<S> {
    /// Create a shop over an existing backend.
    #[must_use]
    pub const fn new(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Product store handle.
    #[must_use]
    pub fn catalog(&self) -> Catalog<'_, S> {
        Catalog::new(&self.storage, &self.config.products_key)
            .with_id_generator(generator_for(self.config.id_strategy))
            .with_sample_data(self.config.seed_sample_data)
    }

    /// Cart store handle.
    #[must_use]
    pub fn cart(&self) -> Cart<'_, S> {
        Cart::new(&self.storage, &self.config.cart_key)
    }

    /// Seed the catalog if needed. Call once per session before reading.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if seeding fails to persist.
    pub fn initialize(&self) -> Result<()> {
        self.catalog().initialize().map(|_| ())
    }

    /// Listing data for a category filter and search query.
    #[must_use]
    pub fn catalog_view(&self, category: Option<&str>, query: Option<&str>) -> CatalogView {
        let catalog = self.catalog();
        CatalogView::new(&catalog.browse(category, query), catalog.list_categories())
    }

    /// Cart data with products resolved against the current catalog.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        let products = self.catalog().get_all();
        let cart = self.cart();
        CartView::new(&cart.lines(&products), cart.count())
    }
}
