//! Catalog store: product CRUD, filtering and search.
//!
//! The product collection is read, modified in memory and written back in
//! full on every mutation. Reads are failure-tolerant; writes propagate
//! [`StoreError`](crate::error::StoreError).

mod ids;
mod seed;

use std::collections::BTreeSet;

use shelf_core::{Product, ProductDraft, ProductId};
use tracing::instrument;

use crate::error::Result;
use crate::storage::{JsonCollection, KeyValueStore};

pub use ids::{IdGenerator, SequentialIds, TimestampIds, generator_for};
pub use seed::sample_products;

/// Category value meaning "do not filter".
pub const ALL_CATEGORIES: &str = "All";

/// Resolves a cart entry's product reference.
///
/// A missing product is an expected outcome, not an error.
pub trait ProductLookup {
    fn find_product(&self, id: ProductId) -> Option<Product>;
}

impl ProductLookup for [Product] {
    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.iter().find(|p| p.id == id).cloned()
    }
}

impl ProductLookup for Vec<Product> {
    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.as_slice().find_product(id)
    }
}

/// Store for the product collection.
pub struct Catalog<'a, S: ?Sized> {
    products: JsonCollection<'a, S, Product>,
    ids: Box<dyn IdGenerator>,
    seed_sample_data: bool,
}

impl<'a, S: KeyValueStore + ?Sized> Catalog<'a, S> {
    /// Create a catalog over `key` using sequential IDs and sample seeding.
    #[must_use]
    pub fn new(storage: &'a S, key: &'a str) -> Self {
        Self {
            products: JsonCollection::new(storage, key),
            ids: Box::new(SequentialIds),
            seed_sample_data: true,
        }
    }

    /// Replace the ID assignment strategy.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Enable or disable seeding of sample products in [`Self::initialize`].
    #[must_use]
    pub fn with_sample_data(mut self, enabled: bool) -> Self {
        self.seed_sample_data = enabled;
        self
    }

    /// Seed the sample products if the collection is absent, empty or
    /// unreadable. Returns the resulting collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if writing the seeded collection fails.
    #[instrument(skip(self), fields(key = self.products.key()))]
    pub fn initialize(&self) -> Result<Vec<Product>> {
        let read = self.products.load();
        if !read.is_vacant() || !self.seed_sample_data {
            return Ok(read.into_items());
        }

        let mut products: Vec<Product> = Vec::new();
        for draft in sample_products() {
            let id = self.ids.next_id(&products);
            products.push(Product::from_draft(id, draft));
        }
        let stored = self.products.save(&products)?;

        tracing::info!(count = stored.len(), "Seeded sample products");
        Ok(stored)
    }

    /// All products in storage order. Unreadable storage yields an empty list.
    pub fn get_all(&self) -> Vec<Product> {
        self.products.items()
    }

    /// The product with `id`, if present.
    pub fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.get_all().into_iter().find(|p| p.id == id)
    }

    /// Append a product with a freshly assigned ID.
    ///
    /// No validation is performed; see [`crate::admin::ProductForm`]. The
    /// returned product is the stored form, so its price may carry less
    /// precision than the draft's.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails (e.g., quota exceeded) or a
    /// field cannot be stored in a readable form. Existing products are left
    /// untouched in both cases.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn add(&self, draft: ProductDraft) -> Result<Product> {
        let mut products = self.get_all();
        let product = Product::from_draft(self.ids.next_id(&products), draft);
        products.push(product.clone());
        let mut stored = self.products.save(&products)?;

        tracing::info!(id = %product.id, "Product added");
        Ok(stored.pop().unwrap_or(product))
    }

    /// Replace the product with `id`, keeping its ID and position.
    ///
    /// Returns `Ok(None)` without writing if no product matches. As with
    /// [`Self::add`], the returned product is the stored form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails or a field cannot be stored in
    /// a readable form.
    #[instrument(skip(self, draft))]
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>> {
        let mut products = self.get_all();
        let Some(slot) = products.iter_mut().find(|p| p.id == id) else {
            tracing::debug!("Product not found for update");
            return Ok(None);
        };

        *slot = Product::from_draft(id, draft);
        let stored = self.products.save(&products)?;

        tracing::info!("Product updated");
        Ok(stored.into_iter().find(|p| p.id == id))
    }

    /// Remove the product with `id`. Returns whether a product was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    #[instrument(skip(self))]
    pub fn delete(&self, id: ProductId) -> Result<bool> {
        let mut products = self.get_all();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Ok(false);
        }

        self.products.save(&products)?;
        tracing::info!("Product deleted");
        Ok(true)
    }

    /// Products in exactly `category` (case-sensitive).
    ///
    /// `None`, an empty string or [`ALL_CATEGORIES`] return everything.
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<Product> {
        filter_by_category(self.get_all(), category)
    }

    /// Products whose name contains `query`, ignoring case.
    ///
    /// `None` or a blank query returns everything.
    pub fn search(&self, query: Option<&str>) -> Vec<Product> {
        search(self.get_all(), query)
    }

    /// Apply the category filter and the name search together.
    pub fn browse(&self, category: Option<&str>, query: Option<&str>) -> Vec<Product> {
        search(filter_by_category(self.get_all(), category), query)
    }

    /// Distinct categories present in the catalog, sorted.
    pub fn list_categories(&self) -> Vec<String> {
        self.get_all()
            .into_iter()
            .map(|p| p.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<S: KeyValueStore + ?Sized> ProductLookup for Catalog<'_, S> {
    fn find_product(&self, id: ProductId) -> Option<Product> {
        self.get_by_id(id)
    }
}

fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category {
        None | Some("" | ALL_CATEGORIES) => products,
        Some(category) => products
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
    }
}

fn search(products: Vec<Product>, query: Option<&str>) -> Vec<Product> {
    let needle = match query.map(str::trim) {
        None | Some("") => return products,
        Some(q) => q.to_lowercase(),
    };

    products
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}
