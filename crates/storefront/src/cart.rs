//! Cart store: product references and quantities.
//!
//! Entries point at products by ID only. Entries whose product has since
//! been deleted stay in storage and are skipped when lines and totals are
//! resolved.

use rust_decimal::Decimal;
use shelf_core::{CartEntry, Product, ProductId};
use tracing::instrument;

use crate::catalog::ProductLookup;
use crate::error::Result;
use crate::storage::{JsonCollection, KeyValueStore};

/// A cart entry joined with the product it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine {
    pub product: Product,
    pub quantity: u32,
}

impl ResolvedLine {
    /// Unit price times quantity, saturating at the `Decimal` bounds.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Sum of line totals, saturating at the `Decimal` bounds.
#[must_use]
pub fn sum_line_totals(lines: &[ResolvedLine]) -> Decimal {
    lines
        .iter()
        .map(ResolvedLine::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Store for the cart collection.
pub struct Cart<'a, S: ?Sized> {
    entries: JsonCollection<'a, S, CartEntry>,
}

impl<'a, S: KeyValueStore + ?Sized> Cart<'a, S> {
    /// Create a cart over `key`.
    #[must_use]
    pub const fn new(storage: &'a S, key: &'a str) -> Self {
        Self {
            entries: JsonCollection::new(storage, key),
        }
    }

    /// All entries in storage order. Unreadable storage yields an empty list.
    pub fn get_all(&self) -> Vec<CartEntry> {
        self.entries.items()
    }

    /// Add one unit of `product_id`, creating the entry if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    #[instrument(skip(self))]
    pub fn add(&self, product_id: ProductId) -> Result<()> {
        let mut entries = self.get_all();
        match entries.iter_mut().find(|e| e.product_id == product_id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => entries.push(CartEntry::new(product_id)),
        }
        self.entries.save(&entries)?;

        tracing::debug!(badge_count = count_of(&entries), "Cart updated");
        Ok(())
    }

    /// Set the quantity for `product_id`, clamped to at least 1.
    ///
    /// Does nothing if the product is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    #[instrument(skip(self))]
    pub fn set_quantity(&self, product_id: ProductId, quantity: i64) -> Result<()> {
        let mut entries = self.get_all();
        let Some(entry) = entries.iter_mut().find(|e| e.product_id == product_id) else {
            return Ok(());
        };

        entry.quantity = CartEntry::clamp_quantity(quantity);
        self.entries.save(&entries)?;

        tracing::debug!(badge_count = count_of(&entries), "Cart updated");
        Ok(())
    }

    /// Remove the entry for `product_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    #[instrument(skip(self))]
    pub fn remove(&self, product_id: ProductId) -> Result<()> {
        let mut entries = self.get_all();
        let before = entries.len();
        entries.retain(|e| e.product_id != product_id);
        if entries.len() == before {
            return Ok(());
        }

        self.entries.save(&entries)?;
        tracing::debug!(badge_count = count_of(&entries), "Cart updated");
        Ok(())
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the removal.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<()> {
        self.entries.clear()?;
        tracing::debug!("Cart cleared");
        Ok(())
    }

    /// Total units across all entries.
    pub fn count(&self) -> u64 {
        count_of(&self.get_all())
    }

    /// Entries whose product resolves, in cart order.
    pub fn lines<L: ProductLookup + ?Sized>(&self, products: &L) -> Vec<ResolvedLine> {
        self.get_all()
            .into_iter()
            .filter_map(|entry| {
                let product = products.find_product(entry.product_id);
                if product.is_none() {
                    tracing::debug!(product_id = %entry.product_id, "Skipping cart entry for missing product");
                }
                product.map(|product| ResolvedLine {
                    product,
                    quantity: entry.quantity,
                })
            })
            .collect()
    }

    /// Sum of quantity times unit price, skipping unresolved entries.
    pub fn total<L: ProductLookup + ?Sized>(&self, products: &L) -> Decimal {
        sum_line_totals(&self.lines(products))
    }
}

fn count_of(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.quantity)).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use shelf_core::ProductDraft;

    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "ecommerce_cart";

    fn product(id: i64, cents: i64) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft {
                name: format!("Product {id}"),
                price: Decimal::new(cents, 2),
                category: "Misc".to_string(),
                image: String::new(),
                description: None,
            },
        )
    }

    #[test]
    fn test_add_increments_existing_entry() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.add(ProductId::new(1)).unwrap();
        cart.add(ProductId::new(2)).unwrap();
        cart.add(ProductId::new(1)).unwrap();

        let entries = cart.get_all();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_stored_layout() {
        let storage = MemoryStorage::new();
        Cart::new(&storage, KEY).add(ProductId::new(9)).unwrap();
        assert_eq!(
            storage.get(KEY).unwrap().as_deref(),
            Some(r#"[{"productId":9,"quantity":1}]"#)
        );
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.add(ProductId::new(1)).unwrap();

        cart.set_quantity(ProductId::new(1), -3).unwrap();
        assert_eq!(cart.get_all()[0].quantity, 1);

        cart.set_quantity(ProductId::new(1), 5).unwrap();
        assert_eq!(cart.get_all()[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.set_quantity(ProductId::new(1), 4).unwrap();

        assert!(cart.get_all().is_empty());
        assert_eq!(storage.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.add(ProductId::new(1)).unwrap();
        cart.add(ProductId::new(2)).unwrap();

        cart.remove(ProductId::new(1)).unwrap();
        cart.remove(ProductId::new(42)).unwrap();
        assert_eq!(cart.get_all(), vec![CartEntry::new(ProductId::new(2))]);
    }

    #[test]
    fn test_total_skips_missing_products() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.add(ProductId::new(1)).unwrap();
        cart.add(ProductId::new(1)).unwrap();
        for _ in 0..3 {
            cart.add(ProductId::new(2)).unwrap();
        }

        // Product 1 no longer exists
        let catalog = vec![product(2, 1000)];
        assert_eq!(cart.total(&catalog), Decimal::new(30, 0));
        assert_eq!(cart.lines(&catalog).len(), 1);
        // Count still includes the dangling entry
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.add(ProductId::new(1)).unwrap();
        cart.add(ProductId::new(2)).unwrap();
        cart.set_quantity(ProductId::new(1), 1_000_000_000).unwrap();
        cart.set_quantity(ProductId::new(2), i64::MAX).unwrap();

        let huge = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        let mut first = product(1, 0);
        first.price = huge;
        let mut second = product(2, 0);
        second.price = huge;
        let catalog = vec![first, second];

        assert_eq!(cart.lines(&catalog)[0].line_total(), Decimal::MAX);
        assert_eq!(cart.total(&catalog), Decimal::MAX);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        assert_eq!(cart.total(&Vec::<Product>::new()), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_corrupt_cart_reads_empty() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "oops").unwrap();
        let cart = Cart::new(&storage, KEY);

        assert!(cart.get_all().is_empty());
        // Adding overwrites the unreadable value
        cart.add(ProductId::new(3)).unwrap();
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        let cart = Cart::new(&storage, KEY);
        cart.add(ProductId::new(1)).unwrap();
        cart.clear().unwrap();

        assert!(cart.get_all().is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(storage.get(KEY).unwrap(), None);
    }
}
