//! Cart entry records.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One line of the cart: a product reference and how many of it.
///
/// `product_id` is a weak reference. The product may have been deleted
/// from the catalog since the entry was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: ProductId,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Smallest quantity an entry may hold.
    pub const MIN_QUANTITY: u32 = 1;

    /// A fresh entry holding a single unit.
    #[must_use]
    pub const fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: Self::MIN_QUANTITY,
        }
    }

    /// Clamp a requested quantity into the valid range.
    ///
    /// Values below 1 become 1; values beyond `u32::MAX` saturate.
    #[must_use]
    pub fn clamp_quantity(requested: i64) -> u32 {
        u32::try_from(requested.max(i64::from(Self::MIN_QUANTITY))).unwrap_or(u32::MAX)
    }
}
