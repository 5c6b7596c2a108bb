//! Display data for the listing, admin and cart views.
//!
//! These structs carry preformatted strings so a front end only has to lay
//! them out. Prices always show two decimal places.

use rust_decimal::Decimal;
use shelf_core::{Product, ProductId, format_price};

use crate::cart::{ResolvedLine, sum_line_totals};
use crate::catalog::ALL_CATEGORIES;

/// Image shown when a product has no usable image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Resolve a product image, falling back to [`PLACEHOLDER_IMAGE`].
#[must_use]
pub fn image_or_placeholder(image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        image.to_string()
    }
}

/// Product display data for listing and admin tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
    pub description: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_price(product.price),
            category: product.category.clone(),
            image_url: image_or_placeholder(&product.image),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

/// Product listing display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub products: Vec<ProductCard>,
    /// Filter options: "All" followed by the catalog's categories.
    pub categories: Vec<String>,
}

impl CatalogView {
    /// Build the listing from browse results and the category list.
    #[must_use]
    pub fn new(products: &[Product], categories: Vec<String>) -> Self {
        let mut options = Vec::with_capacity(categories.len() + 1);
        options.push(ALL_CATEGORIES.to_string());
        options.extend(categories);

        Self {
            products: products.iter().map(ProductCard::from).collect(),
            categories: options,
        }
    }

    /// Whether the friendly "no products found" state should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&ResolvedLine> for CartItemView {
    fn from(line: &ResolvedLine) -> Self {
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            image_url: image_or_placeholder(&line.product.image),
            quantity: line.quantity,
            price: format_price(line.product.price),
            line_price: format_price(line.line_total()),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_price(Decimal::ZERO),
            item_count: 0,
        }
    }

    /// Build the cart view from resolved lines and the badge count.
    ///
    /// The subtotal only covers resolved lines; `item_count` is the stored
    /// badge count, which still includes entries for deleted products.
    #[must_use]
    pub fn new(lines: &[ResolvedLine], item_count: u64) -> Self {
        let subtotal = sum_line_totals(lines);
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            subtotal: format_price(subtotal),
            item_count,
        }
    }

    /// Whether the friendly "your cart is empty" state should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use shelf_core::ProductDraft;

    use super::*;

    fn product(image: &str) -> Product {
        Product::from_draft(
            ProductId::new(1),
            ProductDraft {
                name: "Smart Watch".to_string(),
                price: Decimal::new(19999, 2),
                category: "Electronics".to_string(),
                image: image.to_string(),
                description: None,
            },
        )
    }

    #[test]
    fn test_blank_image_uses_placeholder() {
        assert_eq!(ProductCard::from(&product("  ")).image_url, PLACEHOLDER_IMAGE);
        assert_eq!(ProductCard::from(&product("w.png")).image_url, "w.png");
    }

    #[test]
    fn test_card_formats_price() {
        let card = ProductCard::from(&product("w.png"));
        assert_eq!(card.price, "$199.99");
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_catalog_view_lists_all_first() {
        let view = CatalogView::new(&[], vec!["Books".to_string()]);
        assert_eq!(view.categories, ["All", "Books"]);
        assert!(view.is_empty());
    }

    #[test]
    fn test_cart_view_totals() {
        let lines = [ResolvedLine {
            product: product("w.png"),
            quantity: 2,
        }];
        let view = CartView::new(&lines, 3);

        assert_eq!(view.items[0].line_price, "$399.98");
        assert_eq!(view.subtotal, "$399.98");
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert_eq!(view.subtotal, "$0.00");
        assert!(view.is_empty());
        assert_eq!(view, CartView::default());
    }
}
