//! Catalog product records.
//!
//! The stored layout matches the persisted JSON array: `price` is a JSON
//! number and `description` is omitted when absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A sellable product as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, unique within the catalog.
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Free-form category; not restricted to the admin's fixed list.
    pub category: String,
    /// Image URL. Blank values fall back to a placeholder when rendered.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Build a stored product from a draft and an assigned ID.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            image: draft.image,
            description: draft.description,
        }
    }

    /// Strip the ID, leaving the caller-supplied fields.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            category: self.category.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
        }
    }
}

/// Product fields supplied by a caller when creating or updating a record.
///
/// There is no `id` field: IDs are always assigned or preserved by the
/// store. Unknown fields (including a stray `id`) are ignored when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_draft() -> ProductDraft {
        ProductDraft {
            name: "Cotton T-Shirt".to_string(),
            price: Decimal::new(1999, 2),
            category: "Clothing".to_string(),
            image: "https://example.com/shirt.jpg".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_product_json_layout() {
        let product = Product::from_draft(ProductId::new(3), sample_draft());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["price"], serde_json::json!(19.99));
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_product_parses_stored_record() {
        let raw = r#"{"id":1700000000000,"name":"Desk Lamp","price":34.5,"category":"Home","image":"","description":"Warm light"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();

        assert_eq!(product.id, ProductId::new(1_700_000_000_000));
        assert_eq!(product.price, Decimal::new(345, 1));
        assert_eq!(product.description.as_deref(), Some("Warm light"));
    }

    #[test]
    fn test_draft_ignores_id_field() {
        let raw = r#"{"id":99,"name":"Mug","price":8,"category":"Home","image":"mug.png"}"#;
        let draft: ProductDraft = serde_json::from_str(raw).unwrap();
        assert_eq!(draft.name, "Mug");
        assert_eq!(draft.price, Decimal::new(8, 0));
    }

    #[test]
    fn test_draft_round_trip_through_product() {
        let draft = sample_draft();
        let product = Product::from_draft(ProductId::new(1), draft.clone());
        assert_eq!(product.to_draft(), draft);
    }
}
