//! Admin product form handling.
//!
//! The stores persist whatever they are given. All field checks happen
//! here, before a [`ProductDraft`] ever reaches [`crate::catalog::Catalog`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use shelf_core::{Product, ProductDraft};
use thiserror::Error;

/// Categories offered by the admin form. Not enforced by storage.
pub const ADMIN_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Books"];

/// Largest price the admin form accepts.
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Decimal places the admin form accepts in a price.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// A single invalid form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    EmptyName,
    #[error("Price must be a number")]
    InvalidPrice(String),
    #[error("Price must be greater than zero")]
    NonPositivePrice,
    #[error("Price must not exceed {}", MAX_PRICE)]
    PriceTooLarge,
    #[error("Price can have at most {} decimal places", PRICE_DECIMAL_PLACES)]
    PriceTooPrecise,
    #[error("Category is required")]
    MissingCategory,
    #[error("Image URL is required")]
    MissingImage,
}

/// Every problem found in a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// The individual field errors, in form order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether a specific error was reported.
    #[must_use]
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw text fields as submitted from the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl ProductForm {
    /// Check every field and build a draft ready for the catalog.
    ///
    /// Text fields are trimmed. A blank description becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing every invalid field.
    pub fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyName);
        }

        let price = match Decimal::from_str(self.price.trim()) {
            Ok(price) if price <= Decimal::ZERO => {
                errors.push(ValidationError::NonPositivePrice);
                None
            }
            Ok(price) if price > MAX_PRICE => {
                errors.push(ValidationError::PriceTooLarge);
                None
            }
            Ok(price) if price.normalize().scale() > PRICE_DECIMAL_PLACES => {
                errors.push(ValidationError::PriceTooPrecise);
                None
            }
            Ok(price) => Some(price),
            Err(_) => {
                errors.push(ValidationError::InvalidPrice(self.price.clone()));
                None
            }
        };

        let category = self.category.trim();
        if category.is_empty() {
            errors.push(ValidationError::MissingCategory);
        }

        let image = self.image.trim();
        if image.is_empty() {
            errors.push(ValidationError::MissingImage);
        }

        match price {
            Some(price) if errors.is_empty() => {
                let description = self.description.trim();
                Ok(ProductDraft {
                    name: name.to_string(),
                    price,
                    category: category.to_string(),
                    image: image.to_string(),
                    description: (!description.is_empty()).then(|| description.to_string()),
                })
            }
            _ => Err(ValidationErrors(errors)),
        }
    }

    /// Whether the category is one the admin form offers.
    #[must_use]
    pub fn uses_admin_category(&self) -> bool {
        ADMIN_CATEGORIES.contains(&self.category.trim())
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}
