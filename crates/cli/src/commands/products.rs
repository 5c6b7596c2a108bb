//! Catalog listing and admin product commands.

use shelf_core::ProductId;
use shelf_storefront::Shop;
use shelf_storefront::admin::{ADMIN_CATEGORIES, ProductForm};
use shelf_storefront::storage::KeyValueStore;
use shelf_storefront::views::ProductCard;
use tracing::{info, warn};

use super::CommandError;

fn print_card(card: &ProductCard) {
    info!(
        "#{:<14} {:<32} {:>10}  [{}]",
        card.id, card.name, card.price, card.category
    );
}

/// List products matching an optional category and search query.
pub fn list<S: KeyValueStore>(shop: &Shop<S>, category: Option<&str>, search: Option<&str>) {
    let view = shop.catalog_view(category, search);
    if view.is_empty() {
        info!("No products found.");
        return;
    }

    for card in &view.products {
        print_card(card);
    }
    info!("{} product(s)", view.products.len());
}

/// Show every field of one product.
pub fn show<S: KeyValueStore>(shop: &Shop<S>, id: ProductId) {
    let Some(product) = shop.catalog().get_by_id(id) else {
        warn!("Product #{id} not found.");
        return;
    };

    let card = ProductCard::from(&product);
    info!("#{} {}", card.id, card.name);
    info!("  Price:    {}", card.price);
    info!("  Category: {}", card.category);
    info!("  Image:    {}", card.image_url);
    if !card.description.is_empty() {
        info!("  {}", card.description);
    }
}

/// List the distinct categories, then the ones the admin form offers.
pub fn categories<S: KeyValueStore>(shop: &Shop<S>) {
    for category in shop.catalog().list_categories() {
        info!("{category}");
    }
    info!("Admin categories: {}", ADMIN_CATEGORIES.join(", "));
}

fn note_category(form: &ProductForm) {
    if !form.uses_admin_category() {
        info!(
            "Category '{}' is not one of the admin categories ({})",
            form.category.trim(),
            ADMIN_CATEGORIES.join(", ")
        );
    }
}

/// Validate the form and add a product.
///
/// # Errors
///
/// Returns `CommandError` if validation or the write fails.
pub fn add<S: KeyValueStore>(shop: &Shop<S>, form: &ProductForm) -> Result<(), CommandError> {
    let draft = form.validate()?;
    note_category(form);
    let product = shop.catalog().add(draft)?;
    info!("Added product #{} ({})", product.id, product.name);
    Ok(())
}

/// Validate the form and replace a product's fields.
///
/// # Errors
///
/// Returns `CommandError` if validation or the write fails.
pub fn update<S: KeyValueStore>(
    shop: &Shop<S>,
    id: ProductId,
    form: &ProductForm,
) -> Result<(), CommandError> {
    let draft = form.validate()?;
    note_category(form);
    match shop.catalog().update(id, draft)? {
        Some(product) => info!("Updated product #{} ({})", product.id, product.name),
        None => warn!("Product #{id} not found."),
    }
    Ok(())
}

/// Delete a product.
///
/// # Errors
///
/// Returns `CommandError` if the write fails.
pub fn delete<S: KeyValueStore>(shop: &Shop<S>, id: ProductId) -> Result<(), CommandError> {
    if shop.catalog().delete(id)? {
        info!("Deleted product #{id}");
    } else {
        warn!("Product #{id} not found.");
    }
    Ok(())
}
