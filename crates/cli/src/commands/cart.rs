//! Cart commands.

use shelf_core::ProductId;
use shelf_storefront::Shop;
use shelf_storefront::storage::KeyValueStore;
use tracing::{info, warn};

use super::CommandError;

/// Show cart lines, subtotal and badge count.
pub fn show<S: KeyValueStore>(shop: &Shop<S>) {
    let view = shop.cart_view();
    if view.is_empty() {
        info!("Your cart is empty.");
        return;
    }

    for item in &view.items {
        info!(
            "#{:<14} {:<32} {:>4} x {:>10} = {:>10}",
            item.product_id, item.name, item.quantity, item.price, item.line_price
        );
    }
    info!("Subtotal: {} ({} item(s))", view.subtotal, view.item_count);
}

/// Add one unit of a catalog product.
///
/// # Errors
///
/// Returns `CommandError` if the write fails.
pub fn add<S: KeyValueStore>(shop: &Shop<S>, product_id: ProductId) -> Result<(), CommandError> {
    let Some(product) = shop.catalog().get_by_id(product_id) else {
        warn!("Product #{product_id} not found.");
        return Ok(());
    };

    let cart = shop.cart();
    cart.add(product_id)?;
    info!("Added {} to cart ({} item(s))", product.name, cart.count());
    Ok(())
}

/// Set the quantity of a cart entry. Values below 1 are raised to 1.
///
/// # Errors
///
/// Returns `CommandError` if the write fails.
pub fn set_quantity<S: KeyValueStore>(
    shop: &Shop<S>,
    product_id: ProductId,
    quantity: i64,
) -> Result<(), CommandError> {
    let cart = shop.cart();
    if !cart.get_all().iter().any(|e| e.product_id == product_id) {
        warn!("Product #{product_id} is not in the cart.");
        return Ok(());
    }

    cart.set_quantity(product_id, quantity)?;
    info!("Cart now holds {} item(s)", cart.count());
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns `CommandError` if the write fails.
pub fn remove<S: KeyValueStore>(shop: &Shop<S>, product_id: ProductId) -> Result<(), CommandError> {
    let cart = shop.cart();
    cart.remove(product_id)?;
    info!("Cart now holds {} item(s)", cart.count());
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CommandError` if the write fails.
pub fn clear<S: KeyValueStore>(shop: &Shop<S>) -> Result<(), CommandError> {
    shop.cart().clear()?;
    info!("Cart cleared.");
    Ok(())
}
