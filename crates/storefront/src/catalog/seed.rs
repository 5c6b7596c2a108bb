//! Sample products written into an empty catalog.

use rust_decimal::Decimal;
use shelf_core::ProductDraft;

fn draft(name: &str, cents: i64, category: &str, image: &str, description: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        category: category.to_string(),
        image: image.to_string(),
        description: Some(description.to_string()),
    }
}

/// The eight demo products, spanning three categories.
#[must_use]
pub fn sample_products() -> Vec<ProductDraft> {
    vec![
        draft(
            "Wireless Headphones",
            7999,
            "Electronics",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            "Over-ear headphones with active noise cancellation and 30-hour battery life.",
        ),
        draft(
            "Smart Watch",
            19999,
            "Electronics",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400",
            "Fitness tracking, heart-rate monitoring and notifications on your wrist.",
        ),
        draft(
            "Bluetooth Speaker",
            4999,
            "Electronics",
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400",
            "Portable waterproof speaker with deep bass.",
        ),
        draft(
            "Cotton T-Shirt",
            1999,
            "Clothing",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            "Soft 100% cotton crew-neck tee.",
        ),
        draft(
            "Denim Jacket",
            5999,
            "Clothing",
            "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400",
            "Classic fit jacket in washed denim.",
        ),
        draft(
            "Running Shoes",
            8999,
            "Clothing",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            "Lightweight trainers with a cushioned sole.",
        ),
        draft(
            "The Rust Programming Language",
            3999,
            "Books",
            "https://images.unsplash.com/photo-1532012197267-da84d127e765?w=400",
            "The official guide to the Rust language.",
        ),
        draft(
            "Clean Code",
            3499,
            "Books",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=400",
            "A handbook of agile software craftsmanship.",
        ),
    ]
}
