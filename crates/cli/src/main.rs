//! Shelf CLI - Browse the catalog, manage products and the cart.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally filtered and searched
//! shelf products list --category Clothing --search shirt
//!
//! # Add a product (validated before it is stored)
//! shelf products add --name "Desk Lamp" --price 34.50 --category Home --image lamp.jpg
//!
//! # Put a product in the cart and show the cart
//! shelf cart add 3
//! shelf cart show
//! ```
//!
//! # Commands
//!
//! - `products` - List, show, add, update and delete products
//! - `cart` - Add, set quantity, remove, clear and show the cart
//!
//! The data file defaults to `SHELF_DATA_FILE` (or `shelf-data.json`) and can
//! be overridden with `--data-file`. If the file cannot be used, read-only
//! commands show the empty state and commands that write exit with an error.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shelf_core::ProductId;
use shelf_storefront::Shop;
use shelf_storefront::admin::ProductForm;
use shelf_storefront::config::StoreConfig;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(version, about = "Shelf storefront CLI")]
struct Cli {
    /// Path of the JSON data file (overrides `SHELF_DATA_FILE`)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage catalog products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Only show this category ("All" shows everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one product
    Show { id: ProductId },
    /// List the distinct categories
    Categories,
    /// Add a new product
    Add(ProductFields),
    /// Replace an existing product's fields
    Update {
        id: ProductId,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete { id: ProductId },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Set {
        product_id: ProductId,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
    /// Empty the cart
    Clear,
}

/// Admin form fields, validated before anything is stored.
#[derive(Args)]
struct ProductFields {
    /// Product name
    #[arg(short, long, default_value = "")]
    name: String,

    /// Price (e.g. 19.99)
    #[arg(short, long, default_value = "")]
    price: String,

    /// Category
    #[arg(short, long, default_value = "")]
    category: String,

    /// Image URL
    #[arg(short, long, default_value = "")]
    image: String,

    /// Optional description
    #[arg(short, long, default_value = "")]
    description: String,
}

impl Commands {
    /// Whether the command only reads from the store.
    const fn is_read_only(&self) -> bool {
        match self {
            Self::Products { action } => matches!(
                action,
                ProductAction::List { .. } | ProductAction::Show { .. } | ProductAction::Categories
            ),
            Self::Cart { action } => matches!(action, CartAction::Show),
        }
    }
}

impl From<ProductFields> for ProductForm {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            price: fields.price,
            category: fields.category,
            image: fields.image,
            description: fields.description,
        }
    }
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shelf=info,shelf_storefront=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match &e {
            CommandError::Store(store_err) => {
                tracing::error!(error = %store_err, "{}", store_err.user_message());
            }
            _ => tracing::error!("Command failed: {e}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = StoreConfig::from_env()?;
    if let Some(path) = cli.data_file {
        config = config.with_data_file(path);
    }

    let shop = Shop::open(config);
    commands::prepare(&shop, cli.command.is_read_only())?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List { category, search } => {
                commands::products::list(&shop, category.as_deref(), search.as_deref());
            }
            ProductAction::Show { id } => commands::products::show(&shop, id),
            ProductAction::Categories => commands::products::categories(&shop),
            ProductAction::Add(fields) => commands::products::add(&shop, &fields.into())?,
            ProductAction::Update { id, fields } => {
                commands::products::update(&shop, id, &fields.into())?;
            }
            ProductAction::Delete { id } => commands::products::delete(&shop, id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&shop),
            CartAction::Add { product_id } => commands::cart::add(&shop, product_id)?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&shop, product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&shop, product_id)?,
            CartAction::Clear => commands::cart::clear(&shop)?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_commands() {
        for args in [
            ["shelf", "products", "list"].as_slice(),
            &["shelf", "products", "show", "1"],
            &["shelf", "products", "categories"],
            &["shelf", "cart", "show"],
        ] {
            assert!(Cli::try_parse_from(args).unwrap().command.is_read_only());
        }
    }

    #[test]
    fn test_writing_commands() {
        for args in [
            ["shelf", "products", "delete", "1"].as_slice(),
            &["shelf", "cart", "add", "3"],
            &["shelf", "cart", "set", "3", "-1"],
            &["shelf", "cart", "clear"],
        ] {
            assert!(!Cli::try_parse_from(args).unwrap().command.is_read_only());
        }
    }
}
