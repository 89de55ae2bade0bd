//! Shopcart CLI - drive a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! shopcart show
//!
//! # Add one unit of product 1
//! shopcart add 1
//!
//! # Set product 1 to exactly 3 units
//! shopcart set-amount 1 3
//!
//! # Remove product 1 entirely
//! shopcart remove 1
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPCART_INVENTORY_URL` - Base URL of the inventory service
//! - `SHOPCART_STORAGE_PATH` - Cart file path (default: shopcart.json)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shopcart::{CartConfig, CartStore, InventoryClient, JsonFileStorage, TracingNotifier};
use shopcart_core::ProductId;

#[derive(Parser)]
#[command(name = "shopcart")]
#[command(author, version, about = "Shopcart command-line cart driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current cart contents
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product id
        product_id: i64,
    },
    /// Remove a product from the cart entirely
    Remove {
        /// Product id
        product_id: i64,
    },
    /// Set a product's quantity to an exact value
    SetAmount {
        /// Product id
        product_id: i64,
        /// Target quantity
        amount: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let inventory = InventoryClient::new(&config)?;
    let storage = JsonFileStorage::new(&config.storage_path);
    let mut cart = CartStore::open(inventory, storage, TracingNotifier)?;

    match cli.command {
        Commands::Show => {}
        Commands::Add { product_id } => {
            cart.add_product(ProductId::new(product_id)).await?;
        }
        Commands::Remove { product_id } => {
            cart.remove_product(ProductId::new(product_id))?;
        }
        Commands::SetAmount { product_id, amount } => {
            cart.update_amount(ProductId::new(product_id), amount).await?;
        }
    }

    print_cart(cart.items());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_cart(items: &[shopcart_core::CartItem]) {
    if items.is_empty() {
        println!("cart is empty");
        return;
    }

    for item in items {
        println!(
            "{:>4}  {:<32} x{:<3} @ {}",
            item.id, item.title, item.amount, item.price
        );
    }
}
