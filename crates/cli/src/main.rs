//! Gadget Bazaar CLI - Catalog and cart management tools.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! bazaar-cli catalog list
//!
//! # Inspect and edit the persisted cart
//! bazaar-cli cart show
//! bazaar-cli cart add 3
//! bazaar-cli cart update 3 -1
//! bazaar-cli cart remove 3
//! bazaar-cli cart clear
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Print every product with its price
//! - `cart` - Operate on the cart stored at `BAZAAR_STORAGE`

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use gadget_bazaar_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "bazaar-cli")]
#[command(author, version, about = "Gadget Bazaar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List every product
    List,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and total
    Show,
    /// Add one of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Change a line's quantity by a delta
    Update {
        /// Product ID
        id: ProductId,

        /// Quantity change, e.g. 1 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// Remove a product's line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Remove every line
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::cart::CartCommandError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
        },
        Commands::Cart { action } => {
            let store = commands::cart::open_store()?;
            match action {
                CartAction::Show => commands::cart::show(&store),
                CartAction::Add { id } => {
                    commands::cart::add(&store, id)?;
                }
                CartAction::Update { id, delta } => {
                    commands::cart::update(&store, id, delta)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&store, id)?,
                CartAction::Clear => commands::cart::clear(&store)?,
            }
        }
    }
    Ok(())
}
