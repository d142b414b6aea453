//! Cart commands.
//!
//! # Environment Variables
//!
//! - `BAZAAR_STORAGE` - `memory`, or a path to the cart storage file
//!   (default: data/local-storage.json)

use thiserror::Error;

use gadget_bazaar_core::{Cart, ProductId, QuantityChange};
use gadget_bazaar_storefront::catalog;
use gadget_bazaar_storefront::config::{ConfigError, StorefrontConfig};
use gadget_bazaar_storefront::services::{AddedToCart, CartStore};
use gadget_bazaar_storefront::storage::StorageError;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The cart could not be persisted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// No such product in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The product has no line in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),
}

/// Load the cart from the configured storage.
pub fn open_store() -> Result<CartStore, CartCommandError> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(storage = ?config.storage, "Opening cart storage");
    Ok(CartStore::load(config.storage.open()))
}

/// Cart lines plus the total, one string per line.
pub fn summary(cart: &Cart) -> Vec<String> {
    if cart.is_empty() {
        return vec!["Cart is empty".to_owned()];
    }

    let mut lines: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| {
            let id = line.id().to_string();
            format!(
                "{id:>3}  {:<28} {} x {} = {}",
                line.product.name,
                line.quantity,
                line.product.price,
                line.line_total()
            )
        })
        .collect();
    lines.push(format!("{} items, total {}", cart.item_count(), cart.total()));
    lines
}

/// Print the cart.
pub fn show(store: &CartStore) {
    for line in summary(&store.snapshot()) {
        tracing::info!("{line}");
    }
}

/// Add one of a product.
pub fn add(store: &CartStore, id: ProductId) -> Result<AddedToCart, CartCommandError> {
    let added = store
        .add_to_cart(&catalog::builtin(), id)?
        .ok_or(CartCommandError::UnknownProduct(id))?;

    tracing::info!("{} (quantity {})", added.notification(), added.quantity);
    Ok(added)
}

/// Change a line's quantity by `delta`.
pub fn update(
    store: &CartStore,
    id: ProductId,
    delta: i32,
) -> Result<QuantityChange, CartCommandError> {
    let change = store.update_quantity(id, delta)?;
    match change {
        QuantityChange::Absent => return Err(CartCommandError::NotInCart(id)),
        QuantityChange::Updated(quantity) => {
            tracing::info!("Product {id} quantity is now {quantity}");
        }
        QuantityChange::Removed => tracing::info!("Product {id} removed from cart"),
    }
    Ok(change)
}

/// Remove a product's line.
pub fn remove(store: &CartStore, id: ProductId) -> Result<(), CartCommandError> {
    if !store.remove_from_cart(id)? {
        return Err(CartCommandError::NotInCart(id));
    }
    tracing::info!("Product {id} removed from cart");
    Ok(())
}

/// Remove every line.
pub fn clear(store: &CartStore) -> Result<(), CartCommandError> {
    store.clear()?;
    tracing::info!("Cart cleared");
    Ok(())
}
