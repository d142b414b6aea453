//! Persisted visitor cart.
//!
//! The [`CartStore`] owns the single visitor cart. It is loaded once from
//! key/value storage at startup and every mutation writes the full cart back
//! before returning. A mutation is applied to a copy first, so if the write
//! fails the in-memory cart still matches what is stored.

use std::sync::{Arc, Mutex, PoisonError};

use gadget_bazaar_core::{Cart, Catalog, ProductId, QuantityChange};

use crate::storage::{KeyValueStore, StorageError};

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Confirmation returned by [`CartStore::add_to_cart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    /// Name of the product that was added.
    pub product_name: String,
    /// The product's quantity after the add.
    pub quantity: u32,
}

impl AddedToCart {
    /// Notification shown to the visitor.
    #[must_use]
    pub fn notification(&self) -> String {
        format!("{} added to cart!", self.product_name)
    }
}

/// The visitor cart plus its storage backend.
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// A missing value, an unreadable backend, or a value that fails to parse
    /// all yield an empty cart. Failures are logged, never returned.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let cart = match storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Cart>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Stored cart failed to parse, starting empty");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored cart, starting empty");
                Cart::new()
            }
        };

        tracing::debug!(lines = cart.len(), items = cart.item_count(), "Cart loaded");

        Self {
            cart: Mutex::new(cart),
            storage,
        }
    }

    /// A copy of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Total quantity across all lines (the badge count).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.lock().item_count()
    }

    /// Add one unit of a catalog product.
    ///
    /// Returns `Ok(None)` without touching storage when the product is not in
    /// the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the updated cart cannot be persisted.
    pub fn add_to_cart(
        &self,
        catalog: &Catalog,
        id: ProductId,
    ) -> Result<Option<AddedToCart>, StorageError> {
        let Some(product) = catalog.find(id) else {
            tracing::debug!(product_id = %id, "Ignoring add for unknown product");
            return Ok(None);
        };

        let quantity = self.mutate(|cart| Some(cart.add(product)))?.unwrap_or(1);
        tracing::info!(product_id = %id, quantity, "Added to cart");

        Ok(Some(AddedToCart {
            product_name: product.name.clone(),
            quantity,
        }))
    }

    /// Change a line's quantity by `delta`, removing it at zero or below.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the updated cart cannot be persisted.
    pub fn update_quantity(
        &self,
        id: ProductId,
        delta: i32,
    ) -> Result<QuantityChange, StorageError> {
        let change = self
            .mutate(|cart| match cart.update_quantity(id, delta) {
                QuantityChange::Absent => None,
                change => Some(change),
            })?
            .unwrap_or(QuantityChange::Absent);

        tracing::info!(product_id = %id, delta, ?change, "Cart quantity updated");
        Ok(change)
    }

    /// Remove a product's line. Removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the updated cart cannot be persisted.
    pub fn remove_from_cart(&self, id: ProductId) -> Result<bool, StorageError> {
        let removed = self.mutate(|cart| cart.remove(id).then_some(()))?.is_some();
        tracing::info!(product_id = %id, removed, "Removed from cart");
        Ok(removed)
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the empty cart cannot be persisted.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.mutate(|cart| {
            cart.clear();
            Some(())
        })?;
        tracing::info!("Cart cleared");
        Ok(())
    }

    /// Write the current cart to storage.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the cart cannot be persisted.
    pub fn flush(&self) -> Result<(), StorageError> {
        let cart = self.lock();
        self.persist(&cart)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to a copy of the cart. If it reports a change (`Some`), the
    /// copy is persisted and then committed.
    fn mutate<T>(&self, f: impl FnOnce(&mut Cart) -> Option<T>) -> Result<Option<T>, StorageError> {
        let mut cart = self.lock();
        let mut next = cart.clone();

        let Some(outcome) = f(&mut next) else {
            return Ok(None);
        };

        self.persist(&next)?;
        *cart = next;
        Ok(Some(outcome))
    }

    fn persist(&self, cart: &Cart) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(cart).map_err(|source| StorageError::Encode {
            key: CART_STORAGE_KEY.to_owned(),
            source,
        })?;
        self.storage.set_item(CART_STORAGE_KEY, &encoded)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gadget_bazaar_core::Price;

    use super::*;
    use crate::catalog;
    use crate::storage::{FileStore, MemoryStore};

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "read-only".into(),
                source: std::io::Error::other("read-only"),
            })
        }
    }

    fn memory_store() -> (Arc<MemoryStore>, CartStore) {
        let storage = Arc::new(MemoryStore::new());
        let store = CartStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let (storage, store) = memory_store();
        let result = store
            .add_to_cart(&catalog::builtin(), ProductId::new(404))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.cart_count(), 0);
        assert!(storage.get_item(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let (storage, store) = memory_store();
        let added = store
            .add_to_cart(&catalog::builtin(), ProductId::new(1))
            .unwrap()
            .unwrap();

        assert_eq!(added.quantity, 1);
        assert_eq!(added.notification(), "Wireless Headphones added to cart!");

        let stored: Cart =
            serde_json::from_str(&storage.get_item(CART_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, store.snapshot());
    }

    #[test]
    fn test_scenario_add_twice_then_another() {
        let (_storage, store) = memory_store();
        let catalog = catalog::builtin();

        store.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        store.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        store.add_to_cart(&catalog, ProductId::new(2)).unwrap();

        let cart = store.snapshot();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 2);
        assert_eq!(cart.line(ProductId::new(2)).unwrap().quantity, 1);
        assert_eq!(cart.total(), Price::from_units(1150));
        assert_eq!(store.cart_count(), 3);
    }

    #[test]
    fn test_update_quantity_removes_at_zero() {
        let (storage, store) = memory_store();
        store
            .add_to_cart(&catalog::builtin(), ProductId::new(3))
            .unwrap();

        assert_eq!(
            store.update_quantity(ProductId::new(3), 1).unwrap(),
            QuantityChange::Updated(2)
        );
        assert_eq!(
            store.update_quantity(ProductId::new(3), -2).unwrap(),
            QuantityChange::Removed
        );
        assert_eq!(
            storage.get_item(CART_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_update_absent_line_does_not_write() {
        let (storage, store) = memory_store();
        assert_eq!(
            store.update_quantity(ProductId::new(1), 1).unwrap(),
            QuantityChange::Absent
        );
        assert!(storage.get_item(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_storage, store) = memory_store();
        store
            .add_to_cart(&catalog::builtin(), ProductId::new(2))
            .unwrap();

        assert!(store.remove_from_cart(ProductId::new(2)).unwrap());
        assert!(!store.remove_from_cart(ProductId::new(2)).unwrap());
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_unparseable_value_loads_empty() {
        let storage = Arc::new(MemoryStore::with_item(CART_STORAGE_KEY, "{oops"));
        let store = CartStore::load(storage);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_unchanged() {
        let store = CartStore::load(Arc::new(ReadOnlyStore));
        let result = store.add_to_cart(&catalog::builtin(), ProductId::new(1));

        assert!(result.is_err());
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_reload_from_file_yields_equal_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        let catalog = catalog::builtin();

        let store = CartStore::load(Arc::new(FileStore::new(&path)));
        store.add_to_cart(&catalog, ProductId::new(4)).unwrap();
        store.add_to_cart(&catalog, ProductId::new(7)).unwrap();
        store.add_to_cart(&catalog, ProductId::new(4)).unwrap();
        store.update_quantity(ProductId::new(7), 2).unwrap();

        let reloaded = CartStore::load(Arc::new(FileStore::new(&path)));
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[test]
    fn test_clear_and_flush() {
        let (storage, store) = memory_store();
        store
            .add_to_cart(&catalog::builtin(), ProductId::new(5))
            .unwrap();
        store.clear().unwrap();
        store.flush().unwrap();

        assert_eq!(
            storage.get_item(CART_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }
}
