//! Application state shared across handlers.

use std::sync::Arc;

use gadget_bazaar_core::Catalog;

use crate::config::StorefrontConfig;
use crate::pages::PageController;
use crate::services::cart::CartStore;
use crate::storage::KeyValueStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the visitor cart, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
}

impl AppState {
    /// Create application state, loading the cart from `storage`.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Products to sell
    /// * `storage` - Backend holding the persisted cart
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let cart = CartStore::load(storage);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the visitor cart.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// A page controller over this state.
    #[must_use]
    pub fn pages(&self) -> PageController<'_> {
        PageController::new(self.catalog(), self.cart())
    }
}
