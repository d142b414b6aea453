//! Single-document page controller.
//!
//! The storefront is one HTML document with a section per page. Showing a
//! page marks its section active (every other section inactive) and renders
//! the content that page needs. There is no history stack: each request names
//! the page to show.

use core::fmt;
use core::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use rand::Rng;

use gadget_bazaar_core::{Catalog, ProductId};

use crate::filters;
use crate::render::{
    self, CartView, ContactFormView, ProductDetailsView, ProductsView,
};
use crate::services::cart::CartStore;

/// A named page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Products,
    ProductDetails,
    Cart,
    Contact,
}

impl Page {
    /// Every page, in document order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Products,
        Self::ProductDetails,
        Self::Cart,
        Self::Contact,
    ];

    /// The section's element ID.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home-page",
            Self::Products => "products-page",
            Self::ProductDetails => "product-details-page",
            Self::Cart => "cart-page",
            Self::Contact => "contact-page",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string names no page section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_owned()))
    }
}

/// The full storefront document with one active section.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct ShopPage {
    pub active: Page,
    pub products: ProductsView,
    pub details: Option<ProductDetailsView>,
    pub cart: Option<CartView>,
    pub cart_count: u32,
    pub contact: ContactFormView,
}

impl ShopPage {
    /// CSS classes for a section: `page`, plus `active` for the shown one.
    #[must_use]
    pub fn section_class(&self, id: &str) -> &'static str {
        if self.active.id() == id {
            "page active"
        } else {
            "page"
        }
    }
}

/// Chooses the active page and renders what it needs.
#[derive(Debug, Clone, Copy)]
pub struct PageController<'a> {
    catalog: &'a Catalog,
    cart: &'a CartStore,
}

impl<'a> PageController<'a> {
    /// Create a controller over the shop's catalog and cart.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, cart: &'a CartStore) -> Self {
        Self { catalog, cart }
    }

    /// Show `page`.
    ///
    /// The product grids are always rendered. The cart lines are rendered
    /// only when the cart page is shown; the badge count always is.
    #[must_use]
    pub fn show_page(&self, page: Page) -> ShopPage {
        let cart = (page == Page::Cart).then(|| render::render_cart(&self.cart.snapshot()));

        ShopPage {
            active: page,
            products: render::render_products(self.catalog),
            details: None,
            cart,
            cart_count: self.cart.cart_count(),
            contact: ContactFormView::default(),
        }
    }

    /// Render a product's details and show the details page.
    ///
    /// Returns `None` when the product is not in the catalog.
    pub fn show_product_details<R: Rng + ?Sized>(
        &self,
        id: ProductId,
        rng: &mut R,
    ) -> Option<ShopPage> {
        let details = render::render_product_details(self.catalog, id, rng)?;

        let mut page = self.show_page(Page::ProductDetails);
        page.details = Some(details);
        Some(page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog;
    use crate::storage::MemoryStore;

    #[test]
    fn test_page_ids_roundtrip() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>().unwrap(), page);
        }
        assert!("checkout-page".parse::<Page>().is_err());
    }

    #[test]
    fn test_show_page_activates_exactly_one_section() {
        let catalog = catalog::builtin();
        let store = CartStore::load(Arc::new(MemoryStore::new()));
        let controller = PageController::new(&catalog, &store);

        let html = controller.show_page(Page::Contact).render().unwrap();
        assert_eq!(html.matches("class=\"page active\"").count(), 1);
        assert!(html.contains("id=\"contact-page\" class=\"page active\""));
        assert!(html.contains("id=\"home-page\" class=\"page\""));
    }

    #[test]
    fn test_cart_lines_only_rendered_on_cart_page() {
        let catalog = catalog::builtin();
        let store = CartStore::load(Arc::new(MemoryStore::new()));
        store.add_to_cart(&catalog, ProductId::new(2)).unwrap();
        let controller = PageController::new(&catalog, &store);

        let home = controller.show_page(Page::Home);
        assert!(home.cart.is_none());
        assert_eq!(home.cart_count, 1);

        let cart = controller.show_page(Page::Cart);
        let view = cart.cart.as_ref().unwrap();
        assert_eq!(view.total, "350.00");
        assert!(cart.render().unwrap().contains("Smart Watch"));
    }

    #[test]
    fn test_home_renders_both_grids() {
        let catalog = catalog::builtin();
        let store = CartStore::load(Arc::new(MemoryStore::new()));
        let html = PageController::new(&catalog, &store)
            .show_page(Page::Home)
            .render()
            .unwrap();

        // 6 featured + 8 in the full grid.
        assert_eq!(html.matches("class=\"product-card\"").count(), 14);
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("₹400.00"));
    }

    #[test]
    fn test_product_details_page() {
        let catalog = catalog::builtin();
        let store = CartStore::load(Arc::new(MemoryStore::new()));
        let controller = PageController::new(&catalog, &store);
        let mut rng = StdRng::seed_from_u64(11);

        let page = controller
            .show_product_details(ProductId::new(6), &mut rng)
            .unwrap();
        assert_eq!(page.active, Page::ProductDetails);
        assert_eq!(page.details.as_ref().unwrap().name, "Ergonomic Keyboard");

        assert!(
            controller
                .show_product_details(ProductId::new(42), &mut rng)
                .is_none()
        );
    }
}
