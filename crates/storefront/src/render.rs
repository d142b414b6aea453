//! Projection of catalog and cart state into markup.
//!
//! Each `render_*` function is pure: it reads the catalog or a cart snapshot
//! and returns a view model. The askama templates at the bottom of this module
//! turn those view models into HTML fragments, and the full page in
//! [`crate::pages`] includes the same partials.

use askama::Template;
use askama_web::WebTemplate;
use rand::Rng;
use rand::seq::IndexedRandom;

use gadget_bazaar_core::{Cart, CartLine, Catalog, ContactForm, Product, ProductId};

use crate::filters;

/// Number of products shown in the home page's featured grid.
pub const FEATURED_LIMIT: usize = 6;

/// Number of "you might also like" cards on a details page.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Text shown in place of cart lines when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Start shopping now! \u{2728}";

// =============================================================================
// View Models
// =============================================================================

/// A product card in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Cards for the featured and full product grids.
#[derive(Debug, Clone, Default)]
pub struct ProductsView {
    pub featured: Vec<ProductCard>,
    pub all: Vec<ProductCard>,
}

/// Product details page content.
#[derive(Debug, Clone)]
pub struct ProductDetailsView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub recommendations: Vec<ProductCard>,
}

/// One cart line for display.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            unit_price: line.product.price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

/// Cart page content.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Sum of line totals, two decimals, no currency symbol.
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Whether there are no lines to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The empty-state message.
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        EMPTY_CART_MESSAGE
    }
}

/// Contact form state: the values to show and an optional outcome message.
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub form: ContactForm,
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Renderers
// =============================================================================

/// Cards for every product: the first [`FEATURED_LIMIT`] in the featured grid
/// and all of them in the full grid.
#[must_use]
pub fn render_products(catalog: &Catalog) -> ProductsView {
    let all: Vec<ProductCard> = catalog.iter().map(ProductCard::from).collect();
    let featured = all.iter().take(FEATURED_LIMIT).cloned().collect();
    ProductsView { featured, all }
}

/// Up to [`RECOMMENDATION_COUNT`] other products, sampled uniformly without
/// replacement.
pub fn render_recommendations<R: Rng + ?Sized>(
    catalog: &Catalog,
    current: ProductId,
    rng: &mut R,
) -> Vec<ProductCard> {
    let others: Vec<&Product> = catalog.iter().filter(|p| p.id != current).collect();
    others
        .choose_multiple(rng, RECOMMENDATION_COUNT)
        .map(|product| ProductCard::from(*product))
        .collect()
}

/// Details for one product, or `None` if it is not in the catalog.
pub fn render_product_details<R: Rng + ?Sized>(
    catalog: &Catalog,
    id: ProductId,
    rng: &mut R,
) -> Option<ProductDetailsView> {
    let product = catalog.find(id)?;
    Some(ProductDetailsView {
        id: product.id,
        name: product.name.clone(),
        price: product.price.to_string(),
        image: product.image.clone(),
        description: product.description.clone(),
        recommendations: render_recommendations(catalog, id, rng),
    })
}

/// Lines, total, and count for a cart snapshot.
#[must_use]
pub fn render_cart(cart: &Cart) -> CartView {
    CartView {
        items: cart.lines().iter().map(CartItemView::from).collect(),
        total: cart.total().amount_string(),
        item_count: cart.item_count(),
    }
}

// =============================================================================
// Fragment Templates
// =============================================================================

/// Product details fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_details.html")]
pub struct ProductDetailsTemplate {
    pub details: ProductDetailsView,
}

/// Cart lines and total fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Contact form fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_form.html")]
pub struct ContactFormTemplate {
    pub contact: ContactFormView,
}
