//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/{id}          - Product detail (unknown ids show the listing)
//! GET  /products/{id}/details  - Product detail fragment (404 for unknown ids)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count badge, triggers notify)
//! POST /cart/update            - Change quantity by delta (returns cart_items fragment, triggers cart-updated)
//! POST /cart/remove            - Remove line (returns cart_items fragment, triggers cart-updated)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Contact
//! GET  /contact                - Contact page
//! POST /contact                - Validate submission (returns contact_form fragment)
//! ```

pub mod cart;
pub mod contact;
pub mod home;
pub mod products;

use std::fmt::Write as _;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    response::Response,
    routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// HTMX response header that fires client-side events.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/details", get(products::details_fragment))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Contact form
        .route("/contact", get(contact::show).post(contact::submit))
}

/// Attach an `HX-Trigger` header carrying `events` to a response.
///
/// Header values must be visible ASCII, so non-ASCII characters in the JSON
/// are written as `\uXXXX` escapes.
pub fn with_trigger(mut response: Response, events: &serde_json::Value) -> Response {
    let json = escape_non_ascii(&events.to_string());
    match HeaderValue::from_str(&json) {
        Ok(value) => {
            response.headers_mut().insert(HX_TRIGGER, value);
        }
        Err(e) => tracing::warn!(error = %e, "Dropping unencodable HX-Trigger header"),
    }
    response
}

fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0_u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}
