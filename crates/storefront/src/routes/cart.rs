//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Adding swaps in the returned count badge directly; quantity changes and
//! removals fire `cart-updated` so the badge refreshes itself.

use axum::{
    Form,
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use gadget_bazaar_core::ProductId;

use super::{HX_TRIGGER, with_trigger};
use crate::error::{Result, add_breadcrumb};
use crate::pages::{Page, ShopPage};
use crate::render::{CartCountTemplate, CartItemsTemplate, render_cart};
use crate::state::AppState;

/// Event fired after cart lines change on the cart page.
pub const CART_UPDATED: &str = "cart-updated";

/// Add to cart and remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct CartProductForm {
    pub product_id: ProductId,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub product_id: ProductId,
    pub delta: i32,
}

/// Render the cart lines fragment with the `cart-updated` trigger.
fn cart_items_response(state: &AppState) -> Response {
    let cart = render_cart(&state.cart().snapshot());
    (
        [(HX_TRIGGER, HeaderValue::from_static(CART_UPDATED))],
        CartItemsTemplate { cart },
    )
        .into_response()
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> ShopPage {
    state.pages().show_page(Page::Cart)
}

/// Add one of a product to the cart (HTMX).
///
/// Returns the refreshed count badge, which replaces the old one, plus a
/// `notify` event. Unknown products leave the cart untouched and fire no
/// events.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CartProductForm>,
) -> Result<Response> {
    let added = state.cart().add_to_cart(state.catalog(), form.product_id)?;
    let badge = CartCountTemplate {
        count: state.cart().cart_count(),
    }
    .into_response();

    let Some(added) = added else {
        return Ok(badge);
    };

    let notification = added.notification();
    add_breadcrumb("cart", &notification);
    Ok(with_trigger(
        badge,
        &json!({ "notify": notification }),
    ))
}

/// Change a cart line's quantity by a delta (HTMX).
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateQuantityForm>,
) -> Result<Response> {
    state.cart().update_quantity(form.product_id, form.delta)?;
    Ok(cart_items_response(&state))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<CartProductForm>,
) -> Result<Response> {
    state.cart().remove_from_cart(form.product_id)?;
    Ok(cart_items_response(&state))
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> CartCountTemplate {
    CartCountTemplate {
        count: state.cart().cart_count(),
    }
}
