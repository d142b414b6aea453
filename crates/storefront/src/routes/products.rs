//! Product route handlers.

use axum::extract::{Path, State};
use tracing::instrument;

use gadget_bazaar_core::ProductId;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::pages::{Page, ShopPage};
use crate::render::{ProductDetailsTemplate, render_product_details};
use crate::state::AppState;

/// Display the full product listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ShopPage {
    state.pages().show_page(Page::Products)
}

/// Display a product's details.
///
/// An unknown product ID leaves the visitor on the product listing.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<ProductId>) -> ShopPage {
    add_breadcrumb("navigation", &format!("Viewed product {id}"));

    let pages = state.pages();
    pages
        .show_product_details(id, &mut rand::rng())
        .unwrap_or_else(|| {
            tracing::debug!(product_id = %id, "Unknown product, showing listing");
            pages.show_page(Page::Products)
        })
}

/// Product details fragment (for HTMX).
///
/// Recommendations are re-sampled on every request.
#[instrument(skip(state))]
pub async fn details_fragment(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<ProductDetailsTemplate> {
    let details = render_product_details(state.catalog(), id, &mut rand::rng())
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(ProductDetailsTemplate { details })
}
