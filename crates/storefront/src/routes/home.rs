//! Home page route handler.

use axum::extract::State;
use tracing::instrument;

use crate::pages::{Page, ShopPage};
use crate::state::AppState;

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> ShopPage {
    state.pages().show_page(Page::Home)
}
