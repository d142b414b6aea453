//! Contact form route handlers.
//!
//! Submissions are validated and acknowledged; nothing is sent anywhere.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::instrument;

use gadget_bazaar_core::ContactForm;

use super::with_trigger;
use crate::pages::{Page, ShopPage};
use crate::render::{ContactFormTemplate, ContactFormView};
use crate::state::AppState;

/// Shown after a valid submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! Thank you for your feedback. \u{1f60a}";

/// Display the contact page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> ShopPage {
    state.pages().show_page(Page::Contact)
}

/// Validate a contact submission (HTMX).
///
/// On failure the entered values are kept so the visitor can correct them.
/// On success the form is cleared.
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Form(form): Form<ContactForm>) -> Response {
    let (contact, notification) = match form.validate() {
        Ok(message) => {
            tracing::info!(
                name = %message.name,
                email = %message.email,
                subject = %message.subject,
                "Contact message received"
            );
            (
                ContactFormView {
                    success: Some(SUCCESS_MESSAGE.to_string()),
                    ..ContactFormView::default()
                },
                SUCCESS_MESSAGE,
            )
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected contact submission");
            let notification = e.user_message();
            (
                ContactFormView {
                    form,
                    error: Some(notification.to_string()),
                    success: None,
                },
                notification,
            )
        }
    };

    with_trigger(
        ContactFormTemplate { contact }.into_response(),
        &json!({ "notify": notification }),
    )
}
