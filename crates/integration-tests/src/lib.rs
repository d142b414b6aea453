//! Integration tests for Gadget Bazaar.
//!
//! Requests are driven through the full storefront router in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gadget-bazaar-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Page navigation and rendering
//! - `storefront_cart` - Cart fragments, triggers and persistence
//! - `storefront_contact` - Contact form validation

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use tower::ServiceExt;

use gadget_bazaar_storefront::{
    app, catalog,
    config::StorefrontConfig,
    routes::HX_TRIGGER,
    state::AppState,
    storage::{KeyValueStore, MemoryStore, StorageBackend},
};

/// A storefront router plus the state behind it.
pub struct TestContext {
    pub state: AppState,
    router: Router,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A storefront with an empty in-memory cart.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStore::new()))
    }

    /// A storefront whose cart is loaded from `storage`.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn KeyValueStore>) -> Self {
        let config = StorefrontConfig {
            storage: StorageBackend::Memory,
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, catalog::builtin(), storage);
        Self {
            router: app(state.clone()),
            state,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Send a form-encoded POST request, as htmx does.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("HX-Request", "true")
            .body(Body::from(body.to_owned()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The raw `HX-Trigger` header, if any.
    #[must_use]
    pub fn trigger(&self) -> Option<&str> {
        self.headers.get(HX_TRIGGER).and_then(|v| v.to_str().ok())
    }

    /// The `HX-Trigger` header parsed as a JSON event object.
    #[must_use]
    pub fn trigger_events(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.trigger()?).ok()
    }

    /// The `notify` event's message, if one was fired.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        self.trigger_events()?
            .get("notify")?
            .as_str()
            .map(str::to_owned)
    }
}
