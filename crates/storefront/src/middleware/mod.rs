//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fill in the span field, echo the header)
//!
//! Cart fragments additionally get `Cache-Control: no-store` in
//! [`crate::routes::cart_routes`].

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
