//! Page navigation tests.
//!
//! Every page is one document with exactly one active section.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use gadget_bazaar_integration_tests::TestContext;

fn active_section(body: &str) -> Option<&str> {
    let marker = "\" class=\"page active\"";
    let end = body.find(marker)?;
    let start = body.get(..end)?.rfind("id=\"")? + 4;
    body.get(start..end)
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_each_route_activates_its_section() {
    let ctx = TestContext::new();

    for (uri, section) in [
        ("/", "home-page"),
        ("/products", "products-page"),
        ("/products/3", "product-details-page"),
        ("/cart", "cart-page"),
        ("/contact", "contact-page"),
    ] {
        let response = ctx.get(uri).await;
        assert_eq!(response.status, StatusCode::OK, "{uri}");
        assert_eq!(
            response.body.matches("class=\"page active\"").count(),
            1,
            "{uri}"
        );
        assert_eq!(active_section(&response.body), Some(section), "{uri}");
    }
}

#[tokio::test]
async fn test_home_shows_featured_and_full_grids() {
    let ctx = TestContext::new();
    let body = ctx.get("/").await.body;

    assert!(body.contains("id=\"featured-products\""));
    assert!(body.contains("id=\"all-products\""));
    assert_eq!(body.matches("class=\"product-card\"").count(), 14);
    assert!(body.contains("\u{20b9}3000.00"));
}

#[tokio::test]
async fn test_product_details_with_recommendations() {
    let ctx = TestContext::new();
    let body = ctx.get("/products/5").await.body;

    assert!(body.contains("id=\"product-details\""));
    assert!(body.contains("You might also like..."));
    assert!(body.contains("\u{20b9}459.00"));

    // Three recommendation cards, none of them the product itself.
    let recommendations = body
        .split("class=\"you-might-like\"")
        .nth(1)
        .unwrap_or_default();
    assert_eq!(recommendations.matches("class=\"product-card\"").count(), 3);
    assert!(!recommendations.contains("href=\"/products/5\""));
}

#[tokio::test]
async fn test_unknown_product_shows_listing() {
    let ctx = TestContext::new();
    let response = ctx.get("/products/42").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(active_section(&response.body), Some("products-page"));
    assert!(!response.body.contains("You might also like..."));
}

#[tokio::test]
async fn test_non_numeric_product_id_is_rejected() {
    let ctx = TestContext::new();
    let response = ctx.get("/products/keyboard").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let ctx = TestContext::new();
    let response = ctx.get("/").await;

    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_product_details_fragment() {
    let ctx = TestContext::new();

    let response = ctx.get("/products/2/details").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.starts_with("<div id=\"product-details\""));
    assert!(!response.body.contains("<html"));

    let response = ctx.get("/products/42/details").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not found: product 42");
}
