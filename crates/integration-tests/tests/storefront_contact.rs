//! Contact form validation tests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use gadget_bazaar_integration_tests::TestContext;

const SUCCESS: &str = "Message sent successfully! Thank you for your feedback. \u{1f60a}";

#[tokio::test]
async fn test_valid_submission_clears_form() {
    let ctx = TestContext::new();
    let response = ctx
        .post_form(
            "/contact",
            "name=Asha&email=asha%40example.com&subject=Order&message=Where+is+it%3F",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.notification().as_deref(), Some(SUCCESS));
    assert!(response.trigger().unwrap().is_ascii());
    assert!(response.body.contains("class=\"form-message success\""));
    assert!(response.body.contains("value=\"\""));
    assert!(!response.body.contains("Asha"));
}

#[tokio::test]
async fn test_missing_subject_keeps_values() {
    let ctx = TestContext::new();
    let response = ctx
        .post_form(
            "/contact",
            "name=Asha&email=asha%40example.com&subject=&message=Hello",
        )
        .await;

    assert_eq!(
        response.notification().as_deref(),
        Some("Please fill out all fields.")
    );
    assert!(response.body.contains("role=\"alert\""));
    assert!(!response.body.contains("form-message success"));
    assert!(response.body.contains("value=\"Asha\""));
    assert!(response.body.contains("value=\"asha@example.com\""));
    assert!(response.body.contains(">Hello</textarea>"));
}

#[tokio::test]
async fn test_whitespace_only_field_is_accepted() {
    let ctx = TestContext::new();
    let response = ctx
        .post_form(
            "/contact",
            "name=+++&email=asha%40example.com&subject=Hi&message=Hello",
        )
        .await;

    assert_eq!(response.notification().as_deref(), Some(SUCCESS));
}

#[tokio::test]
async fn test_padded_email_is_invalid() {
    let ctx = TestContext::new();
    let response = ctx
        .post_form(
            "/contact",
            "name=Asha&email=+a%40b.co&subject=Hi&message=Hello",
        )
        .await;

    assert_eq!(
        response.notification().as_deref(),
        Some("Please enter a valid email address.")
    );
    assert!(response.body.contains("value=\" a@b.co\""));
}

#[tokio::test]
async fn test_invalid_email_is_distinct_failure() {
    let ctx = TestContext::new();
    let response = ctx
        .post_form(
            "/contact",
            "name=Asha&email=not-an-email&subject=Hi&message=Hello",
        )
        .await;

    assert_eq!(
        response.notification().as_deref(),
        Some("Please enter a valid email address.")
    );
    assert!(response.body.contains("value=\"not-an-email\""));
}

#[tokio::test]
async fn test_absent_fields_count_as_missing() {
    let ctx = TestContext::new();
    let response = ctx.post_form("/contact", "name=Asha").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.notification().as_deref(),
        Some("Please fill out all fields.")
    );
}
