//! HTTP tests that run without a database.
//!
//! The router is built over a pool pointing at a refused port. Requests
//! answered before any query runs behave normally; the rest exercise the
//! storage failure paths.

mod common;

use axum::http::StatusCode;
use common::{body_text, build_offline_app, get, location, post_form};

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_redirects_to_catalog() {
    let response = get(build_offline_app(), "/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog");
}

#[tokio::test]
async fn unknown_route_renders_404_page() {
    let response = get(build_offline_app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("404 Not Found"));
    assert!(body.contains("No page at /this-route-does-not-exist"));
}

#[tokio::test]
async fn unknown_catalog_route_renders_404_page() {
    let response = get(build_offline_app(), "/catalog/publisher").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_offline_app(), "/nowhere").await;
    assert!(
        response.headers().get("x-request-id").is_some(),
        "Response must contain an x-request-id header"
    );
}

#[tokio::test]
async fn malformed_ids_are_not_found() {
    for uri in [
        "/catalog/category/abc",
        "/catalog/category/-1/update",
        "/catalog/item/63f1c2a9e4b0",
        "/catalog/item/0/delete",
    ] {
        let response = get(build_offline_app(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Category forms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_create_form_is_empty() {
    let response = get(build_offline_app(), "/catalog/category/create").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("<h1>Create Category</h1>"));
    assert!(body.contains(r#"name="name""#));
    assert!(!body.contains(r#"class="errors""#));
}

#[tokio::test]
async fn category_create_with_empty_name_rerenders_form() {
    let response = post_form(
        build_offline_app(),
        "/catalog/category/create",
        &[("name", ""), ("description", "x")],
    )
    .await;

    // Re-rendered, not redirected: nothing was persisted.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"<li data-field="name">Category name must be specified.</li>"#));
    assert!(body.contains(">x</textarea>"));
}

#[tokio::test]
async fn category_create_with_missing_fields_reports_both() {
    let response = post_form(build_offline_app(), "/catalog/category/create", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let name_pos = body.find(r#"data-field="name""#).expect("name violation");
    let description_pos = body
        .find(r#"data-field="description""#)
        .expect("description violation");
    assert!(name_pos < description_pos);
}

#[tokio::test]
async fn rejected_input_is_prefilled_escaped() {
    let response = post_form(
        build_offline_app(),
        "/catalog/category/create",
        &[("name", "<i>Indie</i>"), ("description", "  ")],
    )
    .await;

    let body = body_text(response).await;
    assert!(body.contains(r#"value="&lt;i&gt;Indie&lt;&#x2F;i&gt;""#));
    assert!(!body.contains("<i>Indie</i>"));
    assert!(body.contains(r#"data-field="description""#));
}

#[tokio::test]
async fn category_update_with_invalid_input_rerenders_form() {
    let response = post_form(
        build_offline_app(),
        "/catalog/category/5/update",
        &[("name", "Still here"), ("description", "")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h1>Update Category</h1>"));
    assert!(body.contains(r#"value="Still here""#));
    assert!(body.contains("Category description must be specified."));
}

// ---------------------------------------------------------------------------
// Unreachable database
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_shows_count_error_when_database_is_down() {
    let response = get(build_offline_app(), "/catalog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Error: Record counts are currently unavailable."));
    assert!(!body.contains(r#"id="item-count""#));
}

#[tokio::test]
async fn store_failure_renders_generic_500_page() {
    for uri in [
        "/catalog/category",
        "/catalog/category/1",
        "/catalog/item",
        "/catalog/item/1",
        "/catalog/item/create",
    ] {
        let response = get(build_offline_app(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{uri}"
        );

        let body = body_text(response).await;
        assert!(body.contains("An internal error occurred"), "{uri}");
        assert!(!body.contains("pool timed out"), "{uri}");
    }
}

#[tokio::test]
async fn valid_category_submit_fails_with_500_when_database_is_down() {
    let response = post_form(
        build_offline_app(),
        "/catalog/category/create",
        &[("name", "Puzzle"), ("description", "Brain teasers")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
