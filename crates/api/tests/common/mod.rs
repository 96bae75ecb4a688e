#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gamelib_api::config::ServerConfig;
use gamelib_api::router::build_app_router;
use gamelib_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://localhost/gamelib_test".to_string(),
        db_max_connections: 5,
        db_acquire_timeout_secs: 1,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router, with all middleware layers, over the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Build the application over a pool whose server is unreachable.
///
/// Requests answered before any query runs (static forms, validation
/// failures, malformed ids, unknown routes) behave normally. Any query fails
/// with `PoolTimedOut` once the one-second acquire timeout expires, well
/// before the request timeout.
pub fn build_offline_app() -> Router {
    let config = test_config();
    let pool = gamelib_db::pool_options(
        config.db_max_connections,
        Duration::from_secs(config.db_acquire_timeout_secs),
    )
    .connect_lazy("postgres://gamelib@127.0.0.1:1/gamelib_unreachable")
    .expect("lazy pool from a well-formed URL");
    build_test_app(pool)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Trailing id of a canonical URL such as `/catalog/item/12`.
pub fn id_from_url(url: &str) -> i64 {
    url.rsplit('/').next().unwrap().parse().unwrap()
}
