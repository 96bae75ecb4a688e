//! Route definitions for the `/catalog/category` pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/catalog/category`.
///
/// ```text
/// GET    /                -> list
/// GET    /create          -> create_form
/// POST   /create          -> create
/// GET    /{id}            -> detail
/// GET    /{id}/delete     -> delete_form
/// POST   /{id}/delete     -> delete
/// GET    /{id}/update     -> update_form
/// POST   /{id}/update     -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list))
        .route(
            "/create",
            get(category::create_form).post(category::create),
        )
        .route("/{id}", get(category::detail))
        .route(
            "/{id}/delete",
            get(category::delete_form).post(category::delete),
        )
        .route(
            "/{id}/update",
            get(category::update_form).post(category::update),
        )
}
