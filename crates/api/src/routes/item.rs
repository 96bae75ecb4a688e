//! Route definitions for the `/catalog/item` pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/catalog/item`.
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
        .route("/", get(item::list))
        .route("/create", get(item::create_form).post(item::create))
        .route("/{id}", get(item::detail))
        .route("/{id}/delete", get(item::delete_form).post(item::delete))
        .route("/{id}/update", get(item::update_form).post(item::update))
}
