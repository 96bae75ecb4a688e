pub mod category;
pub mod health;
pub mod item;

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// Build the `/catalog` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   home (record counts)
///
/// /item                               list
/// /item/create                        create form, create (GET, POST)
/// /item/{id}                          detail
/// /item/{id}/delete                   confirm, delete (GET, POST)
/// /item/{id}/update                   edit form, update (GET, POST)
///
/// /category                           list
/// /category/create                    create form, create (GET, POST)
/// /category/{id}                      detail with its items
/// /category/{id}/delete               confirm, delete (GET, POST)
/// /category/{id}/update               edit form, update (GET, POST)
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/item", item::router())
        .nest("/category", category::router())
}
