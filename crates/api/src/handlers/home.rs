//! Handler for the catalog home page.

use axum::extract::State;
use axum::response::{Html, Redirect};
use gamelib_core::catalog::CATALOG_ROOT;
use gamelib_db::repositories::{CategoryRepo, ItemRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::home::IndexPage;
use crate::views::render;

/// GET /
pub async fn root() -> Redirect {
    Redirect::to(CATALOG_ROOT)
}

/// GET /catalog
///
/// Both counts are fetched concurrently. A store failure is shown on the
/// page rather than failing the request.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let (items, categories) = tokio::join!(
        ItemRepo::count(&state.pool),
        CategoryRepo::count(&state.pool),
    );

    let page = match (items, categories) {
        (Ok(item_count), Ok(category_count)) => IndexPage {
            title: "GameLibrary Home",
            item_count,
            category_count,
            error: None,
        },
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(error = %err, "Failed to count catalog records");
            IndexPage {
                title: "GameLibrary Home",
                item_count: 0,
                category_count: 0,
                error: Some("Record counts are currently unavailable.".to_string()),
            }
        }
    };

    render(&page)
}
