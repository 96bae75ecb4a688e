//! Handlers for the `/catalog/category` pages.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use gamelib_core::catalog::{self, ensure_category_unreferenced};
use gamelib_core::error::CoreError;
use gamelib_core::types::DbId;
use gamelib_core::validation::Checked;
use gamelib_db::models::category::Category;
use gamelib_db::models::item::Item;
use gamelib_db::repositories::{CategoryRepo, ItemRepo};
use gamelib_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::CatalogId;
use crate::forms::CategoryForm;
use crate::state::AppState;
use crate::views::category::{
    CategoryDeletePage, CategoryDetailPage, CategoryFormPage, CategoryListPage,
};
use crate::views::render;

const CREATE_TITLE: &str = "Create Category";
const UPDATE_TITLE: &str = "Update Category";
const DELETE_TITLE: &str = "Delete Category";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// Fetch a category and the items referencing it concurrently.
async fn category_with_items(
    pool: &DbPool,
    id: DbId,
) -> Result<(Option<Category>, Vec<Item>), sqlx::Error> {
    tokio::try_join!(
        CategoryRepo::find_by_id(pool, id),
        ItemRepo::list_by_category(pool, id),
    )
}

/// GET /catalog/category
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    render(&CategoryListPage {
        title: "Category List",
        categories,
    })
}

/// GET /catalog/category/{id}
pub async fn detail(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Html<String>> {
    let (category, items) = category_with_items(&state.pool, id).await?;
    let category = category.ok_or_else(|| not_found(id))?;

    render(&CategoryDetailPage {
        title: category.name.clone(),
        category,
        items,
    })
}

/// GET /catalog/category/create
pub async fn create_form() -> AppResult<Html<String>> {
    render(&CategoryFormPage {
        title: CREATE_TITLE,
        category: CategoryForm::default(),
        errors: Vec::new(),
    })
}

/// POST /catalog/category/create
///
/// Invalid input re-renders the form; nothing is written.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> AppResult<Response> {
    let Checked {
        value: form,
        violations,
    } = form.check();

    if !violations.is_empty() {
        let page = CategoryFormPage {
            title: CREATE_TITLE,
            category: form,
            errors: violations,
        };
        return Ok(render(&page)?.into_response());
    }

    let category = CategoryRepo::create(&state.pool, &form.to_input()).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok(Redirect::to(&category.url()).into_response())
}

/// GET /catalog/category/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Html<String>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    render(&CategoryFormPage {
        title: UPDATE_TITLE,
        category: CategoryForm::from_category(&category),
        errors: Vec::new(),
    })
}

/// POST /catalog/category/{id}/update
///
/// Invalid input re-renders the form at the same URL, so the id is kept.
pub async fn update(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
    Form(form): Form<CategoryForm>,
) -> AppResult<Response> {
    let Checked {
        value: form,
        violations,
    } = form.check();

    if !violations.is_empty() {
        let page = CategoryFormPage {
            title: UPDATE_TITLE,
            category: form,
            errors: violations,
        };
        return Ok(render(&page)?.into_response());
    }

    let category = CategoryRepo::update(&state.pool, id, &form.to_input())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(category_id = category.id, "Category updated");

    Ok(Redirect::to(&category.url()).into_response())
}

/// GET /catalog/category/{id}/delete
///
/// A category that no longer exists redirects to the list.
pub async fn delete_form(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Response> {
    let (category, items) = category_with_items(&state.pool, id).await?;
    let Some(category) = category else {
        return Ok(Redirect::to(&catalog::category_list_url()).into_response());
    };

    let page = CategoryDeletePage {
        title: DELETE_TITLE,
        category,
        items,
    };
    Ok(render(&page)?.into_response())
}

/// POST /catalog/category/{id}/delete
///
/// Refused while any item references the category: the confirmation page is
/// shown again with the blocking items. The check and the delete are two
/// separate statements, so an item created in between is not seen.
pub async fn delete(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Response> {
    let (category, items) = category_with_items(&state.pool, id).await?;
    let Some(category) = category else {
        return Ok(Redirect::to(&catalog::category_list_url()).into_response());
    };

    if let Err(conflict) = ensure_category_unreferenced(id, items.len()) {
        tracing::info!(category_id = id, %conflict, "Category delete blocked");
        let page = CategoryDeletePage {
            title: DELETE_TITLE,
            category,
            items,
        };
        return Ok(render(&page)?.into_response());
    }

    CategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(category_id = id, "Category deleted");

    Ok(Redirect::to(&catalog::category_list_url()).into_response())
}
