//! Handlers for the `/catalog/item` pages.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use gamelib_core::catalog;
use gamelib_core::error::CoreError;
use gamelib_core::types::DbId;
use gamelib_core::validation::{Checked, FieldViolation};
use gamelib_db::repositories::{CategoryRepo, ItemRepo};

use crate::error::{AppError, AppResult};
use crate::extract::CatalogId;
use crate::forms::ItemForm;
use crate::state::AppState;
use crate::views::item::{ItemDeletePage, ItemDetailPage, ItemFormPage, ItemListPage};
use crate::views::render;

const CREATE_TITLE: &str = "Create Item";
const UPDATE_TITLE: &str = "Update Item";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

/// Re-render the item form with the sanitized input and its violations.
async fn form_with_errors(
    state: &AppState,
    title: &'static str,
    form: ItemForm,
    violations: Vec<FieldViolation>,
) -> AppResult<Response> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let page = ItemFormPage::new(title, form, categories, violations);
    Ok(render(&page)?.into_response())
}

/// GET /catalog/item
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let items = ItemRepo::list(&state.pool).await?;
    render(&ItemListPage {
        title: "Game List",
        items,
    })
}

/// GET /catalog/item/{id}
///
/// The page still renders when the referenced category is gone.
pub async fn detail(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Html<String>> {
    let joined = ItemRepo::find_with_category(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if joined.category_name.is_none() {
        tracing::warn!(
            item_id = id,
            category_id = joined.item.category_id,
            "Item references a missing category"
        );
    }

    render(&ItemDetailPage::new(joined))
}

/// GET /catalog/item/create
pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    render(&ItemFormPage::new(
        CREATE_TITLE,
        ItemForm::default(),
        categories,
        Vec::new(),
    ))
}

/// POST /catalog/item/create
///
/// Invalid input re-renders the form; nothing is written.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> AppResult<Response> {
    let Checked {
        value: form,
        violations,
    } = form.check();

    let input = match form.to_input() {
        Some(input) if violations.is_empty() => input,
        _ => return form_with_errors(&state, CREATE_TITLE, form, violations).await,
    };

    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(
        item_id = item.id,
        category_id = item.category_id,
        title = %item.title,
        "Item created"
    );

    Ok(Redirect::to(&item.url()).into_response())
}

/// GET /catalog/item/{id}/update
///
/// The item and the category choices are fetched concurrently.
pub async fn update_form(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Html<String>> {
    let (item, categories) = tokio::try_join!(
        ItemRepo::find_by_id(&state.pool, id),
        CategoryRepo::list(&state.pool),
    )?;
    let item = item.ok_or_else(|| not_found(id))?;

    render(&ItemFormPage::new(
        UPDATE_TITLE,
        ItemForm::from_item(&item),
        categories,
        Vec::new(),
    ))
}

/// POST /catalog/item/{id}/update
pub async fn update(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
    Form(form): Form<ItemForm>,
) -> AppResult<Response> {
    let Checked {
        value: form,
        violations,
    } = form.check();

    let input = match form.to_input() {
        Some(input) if violations.is_empty() => input,
        _ => return form_with_errors(&state, UPDATE_TITLE, form, violations).await,
    };

    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(item_id = item.id, category_id = item.category_id, "Item updated");

    Ok(Redirect::to(&item.url()).into_response())
}

/// GET /catalog/item/{id}/delete
///
/// An item that no longer exists redirects to the list.
pub async fn delete_form(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Response> {
    let Some(item) = ItemRepo::find_by_id(&state.pool, id).await? else {
        return Ok(Redirect::to(&catalog::item_list_url()).into_response());
    };

    let page = ItemDeletePage {
        title: "Delete Item",
        item,
    };
    Ok(render(&page)?.into_response())
}

/// POST /catalog/item/{id}/delete
///
/// Items have no dependants, so the delete is unconditional.
pub async fn delete(
    State(state): State<AppState>,
    CatalogId(id): CatalogId,
) -> AppResult<Redirect> {
    if ItemRepo::delete(&state.pool, id).await? {
        tracing::info!(item_id = id, "Item deleted");
    }
    Ok(Redirect::to(&catalog::item_list_url()))
}
