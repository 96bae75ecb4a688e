//! Request extractors shared by the catalog handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use gamelib_core::types::{parse_db_id, DbId};

use crate::error::AppError;

/// The `{id}` segment of a catalog URL.
///
/// A segment that is not a store identifier cannot name any entity, so it
/// is rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogId(pub DbId);

impl<S> FromRequestParts<S> for CatalogId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::NotFound(err.body_text()))?;

        parse_db_id(&raw)
            .map(CatalogId)
            .ok_or_else(|| AppError::NotFound(format!("No catalog entry with id '{raw}'")))
    }
}
