//! Category entity model and DTO.

use gamelib_core::catalog;
use gamelib_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    /// Canonical detail page of this category.
    pub fn url(&self) -> String {
        catalog::category_url(self.id)
    }
}

/// Validated, sanitized category fields.
///
/// Used both for inserts and for updates, which replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}
