//! Item entity model, DTO and the category join.

use gamelib_core::catalog;
use gamelib_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
///
/// `price` and `stock` are free text ("Free-to-play", "Download only").
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub price: String,
    pub stock: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Item {
    /// Canonical detail page of this item.
    pub fn url(&self) -> String {
        catalog::item_url(self.id)
    }
}

/// Validated, sanitized item fields.
///
/// Used both for inserts and for updates, which replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub price: String,
    pub stock: String,
}

/// An item joined with the category it references.
///
/// The category columns are `None` when the reference dangles.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ItemWithCategory {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: Item,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
}

/// Displayable fields of a resolved category reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

impl CategoryRef {
    pub fn url(&self) -> String {
        catalog::category_url(self.id)
    }
}

impl ItemWithCategory {
    /// The referenced category, if it still exists.
    pub fn category(&self) -> Option<CategoryRef> {
        let name = self.category_name.clone()?;
        Some(CategoryRef {
            id: self.item.category_id,
            name,
            description: self.category_description.clone().unwrap_or_default(),
        })
    }
}
