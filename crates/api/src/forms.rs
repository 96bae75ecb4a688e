//! Typed bodies of the catalog's `application/x-www-form-urlencoded` POSTs.
//!
//! Missing fields deserialize as empty strings and are then reported by
//! validation. [`CategoryForm::check`] and [`ItemForm::check`] always return
//! the trimmed and escaped values, valid or not, so a rejected form can be
//! shown again pre-filled.

use gamelib_core::catalog::{check_category_name_length, check_item_title_length};
use gamelib_core::types::parse_db_id;
use gamelib_core::validation::sanitize::{escape_html, trim};
use gamelib_core::validation::{violations_of, Checked};
use gamelib_db::models::category::{Category, CategoryInput};
use gamelib_db::models::item::{Item, ItemInput};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Length limits apply to the escaped text, since that is what gets stored.
fn sanitize(raw: &str) -> String {
    escape_html(&trim(raw))
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

const CATEGORY_FIELDS: &[&str] = &["name", "description"];

/// Body of the category create and update forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct CategoryForm {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Category name must be specified."),
        custom(function = "check_category_name_length")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Category description must be specified."))]
    pub description: String,
}

impl CategoryForm {
    /// Pre-fill values for editing an existing category.
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }

    /// Trim and escape the submitted values, then validate what would be stored.
    pub fn check(self) -> Checked<Self> {
        let value = Self {
            name: sanitize(&self.name),
            description: sanitize(&self.description),
        };
        let violations = violations_of(&value, CATEGORY_FIELDS);
        Checked { value, violations }
    }

    /// Fields to persist. Only meaningful on a checked, valid form.
    pub fn to_input(&self) -> CategoryInput {
        CategoryInput {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

const ITEM_FIELDS: &[&str] = &["title", "description", "category", "price", "stock"];

/// Body of the item create and update forms.
///
/// `category` carries the selected category id; `price` and `stock` are
/// free text and only need to be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ItemForm {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Title must be specified."),
        custom(function = "check_item_title_length")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Description must be specified."))]
    pub description: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Category must be specified."),
        custom(function = "check_category_reference")
    )]
    pub category: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Price must be specified."))]
    pub price: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Stock must be specified."))]
    pub stock: String,
}

/// A non-empty category field must hold a store identifier.
fn check_category_reference(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() || parse_db_id(category).is_some() {
        return Ok(());
    }
    Err(ValidationError::new("category").with_message("Category is not valid.".into()))
}

impl ItemForm {
    /// Pre-fill values for editing an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category_id.to_string(),
            price: item.price.clone(),
            stock: item.stock.clone(),
        }
    }

    /// Trim and escape the submitted values, then validate what would be stored.
    pub fn check(self) -> Checked<Self> {
        let value = Self {
            title: sanitize(&self.title),
            description: sanitize(&self.description),
            category: sanitize(&self.category),
            price: sanitize(&self.price),
            stock: sanitize(&self.stock),
        };
        let violations = violations_of(&value, ITEM_FIELDS);
        Checked { value, violations }
    }

    /// Fields to persist, or `None` when `category` is not an identifier.
    /// A valid checked form always yields `Some`.
    pub fn to_input(&self) -> Option<ItemInput> {
        Some(ItemInput {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: parse_db_id(&self.category)?,
            price: self.price.clone(),
            stock: self.stock.clone(),
        })
    }
}
