use askama::Template;
use gamelib_core::types::DbId;
use gamelib_core::validation::FieldViolation;
use gamelib_db::models::category::Category;
use gamelib_db::models::item::{CategoryRef, Item, ItemWithCategory};

use crate::forms::ItemForm;

#[derive(Debug, Template)]
#[template(path = "item_list.html")]
pub struct ItemListPage {
    pub title: &'static str,
    pub items: Vec<Item>,
}

/// Item detail. `category` is `None` when the reference dangles.
#[derive(Debug, Template)]
#[template(path = "item_detail.html")]
pub struct ItemDetailPage {
    pub title: String,
    pub item: Item,
    pub category: Option<CategoryRef>,
}

impl ItemDetailPage {
    pub fn new(joined: ItemWithCategory) -> Self {
        let category = joined.category();
        Self {
            title: joined.item.title.clone(),
            item: joined.item,
            category,
        }
    }
}

/// One entry of the category selector on the item form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: DbId,
    pub name: String,
    pub selected: bool,
}

impl CategoryOption {
    /// Build selector entries, marking the one whose id equals `selected`.
    pub fn list(categories: Vec<Category>, selected: &str) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| Self {
                selected: category.id.to_string() == selected,
                id: category.id,
                name: category.name,
            })
            .collect()
    }
}

/// Create and update form. `item` pre-fills the inputs.
#[derive(Debug, Template)]
#[template(path = "item_form.html")]
pub struct ItemFormPage {
    pub title: &'static str,
    pub item: ItemForm,
    pub categories: Vec<CategoryOption>,
    pub errors: Vec<FieldViolation>,
}

impl ItemFormPage {
    pub fn new(
        title: &'static str,
        item: ItemForm,
        categories: Vec<Category>,
        errors: Vec<FieldViolation>,
    ) -> Self {
        let categories = CategoryOption::list(categories, &item.category);
        Self {
            title,
            item,
            categories,
            errors,
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "item_delete.html")]
pub struct ItemDeletePage {
    pub title: &'static str,
    pub item: Item,
}
