use askama::Template;
use gamelib_core::validation::FieldViolation;
use gamelib_db::models::category::Category;
use gamelib_db::models::item::Item;

use crate::forms::CategoryForm;

#[derive(Debug, Template)]
#[template(path = "category_list.html")]
pub struct CategoryListPage {
    pub title: &'static str,
    pub categories: Vec<Category>,
}

#[derive(Debug, Template)]
#[template(path = "category_detail.html")]
pub struct CategoryDetailPage {
    pub title: String,
    pub category: Category,
    pub items: Vec<Item>,
}

/// Create and update form. `category` pre-fills the inputs.
#[derive(Debug, Template)]
#[template(path = "category_form.html")]
pub struct CategoryFormPage {
    pub title: &'static str,
    pub category: CategoryForm,
    pub errors: Vec<FieldViolation>,
}

/// Delete confirmation. A non-empty `items` blocks the delete.
#[derive(Debug, Template)]
#[template(path = "category_delete.html")]
pub struct CategoryDeletePage {
    pub title: &'static str,
    pub category: Category,
    pub items: Vec<Item>,
}
