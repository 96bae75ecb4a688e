//! Catalog constants, canonical URLs and cross-entity rules.

use std::borrow::Cow;

use validator::ValidationError;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Path prefix every catalog page is mounted under.
pub const CATALOG_ROOT: &str = "/catalog";

/// Maximum length of a category name in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Maximum length of an item title in characters.
pub const MAX_ITEM_TITLE_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Canonical URLs
// ---------------------------------------------------------------------------

/// Canonical detail page of a category.
pub fn category_url(id: DbId) -> String {
    format!("{CATALOG_ROOT}/category/{id}")
}

/// Canonical detail page of an item.
pub fn item_url(id: DbId) -> String {
    format!("{CATALOG_ROOT}/item/{id}")
}

/// The category list page.
pub fn category_list_url() -> String {
    format!("{CATALOG_ROOT}/category")
}

/// The item list page.
pub fn item_list_url() -> String {
    format!("{CATALOG_ROOT}/item")
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

fn check_max_chars(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

/// Category names are capped at [`MAX_CATEGORY_NAME_LENGTH`] characters.
pub fn check_category_name_length(name: &str) -> Result<(), ValidationError> {
    check_max_chars(
        name,
        MAX_CATEGORY_NAME_LENGTH,
        "Category name must be at most 100 characters.",
    )
}

/// Item titles are capped at [`MAX_ITEM_TITLE_LENGTH`] characters.
pub fn check_item_title_length(title: &str) -> Result<(), ValidationError> {
    check_max_chars(
        title,
        MAX_ITEM_TITLE_LENGTH,
        "Title must be at most 100 characters.",
    )
}

// ---------------------------------------------------------------------------
// Referential rule
// ---------------------------------------------------------------------------

/// A category may only be deleted once no item references it.
///
/// The check runs against a snapshot of the referencing items; it is not
/// atomic with the delete that follows.
pub fn ensure_category_unreferenced(
    category_id: DbId,
    referencing_items: usize,
) -> Result<(), CoreError> {
    if referencing_items == 0 {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Category {category_id} is still referenced by {referencing_items} item(s)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_urls_live_under_catalog_root() {
        assert_eq!(category_url(7), "/catalog/category/7");
        assert_eq!(item_url(12), "/catalog/item/12");
        assert_eq!(category_list_url(), "/catalog/category");
        assert_eq!(item_list_url(), "/catalog/item");
    }

    #[test]
    fn name_length_limit_counts_characters() {
        assert!(check_category_name_length(&"a".repeat(100)).is_ok());
        assert!(check_category_name_length(&"a".repeat(101)).is_err());
        // Multi-byte characters count once each.
        assert!(check_category_name_length(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn title_length_error_carries_message() {
        let err = check_item_title_length(&"x".repeat(150)).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Title must be at most 100 characters.")
        );
    }

    #[test]
    fn unreferenced_category_may_be_deleted() {
        assert!(ensure_category_unreferenced(1, 0).is_ok());
    }

    #[test]
    fn referenced_category_is_a_conflict() {
        let err = ensure_category_unreferenced(3, 2).unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
        assert!(err.to_string().contains("2 item(s)"));
    }
}
