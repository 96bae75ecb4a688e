use askama::Template;

/// `GET /catalog`: record counts, or the reason they are unavailable.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    pub item_count: i64,
    pub category_count: i64,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_counts() {
        let html = IndexPage {
            title: "GameLibrary Home",
            item_count: 3,
            category_count: 2,
            error: None,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"<span id="item-count">3</span>"#));
        assert!(html.contains(r#"<span id="category-count">2</span>"#));
    }

    #[test]
    fn shows_error_instead_of_counts() {
        let html = IndexPage {
            title: "GameLibrary Home",
            item_count: 0,
            category_count: 0,
            error: Some("Record counts are unavailable".into()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Error: Record counts are unavailable"));
        assert!(!html.contains("item-count"));
    }
}
