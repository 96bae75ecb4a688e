//! Server-rendered pages.
//!
//! Each page is an `askama` template struct whose fields are the variables
//! the template reads. Stored catalog text is escaped when it is written
//! (see `gamelib_core::validation::sanitize`), so templates emit it with the
//! `safe` filter; anything else goes through askama's own escaping.

pub mod category;
pub mod home;
pub mod item;

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;

use crate::error::AppResult;

/// Render a page into an HTML response body.
pub fn render<T: Template>(page: &T) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}

/// Generic failure page.
#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: &'static str,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message,
        }
    }
}
