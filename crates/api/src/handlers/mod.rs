//! Request handlers for the catalog pages.
//!
//! Each submodule provides the async handlers for one entity type. Handlers
//! delegate to the repositories in `gamelib_db`, render a page from
//! [`crate::views`] or redirect, and map errors via [`crate::error::AppError`].

pub mod category;
pub mod home;
pub mod item;
