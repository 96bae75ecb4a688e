//! Domain logic shared by the GameLibrary catalog crates.
//!
//! Nothing in here touches the database: identifier types, the domain error
//! enum, catalog constants and the form validation machinery.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
