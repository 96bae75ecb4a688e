//! Row models and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - An input DTO carrying sanitized field values for inserts and full
//!   replacement updates

pub mod category;
pub mod item;
