//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. A missing row is reported
//! as `Ok(None)` or `Ok(false)`, never as an error.

pub mod category_repo;
pub mod item_repo;

pub use category_repo::CategoryRepo;
pub use item_repo::ItemRepo;
