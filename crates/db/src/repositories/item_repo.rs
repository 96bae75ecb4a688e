//! Repository for the `items` table.

use gamelib_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{Item, ItemInput, ItemWithCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category_id, price, stock, created_at, updated_at";

/// Same columns, qualified for queries joining `categories`.
const QUALIFIED_COLUMNS: &str = "i.id, i.title, i.description, i.category_id, i.price, i.stock, \
     i.created_at, i.updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// List all items ordered by title (byte-wise, ties by id).
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM items ORDER BY title COLLATE \"C\" ASC, id ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item and resolve its category reference.
    ///
    /// A dangling reference still returns the item, with empty category
    /// columns.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ItemWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}, \
                c.name AS category_name, \
                c.description AS category_description \
             FROM items i \
             LEFT JOIN categories c ON c.id = i.category_id \
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, ItemWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the items referencing a category, ordered by title.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items \
             WHERE category_id = $1 \
             ORDER BY title COLLATE \"C\" ASC, id ASC"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new item, returning the created row.
    ///
    /// The category reference is stored as given; it is not checked here.
    pub async fn create(pool: &PgPool, input: &ItemInput) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (title, description, category_id, price, stock) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.price)
            .bind(&input.stock)
            .fetch_one(pool)
            .await
    }

    /// Replace every field of an item.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ItemInput,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET \
                title = $2, \
                description = $3, \
                category_id = $4, \
                price = $5, \
                stock = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.price)
            .bind(&input.stock)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
