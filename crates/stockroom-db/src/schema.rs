//! # Schema Bootstrap
//!
//! The store has exactly one table and no schema versions. On every
//! connect the table is created if it is missing; an existing table is
//! reused untouched.
//!
//! ## Process
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ensure_schema()                                    │
//! │                                                                         │
//! │  Database::new                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products table present? ──── yes ───► reuse (legacy files included)   │
//! │       │                                                                 │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products (...)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store ready                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## On-disk contract
//! Column names and order are the only compatibility promise:
//! `ID, Name, Price, Quantity, Units, Descriptions`.
//!
//! New tables use `AUTOINCREMENT` so a deleted id is never handed out
//! again. Tables created by older tools without it keep SQLite's default
//! rowid behavior.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the products table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    ID           INTEGER PRIMARY KEY AUTOINCREMENT,
    Name         TEXT    NOT NULL,
    Price        REAL    NOT NULL,
    Quantity     INTEGER NOT NULL,
    Units        TEXT    NOT NULL,
    Descriptions TEXT    NOT NULL
)
"#;

/// Creates the products table if it does not exist.
///
/// ## Returns
/// `true` when the table was created by this call, `false` when an
/// existing table was found.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    if existing > 0 {
        info!("Products table already exists");
        return Ok(false);
    }

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!("Products table created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = memory_pool().await;

        assert!(ensure_schema(&pool).await.unwrap());
        assert!(!ensure_schema(&pool).await.unwrap());
    }

    #[tokio::test]
    async fn test_columns_in_contract_order() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('products') ORDER BY cid")
                .fetch_all(&pool)
                .await
                .unwrap();

        assert_eq!(
            columns,
            vec!["ID", "Name", "Price", "Quantity", "Units", "Descriptions"]
        );
    }

    #[tokio::test]
    async fn test_legacy_table_is_reused() {
        let pool = memory_pool().await;
        sqlx::query(
            "CREATE TABLE products (ID INTEGER PRIMARY KEY, Name TEXT NOT NULL, \
             Price REAL NOT NULL, Quantity INTEGER NOT NULL, Units TEXT NOT NULL, \
             Descriptions TEXT NOT NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO products VALUES (1, 'Rice', 10.0, 5, 'kg', 'Staple')")
            .execute(&pool)
            .await
            .unwrap();

        assert!(!ensure_schema(&pool).await.unwrap());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
