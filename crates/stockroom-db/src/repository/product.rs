//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD keyed by the store-assigned integer id
//! - Six-clause keyword search
//! - CSV export of the full table
//!
//! Every operation is a single auto-committed statement, except `delete`,
//! which wraps its statements in one transaction. Nothing is cached: each
//! call reads the table as it is now.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Search Works                                     │
//! │                                                                         │
//! │  User types: "kg"                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchTerm::parse → text "kg", integer None, real None                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE ID = ?1                      -- NULL: never true                │
//! │     OR instr(Name, ?2) > 0          -- case-sensitive contains         │
//! │     OR Price = ?3                   -- NULL: never true                │
//! │     OR Quantity = ?1                                                   │
//! │     OR Units = ?2                                                      │
//! │     OR instr(Descriptions, ?2) > 0                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ 1 | Rice  | 10.0 | 5 | kg | Staple     │ ← MATCH (units)           │
//! │  │ 2 | Beans | 20.0 | 3 | kg | Staple     │ ← MATCH (units)           │
//! │  │ 3 | Salt  |  1.5 | 9 | g  | Seasoning  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  One SELECT, so a row matching several clauses appears once.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::export;
use stockroom_core::{NewProduct, Product, ProductId, SearchTerm};

/// Column list mapped onto [`Product`] field names.
const SELECT_PRODUCTS: &str = r#"
    SELECT
        ID           AS id,
        Name         AS name,
        Price        AS price,
        Quantity     AS quantity,
        Units        AS units,
        Descriptions AS description
    FROM products
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.create(&new_product).await?;
/// let rows = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns its assigned id.
    ///
    /// ## Arguments
    /// * `product` - Validated product without id
    ///
    /// ## Returns
    /// * `Ok(ProductId)` - Id assigned by SQLite, never seen before
    /// * `Err(DbError)` - Storage fault (disk full, read-only, corrupt)
    pub async fn create(&self, product: &NewProduct) -> DbResult<ProductId> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (Name, Price, Quantity, Units, Descriptions)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.units)
        .bind(&product.description)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Lists every product in ascending id order.
    ///
    /// The result is a snapshot; call again after any mutation.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let sql = format!("{SELECT_PRODUCTS} ORDER BY ID");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Searches products by keyword.
    ///
    /// ## Matching
    /// A row matches if any of these hold:
    /// - id equals the keyword's whole-number reading
    /// - name contains the keyword (case-sensitive)
    /// - price equals the keyword's real-number reading
    /// - quantity equals the keyword's whole-number reading
    /// - units equals the keyword exactly
    /// - description contains the keyword (case-sensitive)
    ///
    /// See [`SearchTerm`] for how numeric readings are derived.
    ///
    /// ## Returns
    /// Matching rows in ascending id order; empty when nothing matches.
    pub async fn search(&self, keyword: &str) -> DbResult<Vec<Product>> {
        let term = SearchTerm::parse(keyword);

        debug!(
            keyword = %term.text,
            integer = ?term.integer,
            real = ?term.real,
            "Searching products"
        );

        let sql = format!(
            r#"{SELECT_PRODUCTS}
            WHERE ID = ?1
               OR instr(Name, ?2) > 0
               OR Price = ?3
               OR Quantity = ?1
               OR Units = ?2
               OR instr(Descriptions, ?2) > 0
            ORDER BY ID
            "#
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(term.integer)
            .bind(&term.text)
            .bind(term.real)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let sql = format!("{SELECT_PRODUCTS} WHERE ID = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Overwrites every field of an existing product.
    ///
    /// ## Arguments
    /// * `id` - Product to overwrite (preserved)
    /// * `product` - New field values
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No row has this id; nothing changed
    pub async fn update(&self, id: ProductId, product: &NewProduct) -> DbResult<()> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                Name = ?2,
                Price = ?3,
                Quantity = ?4,
                Units = ?5,
                Descriptions = ?6
            WHERE ID = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.units)
        .bind(&product.description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes every product whose id is listed.
    ///
    /// Ids that do not exist are ignored. All deletions commit together
    /// or not at all.
    ///
    /// ## Returns
    /// Number of rows actually removed.
    pub async fn delete(&self, ids: &[ProductId]) -> DbResult<u64> {
        debug!(?ids, "Deleting products");

        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut removed = 0;
        for id in ids {
            let result = sqlx::query("DELETE FROM products WHERE ID = ?1")
                .bind(*id)
                .execute(&mut *tx)
                .await?;
            removed += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(removed, "Products deleted");
        Ok(removed)
    }

    /// Writes the whole table to a CSV file.
    ///
    /// ## Format
    /// Header `ID,Name,Price,Quantity,Units,Descriptions`, then one row per
    /// product in ascending id order.
    ///
    /// ## Returns
    /// * `Ok(n)` - `n` data rows written
    /// * `Err(DbError::ExportFailed)` - destination left untouched
    /// * `Err(storage fault)` - table could not be read; nothing written
    pub async fn export(&self, destination: &Path) -> DbResult<u64> {
        let products = self.list().await?;
        let destination = destination.to_path_buf();

        let written = tokio::task::spawn_blocking(move || {
            export::write_csv(&destination, &products)
        })
        .await
        .map_err(|e| DbError::Internal(e.to_string()))??;

        info!(rows = written, "Products exported");
        Ok(written)
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::validation::validate_product;

    async fn memory_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_product(name: &str, price: f64, quantity: i64, units: &str, desc: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            quantity,
            units: units.to_string(),
            description: desc.to_string(),
        }
    }

    /// Seeds the two reference records: Rice (id 1) and Beans (id 2).
    async fn seeded_db() -> Database {
        let db = memory_db().await;
        let repo = db.products();
        repo.create(&new_product("Rice", 10.0, 5, "kg", "Staple"))
            .await
            .unwrap();
        repo.create(&new_product("Beans", 20.0, 3, "kg", "Staple"))
            .await
            .unwrap();
        db
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let db = memory_db().await;
        let repo = db.products();
        let rice = validate_product("Rice", "10", "1,000", "kg", "Staple").unwrap();

        let id = repo.create(&rice).await.unwrap();
        let products = repo.list().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0], Product::from_new(id, rice));
    }

    #[tokio::test]
    async fn test_create_returns_unique_ids() {
        let db = memory_db().await;
        let repo = db.products();

        let mut seen = Vec::new();
        for _ in 0..5 {
            let id = repo
                .create(&new_product("Salt", 1.5, 9, "g", ""))
                .await
                .unwrap();
            assert!(!seen.contains(&id));
            seen.push(id);
        }

        assert_eq!(ids(&repo.list().await.unwrap()), seen);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let db = seeded_db().await;
        let repo = db.products();

        repo.delete(&[1, 2]).await.unwrap();
        let id = repo
            .create(&new_product("Salt", 1.5, 9, "g", ""))
            .await
            .unwrap();

        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let db = seeded_db().await;
        let repo = db.products();
        repo.create(&new_product("Apples", 3.0, 12, "pcs", ""))
            .await
            .unwrap();

        assert_eq!(ids(&repo.list().await.unwrap()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let db = seeded_db().await;
        let repo = db.products();
        let changed = new_product("Brown Rice", 12.5, 40, "bag", "");

        repo.update(1, &changed).await.unwrap();

        let product = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(product, Product::from_new(1, changed));
    }

    #[tokio::test]
    async fn test_update_with_same_values_succeeds() {
        let db = seeded_db().await;
        let repo = db.products();

        repo.update(2, &new_product("Beans", 20.0, 3, "kg", "Staple"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let db = seeded_db().await;
        let repo = db.products();
        let before = repo.list().await.unwrap();

        let err = repo
            .update(99, &new_product("Ghost", 1.0, 1, "pcs", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_listed_ids() {
        let db = seeded_db().await;
        let repo = db.products();

        assert_eq!(repo.delete(&[1]).await.unwrap(), 1);
        assert_eq!(ids(&repo.list().await.unwrap()), vec![2]);
    }

    #[tokio::test]
    async fn test_delete_missing_ids_is_noop() {
        let db = seeded_db().await;
        let repo = db.products();
        let before = repo.list().await.unwrap();

        assert_eq!(repo.delete(&[42, 43]).await.unwrap(), 0);
        assert_eq!(repo.delete(&[]).await.unwrap(), 0);
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_mixed_ids() {
        let db = seeded_db().await;
        let repo = db.products();

        assert_eq!(repo.delete(&[2, 77, 2]).await.unwrap(), 1);
        assert_eq!(ids(&repo.list().await.unwrap()), vec![1]);
    }

    #[tokio::test]
    async fn test_search_rice_and_beans() {
        let db = seeded_db().await;
        let repo = db.products();

        assert_eq!(ids(&repo.search("kg").await.unwrap()), vec![1, 2]);
        assert_eq!(ids(&repo.search("Rice").await.unwrap()), vec![1]);
        assert!(repo.search("99").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_numeric_clauses() {
        let db = seeded_db().await;
        let repo = db.products();

        // id 1, and no quantity/price equals 1
        assert_eq!(ids(&repo.search("1").await.unwrap()), vec![1]);
        // price of Beans
        assert_eq!(ids(&repo.search("20").await.unwrap()), vec![2]);
        assert_eq!(ids(&repo.search("20.0").await.unwrap()), vec![2]);
        // quantity of Beans
        assert_eq!(ids(&repo.search("3").await.unwrap()), vec![2]);
        // quantity of Rice
        assert_eq!(ids(&repo.search("5").await.unwrap()), vec![1]);
    }

    #[tokio::test]
    async fn test_search_row_matching_several_clauses_appears_once() {
        let db = memory_db().await;
        let repo = db.products();
        // id 1, quantity 1, units "1", description contains "1"
        repo.create(&new_product("One", 1.0, 1, "1", "size 1"))
            .await
            .unwrap();

        assert_eq!(ids(&repo.search("1").await.unwrap()), vec![1]);
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive_and_literal() {
        let db = seeded_db().await;
        let repo = db.products();
        repo.create(&new_product("Salt", 1.5, 9, "g", "100% pure"))
            .await
            .unwrap();

        assert!(repo.search("rice").await.unwrap().is_empty());
        assert_eq!(ids(&repo.search("%").await.unwrap()), vec![3]);
        assert!(repo.search("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_agrees_with_reference_predicate() {
        let db = seeded_db().await;
        let repo = db.products();
        repo.create(&new_product("Salt", 1.5, 9, "g", "Seasoning"))
            .await
            .unwrap();
        repo.create(&new_product("Sugar", 3.0, 1, "kg", "Sweet stuff"))
            .await
            .unwrap();
        repo.create(&new_product("Tea", 5.0, 20, "box", "Green tea"))
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        let keywords = [
            "", "1", "1.5", "3", "3.0", "5", "20", "kg", "g", "Sa", "tea", "Sweet", " ", "x",
            "Staple", "-1", "9",
        ];

        for keyword in keywords {
            let term = SearchTerm::parse(keyword);
            let expected: Vec<ProductId> = all
                .iter()
                .filter(|p| term.matches(p))
                .map(|p| p.id)
                .collect();

            let found = ids(&repo.search(keyword).await.unwrap());
            assert_eq!(found, expected, "keyword {keyword:?}");
        }
    }

    #[tokio::test]
    async fn test_count() {
        let db = seeded_db().await;
        assert_eq!(db.products().count().await.unwrap(), 2);
    }
}
