//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)        I/O / CSV error (export)            │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (front end) ← Message + exit code                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Categories
//! - `NotFound` - update target missing
//! - storage faults - the database file could not be read or written
//!   (see [`DbError::is_storage_fault`])
//! - `ExportFailed` - export destination could not be written

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - `update` names an id that does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Creating the products table failed.
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Disk full, read-only file, corrupted database
    /// - NOT NULL violation (a caller skipped validation)
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction could not be started or committed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The connection was busy for longer than the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Export destination could not be written.
    ///
    /// The destination is left as it was before the export began.
    #[error("Export to {path} failed: {reason}")]
    ExportFailed { path: String, reason: String },

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates an ExportFailed error.
    pub fn export(path: impl Into<String>, reason: impl ToString) -> Self {
        DbError::ExportFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for faults of the backing database itself.
    ///
    /// These are never retried; the caller aborts the operation in flight.
    pub fn is_storage_fault(&self) -> bool {
        !matches!(
            self,
            DbError::NotFound { .. } | DbError::ExportFailed { .. }
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product not found: 42");
        assert!(!err.is_storage_fault());
    }

    #[test]
    fn test_storage_fault_classification() {
        assert!(DbError::QueryFailed("disk I/O error".into()).is_storage_fault());
        assert!(DbError::PoolExhausted.is_storage_fault());
        assert!(DbError::from(sqlx::Error::PoolClosed).is_storage_fault());
        assert!(!DbError::export("/tmp/x.csv", "denied").is_storage_fault());
    }
}
