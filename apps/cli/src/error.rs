//! # Front-end Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Command handler  ──►  Result<Outcome, AppError>                       │
//! │         │                                                               │
//! │         ├── ValidationError ──► VALIDATION_ERROR (store untouched)     │
//! │         │                                                               │
//! │         ├── DbError::NotFound ──► NOT_FOUND                            │
//! │         │                                                               │
//! │         ├── DbError::ExportFailed ──► EXPORT_ERROR                     │
//! │         │                                                               │
//! │         └── storage fault ──► DATABASE_ERROR (detail logged only)      │
//! │                                                                         │
//! │  AppError ──► stderr message + process exit code                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is retried. The caller decides whether to tell the user.

use serde::Serialize;
use std::process::ExitCode;
use stockroom_core::ValidationError;
use stockroom_db::DbError;
use thiserror::Error;

/// Error returned from command handlers.
///
/// ## Serialization
/// With `--json` this is what a script receives on stderr:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Price and Quantity should contain only numbers.",
///   "field": "price"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Rejected form field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id does not exist
    NotFound,

    /// Form input rejected by the validator
    ValidationError,

    /// Database file could not be read or written
    DatabaseError,

    /// Export destination could not be written
    ExportError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub fn exit_status(self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::ValidationError => 3,
            ErrorCode::NotFound => 4,
            ErrorCode::DatabaseError => 5,
            ErrorCode::ExportError => 6,
        }
    }
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Exit code for the process.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code.exit_status())
    }
}

/// Converts validation errors; the message is already user-facing.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError {
            field: Some(err.field().to_string()),
            ..AppError::new(ErrorCode::ValidationError, err.to_string())
        }
    }
}

/// Converts database errors to front-end errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => AppError::not_found(&entity, id),
            DbError::ExportFailed { path, reason } => AppError::new(
                ErrorCode::ExportError,
                format!("Could not export to {}: {}", path, reason),
            ),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema setup failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database could not be initialized")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database is busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err: AppError = ValidationError::invalid_name("R2").into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Name should contain only letters or spaces.");
        assert_eq!(err.field.as_deref(), Some("name"));
    }

    #[test]
    fn test_json_names_rejected_field() {
        let err: AppError = ValidationError::invalid_numeric("quantity", "five").into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field"], "quantity");
    }

    #[test]
    fn test_not_found_keeps_id() {
        let err: AppError = DbError::not_found("Product", 12).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 12");
    }

    #[test]
    fn test_storage_detail_is_hidden() {
        let err: AppError = DbError::QueryFailed("disk I/O error at page 7".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("page 7"));
    }

    #[test]
    fn test_exit_statuses_are_distinct() {
        let codes = [
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::DatabaseError,
            ErrorCode::ExportError,
            ErrorCode::Internal,
        ];
        let mut statuses: Vec<u8> = codes.iter().map(|c| c.exit_status()).collect();
        statuses.sort_unstable();
        statuses.dedup();
        assert_eq!(statuses.len(), codes.len());
        assert!(!statuses.contains(&0));
    }

    #[test]
    fn test_json_shape() {
        let err = AppError::not_found("Product", 3);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 3");
        assert!(json.get("field").is_none());
    }
}
