//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── ValidationError  - Raw form input rejected                        │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - NotFound, storage faults, export faults        │
//! │                                                                         │
//! │  Front-end errors (in app)                                             │
//! │  └── AppError         - What the user sees + exit code                 │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├──► AppError → terminal                       │
//! │        DbError ─────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Keep the offending value in the variant for logging
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before the store is touched. Price and quantity share one
/// failure kind so a front end can show a single combined message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty (after removing spaces) or has a non-letter in it.
    #[error("Name should contain only letters or spaces.")]
    InvalidName { value: String },

    /// Price or quantity could not be read as a number.
    ///
    /// `field` is `"price"` or `"quantity"`.
    #[error("Price and Quantity should contain only numbers.")]
    InvalidNumeric { field: String, value: String },
}

impl ValidationError {
    /// Creates an InvalidName error.
    pub fn invalid_name(value: impl Into<String>) -> Self {
        ValidationError::InvalidName {
            value: value.into(),
        }
    }

    /// Creates an InvalidNumeric error for the given field.
    pub fn invalid_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidNumeric {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Name of the form field that was rejected.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidName { .. } => "name",
            ValidationError::InvalidNumeric { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::invalid_name("R2D2");
        assert_eq!(err.to_string(), "Name should contain only letters or spaces.");

        let err = ValidationError::invalid_numeric("price", "ten");
        assert_eq!(
            err.to_string(),
            "Price and Quantity should contain only numbers."
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::invalid_name("").field(), "name");
        assert_eq!(
            ValidationError::invalid_numeric("quantity", "x").field(),
            "quantity"
        );
    }
}
