//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate holds the rules that decide what may enter the product table
//! and how a search keyword is interpreted. Everything here is a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (apps/cli)                         │   │
//! │  │      add ──► validate ──► store ──► re-list ──► render          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌─────────────┐      ┌────────────┐       │   │
//! │  │   │   types   │      │ validation  │      │   search   │       │   │
//! │  │   │  Product  │      │  name/price │      │ SearchTerm │       │   │
//! │  │   │NewProduct │      │  quantity   │      │  coercion  │       │   │
//! │  │   └───────────┘      └─────────────┘      └────────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO FILES • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  │              SQLite queries, schema, CSV export                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct)
//! - [`validation`] - Record validation from raw form strings
//! - [`search`] - Keyword coercion for the six search clauses
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::validate_product;
//!
//! let product = validate_product("Basmati Rice", "12.5", "1,200", "kg", "").unwrap();
//! assert_eq!(product.quantity, 1200);
//!
//! assert!(validate_product("R1ce", "12.5", "3", "kg", "").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use search::SearchTerm;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Column headings of the product table, in on-disk order.
///
/// Used as the header row of every export.
pub const PRODUCT_COLUMNS: [&str; 6] = ["ID", "Name", "Price", "Quantity", "Units", "Descriptions"];
