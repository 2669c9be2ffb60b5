//! # Commands
//!
//! One handler per user intent. Each handler takes the owned
//! [`Database`] it should work on, so nothing here touches global state.
//!
//! ## Command Categories
//! - **Product**: add, list, search, update, remove, export
//!
//! ## Refresh Contract
//! A rendered table is a snapshot. Every mutation handler ends by
//! re-reading the full list from the store and returning it, so what the
//! user sees after `add`, `update` or `remove` is the table as stored.

pub mod product;

use serde::Serialize;
use std::path::PathBuf;
use stockroom_core::Product;

/// Result of a successful command, ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The full table, with an optional status line.
    Table {
        note: Option<String>,
        products: Vec<Product>,
    },

    /// Rows matching a keyword (possibly none).
    SearchResults {
        keyword: String,
        products: Vec<Product>,
    },

    /// An export file was written.
    Exported { path: PathBuf, rows: u64 },
}
