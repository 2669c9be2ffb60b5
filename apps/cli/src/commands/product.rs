//! # Product Commands
//!
//! Handlers for the six product intents.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add / update                                         │
//! │                                                                         │
//! │  raw strings from the command line (update: supplied fields only)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validators ── rejected? ──► AppError, store untouched                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products().create / update                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products().list()  ← refresh: full table re-read                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Outcome::Table                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use super::Outcome;
use crate::error::AppError;
use stockroom_core::validation::{parse_price, parse_quantity, validate_name, validate_product};
use stockroom_core::{NewProduct, ProductId};
use stockroom_db::Database;

/// Raw field text as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub units: String,
    pub description: String,
}

/// Fields to change on update; `None` keeps the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub units: Option<String>,
    pub description: Option<String>,
}

/// Re-reads the whole table after a mutation.
async fn refreshed(db: &Database, note: String) -> Result<Outcome, AppError> {
    let products = db.products().list().await?;
    Ok(Outcome::Table {
        note: Some(note),
        products,
    })
}

/// Validates and stores a new product.
///
/// ## Returns
/// The refreshed table, or a validation error with nothing written.
pub async fn add_product(db: &Database, form: ProductForm) -> Result<Outcome, AppError> {
    debug!(name = %form.name, "add_product command");

    let product = validate_product(
        &form.name,
        &form.price,
        &form.quantity,
        &form.units,
        &form.description,
    )?;

    let id = db.products().create(&product).await?;
    info!(id, "Product added");

    refreshed(db, format!("Added product {}.", id)).await
}

/// Lists every product.
pub async fn list_products(db: &Database) -> Result<Outcome, AppError> {
    let products = db.products().list().await?;
    Ok(Outcome::Table {
        note: None,
        products,
    })
}

/// Searches products by keyword.
///
/// An empty result is a normal outcome, not an error.
pub async fn search_products(db: &Database, keyword: String) -> Result<Outcome, AppError> {
    let start = Instant::now();

    let products = db.products().search(&keyword).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = products.len(),
        keyword = %keyword,
        "search_products complete"
    );

    Ok(Outcome::SearchResults { keyword, products })
}

/// Updates a product.
///
/// Only the supplied fields are validated, in the same order as `add`
/// (name before numbers). Omitted fields keep the stored value as is, so
/// a row written by an older tool stays editable even if one of its other
/// fields would not pass validation today.
///
/// ## Returns
/// * Refreshed table on success
/// * `NOT_FOUND` when no product has `id`
/// * `VALIDATION_ERROR` when a supplied field is rejected (nothing written)
pub async fn update_product(
    db: &Database,
    id: ProductId,
    patch: ProductPatch,
) -> Result<Outcome, AppError> {
    debug!(id, "update_product command");

    let current = db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product", id))?;

    let name = match patch.name {
        Some(name) => {
            validate_name(&name)?;
            name
        }
        None => current.name,
    };
    let price = match patch.price {
        Some(price) => parse_price(&price)?,
        None => current.price,
    };
    let quantity = match patch.quantity {
        Some(quantity) => parse_quantity(&quantity)?,
        None => current.quantity,
    };

    let product = NewProduct {
        name,
        price,
        quantity,
        units: patch.units.unwrap_or(current.units),
        description: patch.description.unwrap_or(current.description),
    };

    // The store still reports NotFound if the row vanished meanwhile
    db.products().update(id, &product).await?;
    info!(id, "Product updated");

    refreshed(db, format!("Updated product {}.", id)).await
}

/// Removes the listed products; unknown ids are ignored.
pub async fn remove_products(db: &Database, ids: Vec<ProductId>) -> Result<Outcome, AppError> {
    debug!(?ids, "remove_products command");

    let removed = db.products().delete(&ids).await?;
    info!(removed, "Products removed");

    refreshed(db, format!("Removed {} product(s).", removed)).await
}

/// Exports the full table to a CSV file.
pub async fn export_products(db: &Database, path: &Path) -> Result<Outcome, AppError> {
    let rows = db.products().export(path).await?;

    Ok(Outcome::Exported {
        path: path.to_path_buf(),
        rows,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
