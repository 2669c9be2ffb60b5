//! # Domain Types
//!
//! The product record, with and without its store-assigned identifier.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐    validate    ┌─────────────────┐                │
//! │  │  raw strings    │ ─────────────► │   NewProduct    │                │
//! │  │  (form input)   │                │  ─────────────  │                │
//! │  └─────────────────┘                │  name           │                │
//! │                                     │  price (f64)    │                │
//! │                                     │  quantity (i64) │                │
//! │                                     │  units          │                │
//! │                                     │  description    │                │
//! │                                     └────────┬────────┘                │
//! │                                              │ store.create()          │
//! │                                              ▼                          │
//! │                                     ┌─────────────────┐                │
//! │                                     │    Product      │                │
//! │                                     │  id + fields    │                │
//! │                                     └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store on creation and never changes. A
//! [`NewProduct`] has no id: it is what callers hand to `create` and
//! `update`.

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A stored product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the store.
    pub id: ProductId,

    /// Display name (letters and spaces).
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Quantity on hand.
    pub quantity: i64,

    /// Unit label, e.g. "kg" or "pcs".
    pub units: String,

    /// Free-form description, may be empty.
    pub description: String,
}

impl Product {
    /// Builds a stored product from its fields and assigned id.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Product {
            id,
            name: new.name,
            price: new.price,
            quantity: new.quantity,
            units: new.units,
            description: new.description,
        }
    }

    /// Returns the record without its id.
    pub fn to_new(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            units: self.units.clone(),
            description: self.description.clone(),
        }
    }
}

// =============================================================================
// New Product
// =============================================================================

/// A validated product that has not been given an id.
///
/// Only [`crate::validation::validate_product`] should build one from user
/// input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub units: String,
    pub description: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
