//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Front-end command                                                     │
//! │       │                                                                 │
//! │       │  db.products().search("kg")                                    │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, product)                                            │
//! │  ├── list(&self)                                                       │
//! │  ├── search(&self, keyword)                                            │
//! │  ├── update(&self, id, product)                                        │
//! │  ├── delete(&self, ids)                                                │
//! │  └── export(&self, destination)                                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  SQL lives here and nowhere else.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD, search and export

pub mod product;
