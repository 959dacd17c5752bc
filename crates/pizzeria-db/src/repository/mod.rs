//! # Repository Module
//!
//! Database repository implementations for the pizzeria backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  API Service                                                           │
//! │       │                                                                 │
//! │       │  db.toppings().find_by_ids(&ids)                               │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  CatalogRepository<Topping> / OrderRepository                          │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Services stay free of persistence details                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`catalog::CatalogRepository`] - Typed catalog lookups (bases, sizes, toppings)
//! - [`order::OrderRepository`] - Atomic order creation and order graph reloads

pub mod catalog;
pub mod order;
