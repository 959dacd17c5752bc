//! # pizzeria-db: Database Layer for the Pizzeria Backend
//!
//! This crate provides database access for the pizzeria ordering backend.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizzeria Backend Data Flow                         │
//! │                                                                         │
//! │  HTTP Handler (POST /api/orders)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pizzeria-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (catalog.rs,  │    │  (embedded)  │  │   │
//! │  │   │               │    │  order.rs)    │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ CatalogRepo<T>│    │ 001_init.sql │  │   │
//! │  │   │ Connection    │    │ OrderRepo     │    │ ...          │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./data/pizzeria.db (WAL mode, foreign keys ON)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (catalog, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pizzeria_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let config = DbConfig::new("path/to/pizzeria.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let bases = db.bases().find_available().await?;
//! let order_id = db.orders().create(&new_order).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::catalog::{CatalogEntity, CatalogRepository};
pub use repository::order::{NewOrder, NewOrderItem, NewOrderItemTopping, OrderRepository};
