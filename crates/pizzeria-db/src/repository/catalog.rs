//! # Catalog Repositories
//!
//! Typed lookups over the catalog tables (bases, sizes, toppings).
//!
//! ## One Generic Repository, Three Typed Accessors
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Statically-Typed Catalog Access                           │
//! │                                                                         │
//! │  CatalogRepository<PizzaBase>  ──► pizza_bases                          │
//! │  CatalogRepository<PizzaSize>  ──► pizza_sizes                          │
//! │  CatalogRepository<Topping>    ──► toppings                             │
//! │                                                                         │
//! │  The entity type carries its table name, human-readable kind and        │
//! │  listing order as associated consts. Shared CRUD behavior lives in      │
//! │  ONE generic impl; there is no runtime table-name dispatch and no way   │
//! │  to ask the base repository for a size.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query Round-Trips
//! `find_by_ids` resolves any number of toppings in a single `IN (...)`
//! query, so component validation stays O(1) store round-trips per order
//! line regardless of topping count.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};
use std::marker::PhantomData;
use tracing::debug;

use crate::error::{DbError, DbResult};
use pizzeria_core::{PizzaBase, PizzaSize, Topping};

// =============================================================================
// Catalog Entity Trait
// =============================================================================

/// A catalog row type that knows its own table.
///
/// Implemented for [`PizzaBase`], [`PizzaSize`] and [`Topping`]. The consts
/// keep SQL construction static per entity kind while the repository logic
/// stays generic.
pub trait CatalogEntity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Table backing this entity.
    const TABLE: &'static str;

    /// Human-readable kind for error messages ("Pizza base", ...).
    const KIND: &'static str;

    /// ORDER BY clause for availability listings.
    const LIST_ORDER: &'static str;
}

impl CatalogEntity for PizzaBase {
    const TABLE: &'static str = "pizza_bases";
    const KIND: &'static str = "Pizza base";
    const LIST_ORDER: &'static str = "name ASC";
}

impl CatalogEntity for PizzaSize {
    const TABLE: &'static str = "pizza_sizes";
    const KIND: &'static str = "Pizza size";
    // Sizes list smallest-first, not alphabetically
    const LIST_ORDER: &'static str = "inches ASC";
}

impl CatalogEntity for Topping {
    const TABLE: &'static str = "toppings";
    const KIND: &'static str = "Topping";
    const LIST_ORDER: &'static str = "name ASC";
}

// =============================================================================
// Catalog Repository
// =============================================================================

/// Repository for one catalog entity kind.
///
/// ## Usage
/// ```rust,ignore
/// let bases: CatalogRepository<PizzaBase> = CatalogRepository::new(pool);
///
/// let available = bases.find_available().await?;
/// let one = bases.find_by_id_or_not_found("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository<T> {
    pool: SqlitePool,
    _entity: PhantomData<T>,
}

impl<T: CatalogEntity> CatalogRepository<T> {
    /// Creates a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository {
            pool,
            _entity: PhantomData,
        }
    }

    /// Fetches an entity by id, if present.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", T::TABLE);

        let entity = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity)
    }

    /// Fetches an entity by id or fails with NotFound.
    pub async fn find_by_id_or_not_found(&self, id: &str) -> DbResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found(T::KIND, id))
    }

    /// Lists all available entities in the kind's listing order.
    pub async fn find_available(&self) -> DbResult<Vec<T>> {
        debug!(table = T::TABLE, "Listing available catalog entities");

        let sql = format!(
            "SELECT * FROM {} WHERE is_available = 1 ORDER BY {}",
            T::TABLE,
            T::LIST_ORDER
        );

        let entities = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;

        Ok(entities)
    }

    /// Counts all rows in the table, available or not.
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count)
    }

    /// Fetches all entities matching the given ids in one query.
    ///
    /// Unknown ids are silently dropped and duplicate ids resolve to a
    /// single row, so the result can be shorter than the input. Callers
    /// that need all ids to resolve must compare counts themselves.
    pub async fn find_by_ids(&self, ids: &[String]) -> DbResult<Vec<T>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (1..=ids.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("SELECT * FROM {} WHERE id IN ({})", T::TABLE, placeholders);

        let mut query = sqlx::query_as::<_, T>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let entities = query.fetch_all(&self.pool).await?;

        Ok(entities)
    }
}

// =============================================================================
// Catalog Inserts
// =============================================================================
// Column sets differ per kind (sizes have `inches`, bases and toppings have
// `description`), so inserts are concrete per entity. Used by the seed
// binary and tests; the API surface itself has no catalog-management
// endpoints.

impl CatalogRepository<PizzaBase> {
    /// Inserts a pizza base row.
    pub async fn insert(&self, base: &PizzaBase) -> DbResult<()> {
        debug!(id = %base.id, name = %base.name, "Inserting pizza base");

        sqlx::query(
            r#"
            INSERT INTO pizza_bases (
                id, name, description, price_cents, is_available,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&base.id)
        .bind(&base.name)
        .bind(&base.description)
        .bind(base.price_cents)
        .bind(base.is_available)
        .bind(base.created_at)
        .bind(base.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl CatalogRepository<PizzaSize> {
    /// Inserts a pizza size row.
    pub async fn insert(&self, size: &PizzaSize) -> DbResult<()> {
        debug!(id = %size.id, name = %size.name, "Inserting pizza size");

        sqlx::query(
            r#"
            INSERT INTO pizza_sizes (
                id, name, inches, price_cents, is_available,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&size.id)
        .bind(&size.name)
        .bind(size.inches)
        .bind(size.price_cents)
        .bind(size.is_available)
        .bind(size.created_at)
        .bind(size.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl CatalogRepository<Topping> {
    /// Inserts a topping row.
    pub async fn insert(&self, topping: &Topping) -> DbResult<()> {
        debug!(id = %topping.id, name = %topping.name, "Inserting topping");

        sqlx::query(
            r#"
            INSERT INTO toppings (
                id, name, description, price_cents, is_available,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&topping.id)
        .bind(&topping.name)
        .bind(&topping.description)
        .bind(topping.price_cents)
        .bind(topping.is_available)
        .bind(topping.created_at)
        .bind(topping.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
