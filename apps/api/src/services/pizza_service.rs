//! # Pizza Service
//!
//! Catalog listings and order-component validation.
//!
//! ## Component Validation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              validate_components(base_id, size_id, toppings)            │
//! │                                                                         │
//! │  1. Fetch base, size and all toppings CONCURRENTLY (try_join!)          │
//! │     └── topping resolution is one IN query; an empty topping list       │
//! │         never touches the database                                      │
//! │                                                                         │
//! │  2. Check in deterministic order:                                       │
//! │     base exists → size exists                                           │
//! │     → base available → size available                                   │
//! │     → all resolved toppings available (every offender named)            │
//! │     → every requested topping resolved                                  │
//! │                                                                         │
//! │  The same request always fails with the same error, no matter how       │
//! │  many components are wrong at once.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{ApiError, ApiResult};
use pizzeria_core::{CoreError, PizzaBase, PizzaSize, Topping, ToppingRequest};
use pizzeria_db::{Database, DbError};

/// Catalog listing and component validation service.
#[derive(Debug, Clone)]
pub struct PizzaService {
    db: Database,
}

impl PizzaService {
    /// Creates a new PizzaService.
    pub fn new(db: Database) -> Self {
        PizzaService { db }
    }

    /// Lists orderable pizza bases, name-sorted.
    pub async fn get_available_bases(&self) -> ApiResult<Vec<PizzaBase>> {
        Ok(self.db.bases().find_available().await?)
    }

    /// Lists orderable pizza sizes, smallest first.
    pub async fn get_available_sizes(&self) -> ApiResult<Vec<PizzaSize>> {
        Ok(self.db.sizes().find_available().await?)
    }

    /// Lists orderable toppings, name-sorted.
    pub async fn get_available_toppings(&self) -> ApiResult<Vec<Topping>> {
        Ok(self.db.toppings().find_available().await?)
    }

    /// Resolves and validates the components of one order line.
    ///
    /// Returns the resolved base, size and toppings on success so the
    /// caller can price the line without further lookups.
    ///
    /// ## Errors
    /// - [`ApiError::NotFound`] - base or size id does not resolve, or a
    ///   requested topping is missing (including duplicate topping ids,
    ///   which resolve to fewer rows than requested)
    /// - [`ApiError::Unavailable`] - a component exists but is flagged off;
    ///   unavailable toppings are all reported together
    pub async fn validate_components(
        &self,
        base_id: &str,
        size_id: &str,
        requested: &[ToppingRequest],
    ) -> ApiResult<(PizzaBase, PizzaSize, Vec<Topping>)> {
        let topping_ids: Vec<String> =
            requested.iter().map(|t| t.topping_id.clone()).collect();

        let bases = self.db.bases();
        let sizes = self.db.sizes();
        let toppings = self.db.toppings();

        let (base, size, resolved) = tokio::try_join!(
            bases.find_by_id(base_id),
            sizes.find_by_id(size_id),
            toppings.find_by_ids(&topping_ids),
        )?;

        let base =
            base.ok_or_else(|| ApiError::from(DbError::not_found("Pizza base", base_id)))?;
        let size =
            size.ok_or_else(|| ApiError::from(DbError::not_found("Pizza size", size_id)))?;

        if !base.is_available {
            return Err(CoreError::BaseUnavailable.into());
        }
        if !size.is_available {
            return Err(CoreError::SizeUnavailable.into());
        }

        let unavailable: Vec<String> = resolved
            .iter()
            .filter(|t| !t.is_available)
            .map(|t| t.name.clone())
            .collect();
        if !unavailable.is_empty() {
            return Err(CoreError::ToppingsUnavailable { names: unavailable }.into());
        }

        // The lookup deduplicates and drops unknown ids, so comparing
        // against the RAW request count catches both missing and duplicate
        // topping ids.
        if resolved.len() < requested.len() {
            return Err(CoreError::ToppingsNotFound.into());
        }

        debug!(
            base = %base.name,
            size = %size.name,
            toppings = resolved.len(),
            "Order components validated"
        );

        Ok((base, size, resolved))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pizzeria_db::DbConfig;

    fn request(id: &str, qty: i64) -> ToppingRequest {
        ToppingRequest {
            topping_id: id.to_string(),
            quantity: qty,
        }
    }

    async fn seeded_service() -> PizzaService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let now = Utc::now();

        for (id, available) in [("b1", true), ("b2", false)] {
            db.bases()
                .insert(&PizzaBase {
                    id: id.to_string(),
                    name: format!("Base {id}"),
                    description: None,
                    price_cents: 800,
                    is_available: available,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        for (id, available) in [("s1", true), ("s2", false)] {
            db.sizes()
                .insert(&PizzaSize {
                    id: id.to_string(),
                    name: format!("Size {id}"),
                    inches: 12,
                    price_cents: 700,
                    is_available: available,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        for (id, name, available) in [
            ("t1", "Pepperoni", true),
            ("t2", "Mushrooms", true),
            ("t3", "Anchovies", false),
            ("t4", "Truffle", false),
        ] {
            db.toppings()
                .insert(&Topping {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: None,
                    price_cents: 150,
                    is_available: available,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        PizzaService::new(db)
    }

    #[tokio::test]
    async fn test_valid_components_resolve() {
        let service = seeded_service().await;

        let (base, size, toppings) = service
            .validate_components("b1", "s1", &[request("t1", 2), request("t2", 1)])
            .await
            .unwrap();

        assert_eq!(base.id, "b1");
        assert_eq!(size.id, "s1");
        assert_eq!(toppings.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_base_reported_before_missing_size() {
        let service = seeded_service().await;

        let err = service
            .validate_components("nope", "also-nope", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(err.to_string().contains("Pizza base"));
    }

    #[tokio::test]
    async fn test_unavailable_base_wins_over_unavailable_size() {
        let service = seeded_service().await;

        let err = service
            .validate_components("b2", "s2", &[])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Selected pizza base is not available");
    }

    #[tokio::test]
    async fn test_all_unavailable_toppings_are_named() {
        let service = seeded_service().await;

        let err = service
            .validate_components("b1", "s1", &[request("t3", 1), request("t4", 1)])
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unavailable(_)));
        let message = err.to_string();
        assert!(message.contains("Anchovies"));
        assert!(message.contains("Truffle"));
    }

    /// Availability runs before the resolved-count check, so a request
    /// mixing an unavailable topping with an unknown id fails as
    /// Unavailable, naming the unavailable one.
    #[tokio::test]
    async fn test_unavailable_topping_wins_over_unknown_in_same_request() {
        let service = seeded_service().await;

        let err = service
            .validate_components("b1", "s1", &[request("t3", 1), request("ghost", 1)])
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unavailable(_)));
        assert!(err.to_string().contains("Anchovies"));
    }

    #[tokio::test]
    async fn test_unknown_topping_id_is_not_found() {
        let service = seeded_service().await;

        let err = service
            .validate_components("b1", "s1", &[request("t1", 1), request("ghost", 1)])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Some selected toppings were not found");
    }

    #[tokio::test]
    async fn test_duplicate_topping_ids_are_not_found() {
        let service = seeded_service().await;

        // t1 twice resolves to one row, coming up short against the request
        let err = service
            .validate_components("b1", "s1", &[request("t1", 1), request("t1", 2)])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Some selected toppings were not found");
    }

    #[tokio::test]
    async fn test_listings_filter_unavailable() {
        let service = seeded_service().await;

        assert_eq!(service.get_available_bases().await.unwrap().len(), 1);
        assert_eq!(service.get_available_sizes().await.unwrap().len(), 1);
        assert_eq!(service.get_available_toppings().await.unwrap().len(), 2);
    }
}
