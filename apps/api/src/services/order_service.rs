//! # Order Service
//!
//! Order intake, reloads, status updates and soft-deletion.
//!
//! ## Order Creation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    POST /api/orders Pipeline                            │
//! │                                                                         │
//! │  1. Input validation (pure, no I/O)                                    │
//! │     name, email/phone shape, item list present, quantities in range    │
//! │                                                                         │
//! │  2. Per line: component validation + pricing                           │
//! │     PizzaService resolves base/size/toppings, quote_line prices the    │
//! │     line in integer cents                                              │
//! │                                                                         │
//! │  3. Atomic persistence                                                 │
//! │     One transaction for the order, every item and every topping line   │
//! │                                                                         │
//! │  4. Reload + response mapping                                          │
//! │     The response reflects what was PERSISTED, not what was computed    │
//! │                                                                         │
//! │  Client-supplied prices do not exist anywhere in this pipeline.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog rows can change between validation and the insert; the foreign
//! keys still hold because catalog rows are never physically deleted, so
//! the worst case is an order priced against a row flagged off mid-flight.

use tracing::info;

use crate::dto::{CreateOrderRequest, OrderResponse, OrderSummaryResponse};
use crate::error::ApiResult;
use crate::services::pizza_service::PizzaService;
use pizzeria_core::validation::{
    validate_customer_name, validate_email, validate_items_present, validate_phone,
    validate_quantity,
};
use pizzeria_core::{quote_line, Money, OrderStatus, ToppingRequest};
use pizzeria_db::{Database, NewOrder, NewOrderItem, NewOrderItemTopping};

/// Order intake and lifecycle service.
#[derive(Debug, Clone)]
pub struct OrderService {
    db: Database,
    pizza: PizzaService,
}

impl OrderService {
    /// Creates a new OrderService.
    pub fn new(db: Database, pizza: PizzaService) -> Self {
        OrderService { db, pizza }
    }

    /// Creates an order from a validated request.
    ///
    /// ## Steps
    /// 1. Validate request fields (pure)
    /// 2. Validate and price every line against the catalog
    /// 3. Persist the whole graph in one transaction
    /// 4. Reload and map the persisted graph
    pub async fn create_order(&self, request: CreateOrderRequest) -> ApiResult<OrderResponse> {
        validate_customer_name(&request.customer_name)?;
        if let Some(email) = &request.customer_email {
            validate_email(email)?;
        }
        if let Some(phone) = &request.customer_phone {
            validate_phone(phone)?;
        }
        validate_items_present(request.items.len())?;
        for item in &request.items {
            validate_quantity("quantity", item.quantity)?;
            for topping in &item.toppings {
                validate_quantity("toppings.quantity", topping.quantity)?;
            }
        }

        let mut total = Money::zero();
        let mut new_items = Vec::with_capacity(request.items.len());

        for item in &request.items {
            let requested: Vec<ToppingRequest> = item
                .toppings
                .iter()
                .map(|t| ToppingRequest {
                    topping_id: t.topping_id.clone(),
                    quantity: t.quantity,
                })
                .collect();

            let (base, size, resolved) = self
                .pizza
                .validate_components(&item.base_id, &item.size_id, &requested)
                .await?;

            let quote = quote_line(&base, &size, &resolved, &requested, item.quantity);
            total += quote.line_total;

            new_items.push(NewOrderItem {
                base_id: item.base_id.clone(),
                size_id: item.size_id.clone(),
                quantity: item.quantity,
                unit_price_cents: quote.unit_price.cents(),
                total_cents: quote.line_total.cents(),
                notes: item.notes.clone(),
                toppings: quote
                    .toppings
                    .iter()
                    .map(|t| NewOrderItemTopping {
                        topping_id: t.topping_id.clone(),
                        quantity: t.quantity,
                        unit_price_cents: t.unit_price.cents(),
                        total_cents: t.total_price.cents(),
                    })
                    .collect(),
            });
        }

        let new_order = NewOrder {
            customer_name: request.customer_name.trim().to_string(),
            customer_email: request.customer_email.clone(),
            customer_phone: request.customer_phone.clone(),
            notes: request.notes.clone(),
            total_cents: total.cents(),
            items: new_items,
        };

        let order_id = self.db.orders().create(&new_order).await?;

        info!(
            id = %order_id,
            customer = %new_order.customer_name,
            total = %total,
            "Order created"
        );

        let graph = self
            .db
            .orders()
            .find_with_items_or_not_found(&order_id)
            .await?;

        Ok(graph.into())
    }

    /// Gets one order with its full item graph.
    pub async fn get_order(&self, id: &str) -> ApiResult<OrderResponse> {
        let graph = self.db.orders().find_with_items_or_not_found(id).await?;
        Ok(graph.into())
    }

    /// Lists all orders, newest first, without items.
    pub async fn list_orders(&self) -> ApiResult<Vec<OrderSummaryResponse>> {
        let orders = self.db.orders().list().await?;
        Ok(orders.into_iter().map(Into::into).collect())
    }

    /// Updates an order's status and returns the refreshed order.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ApiResult<OrderResponse> {
        self.db.orders().update_status(id, status).await?;

        info!(id = %id, ?status, "Order status updated");

        self.get_order(id).await
    }

    /// Soft-deletes an order.
    pub async fn delete_order(&self, id: &str) -> ApiResult<()> {
        self.db.orders().soft_delete(id).await?;

        info!(id = %id, "Order deleted");

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CreateOrderItemRequest, CreateOrderToppingRequest};
    use crate::error::ApiError;
    use chrono::Utc;
    use pizzeria_core::{PizzaBase, PizzaSize, Topping};
    use pizzeria_db::DbConfig;

    async fn seeded_service() -> OrderService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let now = Utc::now();

        db.bases()
            .insert(&PizzaBase {
                id: "b-thin".to_string(),
                name: "Thin Crust".to_string(),
                description: None,
                price_cents: 800,
                is_available: true,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        db.sizes()
            .insert(&PizzaSize {
                id: "s-med".to_string(),
                name: "Medium".to_string(),
                inches: 12,
                price_cents: 700,
                is_available: true,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        for (id, name, cents) in [("t-pep", "Pepperoni", 250), ("t-mush", "Mushrooms", 150)] {
            db.toppings()
                .insert(&Topping {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: None,
                    price_cents: cents,
                    is_available: true,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        let pizza = PizzaService::new(db.clone());
        OrderService::new(db, pizza)
    }

    fn topping(id: &str, qty: i64) -> CreateOrderToppingRequest {
        CreateOrderToppingRequest {
            topping_id: id.to_string(),
            quantity: qty,
        }
    }

    fn menu_request() -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: "Ada Lovelace".to_string(),
            customer_email: Some("ada@example.com".to_string()),
            customer_phone: None,
            notes: None,
            items: vec![CreateOrderItemRequest {
                base_id: "b-thin".to_string(),
                size_id: "s-med".to_string(),
                quantity: 2,
                notes: None,
                toppings: vec![topping("t-pep", 2), topping("t-mush", 1)],
            }],
        }
    }

    /// The menu scenario: (8.00 + 7.00 + 2.50×2 + 1.50×1) × 2 = 43.00.
    #[tokio::test]
    async fn test_create_order_prices_server_side() {
        let service = seeded_service().await;

        let order = service.create_order(menu_request()).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 43.0);

        let item = &order.order_items[0];
        assert_eq!(item.unit_price, 21.5);
        assert_eq!(item.total_price, 43.0);

        // Topping lines price per single pizza: 2.50 × 2 = 5.00
        assert_eq!(item.toppings[0].topping.name, "Pepperoni");
        assert_eq!(item.toppings[0].total_price, 5.0);
        assert_eq!(item.toppings[1].total_price, 1.5);
    }

    #[tokio::test]
    async fn test_create_order_without_toppings() {
        let service = seeded_service().await;

        let mut request = menu_request();
        request.items[0].toppings.clear();
        request.items[0].quantity = 3;

        let order = service.create_order(request).await.unwrap();

        assert_eq!(order.total_amount, 45.0);
        assert!(order.order_items[0].toppings.is_empty());
    }

    #[tokio::test]
    async fn test_create_order_rejects_empty_items() {
        let service = seeded_service().await;

        let mut request = menu_request();
        request.items.clear();

        let err = service.create_order(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "items must contain at least 1 entry");
    }

    #[tokio::test]
    async fn test_create_order_rejects_blank_name() {
        let service = seeded_service().await;

        let mut request = menu_request();
        request.customer_name = "   ".to_string();

        let err = service.create_order(request).await.unwrap_err();
        assert_eq!(err.to_string(), "customerName is required");
    }

    #[tokio::test]
    async fn test_create_order_rejects_bad_email() {
        let service = seeded_service().await;

        let mut request = menu_request();
        request.customer_email = Some("not-an-email".to_string());

        let err = service.create_order(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_order_rejects_zero_quantity() {
        let service = seeded_service().await;

        let mut request = menu_request();
        request.items[0].quantity = 0;

        let err = service.create_order(request).await.unwrap_err();
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[tokio::test]
    async fn test_create_order_unknown_base_is_not_found() {
        let service = seeded_service().await;

        let mut request = menu_request();
        request.items[0].base_id = "ghost".to_string();

        let err = service.create_order(request).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        // Nothing may be persisted for a rejected order
        assert!(service.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_middle_line_persists_nothing() {
        let service = seeded_service().await;

        let mut request = menu_request();
        let good = request.items[0].clone();
        let mut bad = good.clone();
        bad.base_id = "ghost".to_string();
        request.items = vec![good.clone(), bad, good];

        let err = service.create_order(request).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(service.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_lifecycle() {
        let service = seeded_service().await;

        let created = service.create_order(menu_request()).await.unwrap();

        let reloaded = service.get_order(&created.id).await.unwrap();
        assert_eq!(reloaded.total_amount, created.total_amount);

        let updated = service
            .update_status(&created.id, OrderStatus::Preparing)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Preparing);

        service.delete_order(&created.id).await.unwrap();
        let missing = service.get_order(&created.id).await.unwrap_err();
        assert!(matches!(missing, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_without_items() {
        let service = seeded_service().await;

        service.create_order(menu_request()).await.unwrap();
        service.create_order(menu_request()).await.unwrap();

        let orders = service.list_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders[0].created_at >= orders[1].created_at);
    }
}
