//! # Wire DTOs
//!
//! Request and response bodies for the REST surface. All JSON keys are
//! camelCase.
//!
//! ## Price Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Money at the API Boundary                              │
//! │                                                                         │
//! │  Inside the backend:  integer cents (Money / *_cents columns)           │
//! │  On the wire:         decimal major units as JSON numbers               │
//! │                                                                         │
//! │  2150 cents ──► Money::to_major_units() ──► 21.5                        │
//! │                                                                         │
//! │  The float conversion happens HERE and only here, after every           │
//! │  computation has finished in exact integer arithmetic.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients never send prices; every request price field would be ignored,
//! so none exist on the request DTOs at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pizzeria_core::{
    OrderItemDetail, OrderItemToppingDetail, OrderStatus, OrderWithItems, PizzaBase, PizzaSize,
    Topping,
};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<CreateOrderItemRequest>,
}

/// One requested pizza configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub base_id: String,
    pub size_id: String,
    pub quantity: i64,
    pub notes: Option<String>,
    /// Omitted toppings mean a plain pizza.
    #[serde(default)]
    pub toppings: Vec<CreateOrderToppingRequest>,
}

/// One requested topping on an item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderToppingRequest {
    pub topping_id: String,
    pub quantity: i64,
}

/// Body of `PATCH /api/orders/:id/status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

// =============================================================================
// Catalog Responses
// =============================================================================

/// A pizza base as returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PizzaBase> for BaseResponse {
    fn from(base: PizzaBase) -> Self {
        BaseResponse {
            price: base.price().to_major_units(),
            id: base.id,
            name: base.name,
            description: base.description,
            is_available: base.is_available,
            created_at: base.created_at,
            updated_at: base.updated_at,
        }
    }
}

/// A pizza size as returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeResponse {
    pub id: String,
    pub name: String,
    pub inches: i64,
    pub price: f64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PizzaSize> for SizeResponse {
    fn from(size: PizzaSize) -> Self {
        SizeResponse {
            price: size.price().to_major_units(),
            id: size.id,
            name: size.name,
            inches: size.inches,
            is_available: size.is_available,
            created_at: size.created_at,
            updated_at: size.updated_at,
        }
    }
}

/// A topping as returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToppingResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topping> for ToppingResponse {
    fn from(topping: Topping) -> Self {
        ToppingResponse {
            price: topping.price().to_major_units(),
            id: topping.id,
            name: topping.name,
            description: topping.description,
            is_available: topping.is_available,
            created_at: topping.created_at,
            updated_at: topping.updated_at,
        }
    }
}

// =============================================================================
// Order Responses
// =============================================================================

/// A full order with its item graph.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order_items: Vec<OrderItemResponse>,
}

impl From<OrderWithItems> for OrderResponse {
    fn from(graph: OrderWithItems) -> Self {
        let order = graph.order;
        OrderResponse {
            total_amount: order.total().to_major_units(),
            id: order.id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            status: order.status,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
            order_items: graph.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// One order line with resolved base, size and toppings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub notes: Option<String>,
    pub base: BaseResponse,
    pub size: SizeResponse,
    pub toppings: Vec<OrderItemToppingResponse>,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(detail: OrderItemDetail) -> Self {
        OrderItemResponse {
            unit_price: detail.item.unit_price().to_major_units(),
            total_price: detail.item.total().to_major_units(),
            id: detail.item.id,
            quantity: detail.item.quantity,
            notes: detail.item.notes,
            base: detail.base.into(),
            size: detail.size.into(),
            toppings: detail.toppings.into_iter().map(Into::into).collect(),
        }
    }
}

/// One topping line with its resolved topping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemToppingResponse {
    pub id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub topping: ToppingResponse,
}

impl From<OrderItemToppingDetail> for OrderItemToppingResponse {
    fn from(detail: OrderItemToppingDetail) -> Self {
        OrderItemToppingResponse {
            unit_price: detail.line.unit_price().to_major_units(),
            total_price: detail.line.total().to_major_units(),
            id: detail.line.id,
            quantity: detail.line.quantity,
            topping: detail.topping.into(),
        }
    }
}

/// An order without its item graph, for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<pizzeria_core::Order> for OrderSummaryResponse {
    fn from(order: pizzeria_core::Order) -> Self {
        OrderSummaryResponse {
            total_amount: order.total().to_major_units(),
            id: order.id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            status: order.status,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_base_response_converts_price_to_major_units() {
        let now = Utc::now();
        let base = PizzaBase {
            id: "b1".to_string(),
            name: "Thin Crust".to_string(),
            description: Some("Classic thin and crispy crust".to_string()),
            price_cents: 800,
            is_available: true,
            created_at: now,
            updated_at: now,
        };

        let response = BaseResponse::from(base);
        assert_eq!(response.price, 8.0);
    }

    #[test]
    fn test_responses_serialize_camel_case() {
        let now = Utc::now();
        let size = PizzaSize {
            id: "s1".to_string(),
            name: "Medium".to_string(),
            inches: 12,
            price_cents: 700,
            is_available: true,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(SizeResponse::from(size)).unwrap();
        assert!(json.get("isAvailable").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("is_available").is_none());
    }

    #[test]
    fn test_request_toppings_default_to_empty() {
        let body = serde_json::json!({
            "baseId": "b1",
            "sizeId": "s1",
            "quantity": 1
        });

        let item: CreateOrderItemRequest = serde_json::from_value(body).unwrap();
        assert!(item.toppings.is_empty());
    }
}
