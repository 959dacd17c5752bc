//! # Domain Types
//!
//! Core domain types for the pizzeria backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog (read-mostly, seeded):                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐         │
//! │  │   PizzaBase     │  │   PizzaSize     │  │    Topping      │         │
//! │  │  ────────────   │  │  ────────────   │  │  ────────────   │         │
//! │  │  id (UUID)      │  │  id (UUID)      │  │  id (UUID)      │         │
//! │  │  name (unique)  │  │  name (unique)  │  │  name (unique)  │         │
//! │  │  price_cents    │  │  inches         │  │  price_cents    │         │
//! │  │  is_available   │  │  price_cents    │  │  is_available   │         │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘         │
//! │                                                                         │
//! │  Orders (created once, then status-only mutations):                     │
//! │  Order ──owns──► OrderItem ──owns──► OrderItemTopping                   │
//! │    │                 │                     │                            │
//! │    │                 ├──refs──► PizzaBase  └──refs──► Topping           │
//! │    │                 └──refs──► PizzaSize                               │
//! │    └── soft-delete flag, never physical cascade                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog Entities
// =============================================================================

/// A pizza base (crust) available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PizzaBase {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, unique among bases.
    pub name: String,

    /// Optional description for menu display.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Whether the base may currently be ordered.
    pub is_available: bool,

    /// When the base was created.
    pub created_at: DateTime<Utc>,

    /// When the base was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PizzaBase {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A pizza size available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PizzaSize {
    pub id: String,

    /// Display name, unique among sizes.
    pub name: String,

    /// Diameter in inches (positive).
    pub inches: i64,

    /// Price in cents.
    pub price_cents: i64,

    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PizzaSize {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A topping available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Topping {
    pub id: String,

    /// Display name, unique among toppings.
    pub name: String,

    pub description: Option<String>,

    /// Price per unit in cents.
    pub price_cents: i64,

    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topping {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// Orders start as `Pending`. Any status may follow any other via the
/// status-update operation; the backend does not enforce a transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, not yet confirmed.
    Pending,
    /// Order accepted by the kitchen.
    Confirmed,
    /// Pizzas are in the oven.
    Preparing,
    /// Ready for pickup/delivery.
    Ready,
    /// Handed to the customer.
    Delivered,
    /// Order was cancelled.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// Created once by the order service, then mutated only through status
/// transitions or soft-deletion. Items are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub status: OrderStatus,
    /// Computed order total in cents (sum of item line totals).
    pub total_cents: i64,
    pub notes: Option<String>,
    /// Soft-delete flag; deleted orders are hidden, never physically removed.
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One pizza configuration within an order.
///
/// References the base and size by id; prices are computed server-side at
/// creation time, never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub base_id: String,
    pub size_id: String,
    /// Number of pizzas with this configuration (positive).
    pub quantity: i64,
    /// Price of a single pizza: base + size + toppings, in cents.
    pub unit_price_cents: i64,
    /// unit_price × quantity, in cents.
    pub total_cents: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Item Topping
// =============================================================================

/// A topping line on one order item.
///
/// `total_cents` is the topping price × the topping's own quantity. It is
/// NOT scaled by the outer item quantity; the item's unit price already
/// folds the toppings in, so the line total here is per single pizza.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItemTopping {
    pub id: String,
    pub order_item_id: String,
    pub topping_id: String,
    /// Units of this topping on one pizza (positive).
    pub quantity: i64,
    /// Raw topping price in cents at order time.
    pub unit_price_cents: i64,
    /// unit_price × topping quantity, in cents.
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItemTopping {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the topping line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Hydrated Order Graph
// =============================================================================

/// An order together with its full item/topping graph and the catalog
/// entities each line references. This is what the store reload returns
/// and what the response mapper consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub order: Order,
    /// Items in persisted (creation) order.
    pub items: Vec<OrderItemDetail>,
}

/// One order item with its resolved base, size and topping lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub item: OrderItem,
    pub base: PizzaBase,
    pub size: PizzaSize,
    pub toppings: Vec<OrderItemToppingDetail>,
}

/// One topping line with its resolved topping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemToppingDetail {
    pub line: OrderItemTopping,
    pub topping: Topping,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_serde_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");

        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn test_price_accessors() {
        let base = PizzaBase {
            id: "b1".to_string(),
            name: "Thin Crust".to_string(),
            description: None,
            price_cents: 800,
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(base.price(), Money::from_cents(800));
    }
}
