//! # Order Repository
//!
//! Database operations for orders, order items and item toppings.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE (atomic)                                                    │
//! │     └── create() → orders + order_items + order_item_toppings          │
//! │         inserted in ONE transaction; partial persistence is            │
//! │         impossible by construction                                     │
//! │                                                                         │
//! │  2. RELOAD                                                             │
//! │     └── find_with_items() → full order graph with resolved             │
//! │         bases, sizes and toppings                                      │
//! │                                                                         │
//! │  3. STATUS UPDATES                                                     │
//! │     └── update_status() → any status may follow any other;             │
//! │         deleted orders are never touched                               │
//! │                                                                         │
//! │  4. (OPTIONAL) SOFT DELETE                                             │
//! │     └── soft_delete() → sets is_deleted; rows stay for history         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::repository::catalog::CatalogRepository;
use pizzeria_core::{
    Order, OrderItem, OrderItemDetail, OrderItemTopping, OrderItemToppingDetail, OrderStatus,
    OrderWithItems, PizzaBase, PizzaSize, Topping,
};

// =============================================================================
// Persistence Payloads
// =============================================================================

/// A fully-priced order ready for atomic persistence.
///
/// Built by the order service after validation and pricing; every monetary
/// field is already computed. The repository assigns ids and timestamps.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub total_cents: i64,
    /// Lines in request order; persisted order follows this order.
    pub items: Vec<NewOrderItem>,
}

/// One priced order line.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub base_id: String,
    pub size_id: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub notes: Option<String>,
    pub toppings: Vec<NewOrderItemTopping>,
}

/// One priced topping line.
#[derive(Debug, Clone)]
pub struct NewOrderItemTopping {
    pub topping_id: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
}

// =============================================================================
// Order Repository
// =============================================================================

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists a new order with all items and toppings atomically.
    ///
    /// ## Atomicity
    /// All rows go through one transaction. If any insert fails (for
    /// example a foreign key violation on a catalog id), the transaction
    /// rolls back and NOTHING is persisted.
    ///
    /// ## Returns
    /// The generated order id, for the follow-up reload.
    pub async fn create(&self, new_order: &NewOrder) -> DbResult<String> {
        let order_id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!(
            id = %order_id,
            customer = %new_order.customer_name,
            items = new_order.items.len(),
            total_cents = new_order.total_cents,
            "Creating order"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, customer_name, customer_email, customer_phone,
                status, total_cents, notes, is_deleted,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8, ?9)
            "#,
        )
        .bind(&order_id)
        .bind(&new_order.customer_name)
        .bind(&new_order.customer_email)
        .bind(&new_order.customer_phone)
        .bind(OrderStatus::Pending)
        .bind(new_order.total_cents)
        .bind(&new_order.notes)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for (position, item) in new_order.items.iter().enumerate() {
            let item_id = Uuid::new_v4().to_string();

            sqlx::query(
                r#"
                INSERT INTO order_items (
                    id, order_id, base_id, size_id,
                    quantity, unit_price_cents, total_cents, notes,
                    position, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
            )
            .bind(&item_id)
            .bind(&order_id)
            .bind(&item.base_id)
            .bind(&item.size_id)
            .bind(item.quantity)
            .bind(item.unit_price_cents)
            .bind(item.total_cents)
            .bind(&item.notes)
            .bind(position as i64)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;

            for (topping_position, topping) in item.toppings.iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO order_item_toppings (
                        id, order_item_id, topping_id,
                        quantity, unit_price_cents, total_cents,
                        position, created_at, updated_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                    "#,
                )
                .bind(Uuid::new_v4().to_string())
                .bind(&item_id)
                .bind(&topping.topping_id)
                .bind(topping.quantity)
                .bind(topping.unit_price_cents)
                .bind(topping.total_cents)
                .bind(topping_position as i64)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(order_id)
    }

    /// Gets a non-deleted order by id, without its items.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE id = ?1 AND is_deleted = 0",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets a non-deleted order with its full item/topping graph.
    ///
    /// ## Hydration
    /// Four bounded queries regardless of order size:
    /// 1. the order row
    /// 2. its items (in persisted position order)
    /// 3. referenced bases and sizes (one IN query each)
    /// 4. topping lines + referenced toppings
    pub async fn find_with_items(&self, id: &str) -> DbResult<Option<OrderWithItems>> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = ?1 ORDER BY position ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        // Resolve referenced catalog entities in bulk
        let base_ids: Vec<String> = items.iter().map(|i| i.base_id.clone()).collect();
        let size_ids: Vec<String> = items.iter().map(|i| i.size_id.clone()).collect();

        let bases = CatalogRepository::<PizzaBase>::new(self.pool.clone())
            .find_by_ids(&base_ids)
            .await?;
        let sizes = CatalogRepository::<PizzaSize>::new(self.pool.clone())
            .find_by_ids(&size_ids)
            .await?;

        let bases: HashMap<String, PizzaBase> =
            bases.into_iter().map(|b| (b.id.clone(), b)).collect();
        let sizes: HashMap<String, PizzaSize> =
            sizes.into_iter().map(|s| (s.id.clone(), s)).collect();

        // Topping lines for all items at once
        let item_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let topping_lines = self.find_topping_lines(&item_ids).await?;

        let topping_ids: Vec<String> =
            topping_lines.iter().map(|t| t.topping_id.clone()).collect();
        let toppings = CatalogRepository::<Topping>::new(self.pool.clone())
            .find_by_ids(&topping_ids)
            .await?;
        let toppings: HashMap<String, Topping> =
            toppings.into_iter().map(|t| (t.id.clone(), t)).collect();

        let mut lines_by_item: HashMap<String, Vec<OrderItemTopping>> = HashMap::new();
        for line in topping_lines {
            lines_by_item
                .entry(line.order_item_id.clone())
                .or_default()
                .push(line);
        }

        // Assemble the graph; a dangling catalog reference means the store
        // integrity guarantees were violated
        let mut details = Vec::with_capacity(items.len());
        for item in items {
            let base = bases
                .get(&item.base_id)
                .cloned()
                .ok_or_else(|| DbError::not_found("Pizza base", &item.base_id))?;
            let size = sizes
                .get(&item.size_id)
                .cloned()
                .ok_or_else(|| DbError::not_found("Pizza size", &item.size_id))?;

            let mut topping_details = Vec::new();
            for line in lines_by_item.remove(&item.id).unwrap_or_default() {
                let topping = toppings
                    .get(&line.topping_id)
                    .cloned()
                    .ok_or_else(|| DbError::not_found("Topping", &line.topping_id))?;
                topping_details.push(OrderItemToppingDetail { line, topping });
            }

            details.push(OrderItemDetail {
                item,
                base,
                size,
                toppings: topping_details,
            });
        }

        Ok(Some(OrderWithItems {
            order,
            items: details,
        }))
    }

    /// Gets a non-deleted order with items or fails with NotFound.
    pub async fn find_with_items_or_not_found(&self, id: &str) -> DbResult<OrderWithItems> {
        self.find_with_items(id)
            .await?
            .ok_or_else(|| DbError::not_found("Order", id))
    }

    /// Lists non-deleted orders, newest first, without items.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE is_deleted = 0 ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Updates an order's status.
    ///
    /// ## Rules
    /// - Only non-deleted orders may be updated
    /// - No transition graph is enforced: any status may follow any other
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> DbResult<()> {
        let now = Utc::now();

        debug!(id = %id, ?status, "Updating order status");

        let result = sqlx::query(
            r#"
            UPDATE orders SET
                status = ?2,
                updated_at = ?3
            WHERE id = ?1 AND is_deleted = 0
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Soft-deletes an order. Items and toppings remain for history.
    pub async fn soft_delete(&self, id: &str) -> DbResult<()> {
        let now = Utc::now();

        debug!(id = %id, "Soft-deleting order");

        let result = sqlx::query(
            r#"
            UPDATE orders SET
                is_deleted = 1,
                updated_at = ?2
            WHERE id = ?1 AND is_deleted = 0
            "#,
        )
        .bind(id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Fetches topping lines for a set of items, position-ordered.
    async fn find_topping_lines(&self, item_ids: &[String]) -> DbResult<Vec<OrderItemTopping>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (1..=item_ids.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT * FROM order_item_toppings WHERE order_item_id IN ({placeholders}) \
             ORDER BY order_item_id, position ASC",
        );

        let mut query = sqlx::query_as::<_, OrderItemTopping>(&sql);
        for id in item_ids {
            query = query.bind(id);
        }

        let lines = query.fetch_all(&self.pool).await?;

        Ok(lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn base(id: &str, price_cents: i64) -> PizzaBase {
        let now = Utc::now();
        PizzaBase {
            id: id.to_string(),
            name: format!("Base {id}"),
            description: None,
            price_cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn size(id: &str, inches: i64, price_cents: i64) -> PizzaSize {
        let now = Utc::now();
        PizzaSize {
            id: id.to_string(),
            name: format!("Size {id}"),
            inches,
            price_cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn topping(id: &str, price_cents: i64) -> Topping {
        let now = Utc::now();
        Topping {
            id: id.to_string(),
            name: format!("Topping {id}"),
            description: None,
            price_cents,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    async fn seed_catalog(db: &Database) {
        db.bases().insert(&base("b1", 800)).await.unwrap();
        db.sizes().insert(&size("s1", 12, 700)).await.unwrap();
        db.toppings().insert(&topping("t1", 250)).await.unwrap();
        db.toppings().insert(&topping("t2", 150)).await.unwrap();
    }

    fn sample_order() -> NewOrder {
        NewOrder {
            customer_name: "Jamie".to_string(),
            customer_email: Some("jamie@example.com".to_string()),
            customer_phone: None,
            notes: None,
            total_cents: 4300,
            items: vec![
                NewOrderItem {
                    base_id: "b1".to_string(),
                    size_id: "s1".to_string(),
                    quantity: 2,
                    unit_price_cents: 2150,
                    total_cents: 4300,
                    notes: Some("extra crispy".to_string()),
                    toppings: vec![
                        NewOrderItemTopping {
                            topping_id: "t1".to_string(),
                            quantity: 2,
                            unit_price_cents: 250,
                            total_cents: 500,
                        },
                        NewOrderItemTopping {
                            topping_id: "t2".to_string(),
                            quantity: 1,
                            unit_price_cents: 150,
                            total_cents: 150,
                        },
                    ],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_create_and_reload_order_graph() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let order_id = db.orders().create(&sample_order()).await.unwrap();
        let loaded = db
            .orders()
            .find_with_items_or_not_found(&order_id)
            .await
            .unwrap();

        assert_eq!(loaded.order.status, OrderStatus::Pending);
        assert_eq!(loaded.order.total_cents, 4300);
        assert_eq!(loaded.items.len(), 1);

        let item = &loaded.items[0];
        assert_eq!(item.base.id, "b1");
        assert_eq!(item.size.id, "s1");
        assert_eq!(item.item.unit_price_cents, 2150);
        assert_eq!(item.toppings.len(), 2);

        // Topping lines come back in request order
        assert_eq!(item.toppings[0].topping.id, "t1");
        assert_eq!(item.toppings[0].line.total_cents, 500);
        assert_eq!(item.toppings[1].topping.id, "t2");
    }

    #[tokio::test]
    async fn test_create_rolls_back_on_dangling_reference() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let mut order = sample_order();
        order.items[0].toppings[1].topping_id = "missing".to_string();

        let result = db.orders().create(&order).await;
        assert!(matches!(result, Err(DbError::ForeignKeyViolation { .. })));

        // The order header must not survive the failed topping insert
        let orders = db.orders().list().await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let order_id = db.orders().create(&sample_order()).await.unwrap();

        db.orders()
            .update_status(&order_id, OrderStatus::Preparing)
            .await
            .unwrap();

        let loaded = db.orders().find_by_id(&order_id).await.unwrap().unwrap();
        assert_eq!(loaded.status, OrderStatus::Preparing);

        let missing = db
            .orders()
            .update_status("nope", OrderStatus::Ready)
            .await;
        assert!(matches!(missing, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_soft_delete_hides_order() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let order_id = db.orders().create(&sample_order()).await.unwrap();
        db.orders().soft_delete(&order_id).await.unwrap();

        assert!(db.orders().find_by_id(&order_id).await.unwrap().is_none());
        assert!(db.orders().list().await.unwrap().is_empty());

        // Deleting twice is NotFound, not a silent no-op
        let again = db.orders().soft_delete(&order_id).await;
        assert!(matches!(again, Err(DbError::NotFound { .. })));
    }
}
