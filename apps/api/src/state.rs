//! Shared application state threaded through every handler.

use crate::services::{OrderService, PizzaService};
use pizzeria_db::Database;

/// Shared application state.
///
/// Everything inside is cheaply cloneable (pool handles), so axum clones
/// the whole state per request without ceremony.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub pizza: PizzaService,
    pub orders: OrderService,
}

impl AppState {
    /// Builds the service graph over one database handle.
    pub fn new(db: Database) -> Self {
        let pizza = PizzaService::new(db.clone());
        let orders = OrderService::new(db.clone(), pizza.clone());

        AppState { db, pizza, orders }
    }
}
