//! # Route Table
//!
//! ```text
//! GET    /health                     → health check (db connectivity)
//!
//! GET    /api/pizza/bases            → available pizza bases
//! GET    /api/pizza/sizes            → available pizza sizes
//! GET    /api/pizza/toppings         → available toppings
//!
//! POST   /api/orders                 → create order (201)
//! GET    /api/orders                 → list orders, newest first
//! GET    /api/orders/:id             → one order with items
//! PATCH  /api/orders/:id/status      → update status
//! DELETE /api/orders/:id             → soft-delete
//!
//! *                                  → enveloped 404
//! ```

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let pizza_routes = Router::new()
        .route("/bases", get(handlers::pizza::get_bases))
        .route("/sizes", get(handlers::pizza::get_sizes))
        .route("/toppings", get(handlers::pizza::get_toppings));

    let order_routes = Router::new()
        .route(
            "/",
            post(handlers::order::create_order).get(handlers::order::list_orders),
        )
        .route(
            "/:id",
            get(handlers::order::get_order).delete(handlers::order::delete_order),
        )
        .route("/:id/status", patch(handlers::order::update_order_status));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/pizza", pizza_routes)
        .nest("/api/orders", order_routes)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
