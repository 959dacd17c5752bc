//! # Service Layer
//!
//! Business orchestration between the HTTP handlers and the repositories.
//!
//! - [`pizza_service::PizzaService`] - Catalog listings + component validation
//! - [`order_service::OrderService`] - Order intake and lifecycle

pub mod order_service;
pub mod pizza_service;

pub use order_service::OrderService;
pub use pizza_service::PizzaService;
