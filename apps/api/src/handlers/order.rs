//! Order endpoint handlers.
//!
//! Thin adapters: extract, delegate to [`OrderService`], envelope. All
//! validation and pricing lives in the service layer.
//!
//! [`OrderService`]: crate::services::OrderService

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{
    CreateOrderRequest, OrderResponse, OrderSummaryResponse, UpdateOrderStatusRequest,
};
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// `POST /api/orders` - returns 201 with the persisted order.
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<OrderResponse>>)> {
    let order = state.orders.create_order(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Order created successfully", order)),
    ))
}

/// `GET /api/orders`
pub async fn list_orders(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<OrderSummaryResponse>>>> {
    let orders = state.orders.list_orders().await?;

    Ok(Json(ApiResponse::ok(
        "Orders retrieved successfully",
        orders,
    )))
}

/// `GET /api/orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<OrderResponse>>> {
    let order = state.orders.get_order(&id).await?;

    Ok(Json(ApiResponse::ok("Order retrieved successfully", order)))
}

/// `PATCH /api/orders/:id/status`
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateOrderStatusRequest>,
) -> ApiResult<Json<ApiResponse<OrderResponse>>> {
    let order = state.orders.update_status(&id, request.status).await?;

    Ok(Json(ApiResponse::ok(
        "Order status updated successfully",
        order,
    )))
}

/// `DELETE /api/orders/:id`
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.orders.delete_order(&id).await?;

    Ok(Json(ApiResponse::ok_empty("Order deleted successfully")))
}
