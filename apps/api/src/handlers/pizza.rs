//! Catalog endpoint handlers.
//!
//! Thin adapters: extract, delegate to [`PizzaService`], envelope.
//!
//! [`PizzaService`]: crate::services::PizzaService

use axum::extract::State;
use axum::Json;

use crate::dto::{BaseResponse, SizeResponse, ToppingResponse};
use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// `GET /api/pizza/bases`
pub async fn get_bases(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<BaseResponse>>>> {
    let bases = state.pizza.get_available_bases().await?;
    let data: Vec<BaseResponse> = bases.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::ok(
        "Pizza bases retrieved successfully",
        data,
    )))
}

/// `GET /api/pizza/sizes`
pub async fn get_sizes(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<SizeResponse>>>> {
    let sizes = state.pizza.get_available_sizes().await?;
    let data: Vec<SizeResponse> = sizes.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::ok(
        "Pizza sizes retrieved successfully",
        data,
    )))
}

/// `GET /api/pizza/toppings`
pub async fn get_toppings(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<ToppingResponse>>>> {
    let toppings = state.pizza.get_available_toppings().await?;
    let data: Vec<ToppingResponse> = toppings.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::ok(
        "Toppings retrieved successfully",
        data,
    )))
}
