//! Admin handlers
//!
//! Unauthenticated; intended for local inspection and seeding.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::dto::AdminTablesDto;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::restaurants::{CreateRestaurantRequest, RestaurantDto};
use crate::interfaces::http::modules::BookingState;

#[utoipa::path(
    get,
    path = "/api/admin/tables",
    tag = "Admin",
    responses(
        (status = 200, description = "All customers, restaurants and reservations", body = AdminTablesDto)
    )
)]
pub async fn list_tables(
    State(state): State<BookingState>,
) -> Result<Json<AdminTablesDto>, ApiError<()>> {
    let tables = state.service.admin_tables().await.map_err(domain_error)?;
    Ok(Json(tables.into()))
}

#[utoipa::path(
    post,
    path = "/api/admin/restaurants",
    tag = "Admin",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = ApiResponse<RestaurantDto>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_restaurant(
    State(state): State<BookingState>,
    ValidatedJson(request): ValidatedJson<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RestaurantDto>>), ApiError<RestaurantDto>> {
    let restaurant = state
        .service
        .create_restaurant(request.into())
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(restaurant.into())),
    ))
}
