//! Restaurant handlers

use axum::{extract::State, Json};

use super::dto::RestaurantDto;
use crate::interfaces::http::common::{domain_error, ApiError};
use crate::interfaces::http::modules::BookingState;

#[utoipa::path(
    get,
    path = "/api/restaurants",
    tag = "Restaurants",
    responses(
        (status = 200, description = "All restaurants, by ID", body = Vec<RestaurantDto>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_restaurants(
    State(state): State<BookingState>,
) -> Result<Json<Vec<RestaurantDto>>, ApiError<()>> {
    let restaurants = state
        .service
        .list_restaurants()
        .await
        .map_err(domain_error)?;
    Ok(Json(restaurants.into_iter().map(RestaurantDto::from).collect()))
}
