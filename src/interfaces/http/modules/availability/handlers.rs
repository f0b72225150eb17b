//! Availability handler

use axum::extract::{Query, State};
use axum::Json;
use tracing::debug;

use super::dto::{SlotDto, TimeSlotsQuery};
use crate::interfaces::http::common::{domain_error, ApiError};
use crate::interfaces::http::modules::BookingState;
use crate::shared::time::parse_date;

#[utoipa::path(
    get,
    path = "/api/time-slots",
    tag = "Availability",
    params(TimeSlotsQuery),
    responses(
        (status = 200, description = "Bookable hourly slots; empty for past dates, unknown restaurants or bad input", body = Vec<SlotDto>),
        (status = 500, description = "Booking count could not be read")
    )
)]
pub async fn get_time_slots(
    State(state): State<BookingState>,
    Query(query): Query<TimeSlotsQuery>,
) -> Result<Json<Vec<SlotDto>>, ApiError<()>> {
    let restaurant_id = query
        .restaurant_id
        .as_deref()
        .and_then(|s| s.trim().parse::<i32>().ok());
    let date = query.date.as_deref().and_then(parse_date);

    let (Some(restaurant_id), Some(date)) = (restaurant_id, date) else {
        debug!(?query, "Time slots requested with missing or invalid input");
        return Ok(Json(Vec::new()));
    };

    let slots = state
        .service
        .time_slots(restaurant_id, date)
        .await
        .map_err(domain_error)?;
    Ok(Json(slots.into_iter().map(SlotDto::from).collect()))
}
