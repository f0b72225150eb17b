//! Reservation HTTP handlers
//!
//! Identity comes from the session middleware: [`CurrentCustomer`] where a
//! login is required, [`RequestContext`] where anonymous callers are allowed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::*;
use crate::application::ReserveCommand;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse};
use crate::interfaces::http::middleware::{CurrentCustomer, RequestContext};
use crate::interfaces::http::modules::BookingState;
use crate::shared::time::parse_date;

#[utoipa::path(
    post,
    path = "/api/reserve",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = ReserveRequest,
    responses(
        (status = 200, description = "Reservation confirmed", body = ApiResponse<ReserveResponse>),
        (status = 400, description = "Invalid date"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Restaurant not found"),
        (status = 409, description = "Slot is fully booked")
    )
)]
pub async fn reserve(
    State(state): State<BookingState>,
    CurrentCustomer(customer): CurrentCustomer,
    Json(request): Json<ReserveRequest>,
) -> Result<Json<ApiResponse<ReserveResponse>>, ApiError<ReserveResponse>> {
    let Some(date) = parse_date(&request.date) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                request.date
            ))),
        ));
    };

    let reservation = state
        .service
        .reserve(
            customer.customer_id,
            ReserveCommand {
                restaurant_id: request.restaurant_id,
                date,
                time: request.time,
                party_size: request.party_size,
            },
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(ReserveResponse {
        reservation_id: reservation.id,
        message: "Reservation confirmed".to_string(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/my-reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's reservations, newest first; empty when not logged in", body = Vec<MyReservationDto>)
    )
)]
pub async fn my_reservations(
    State(state): State<BookingState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Json<Vec<MyReservationDto>>, ApiError<()>> {
    let Some(customer_id) = ctx.customer_id() else {
        return Ok(Json(Vec::new()));
    };

    let reservations = state
        .service
        .my_reservations(customer_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(
        reservations.into_iter().map(MyReservationDto::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/cancel",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = CancelRequest,
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<CancelResponse>),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn cancel(
    State(state): State<BookingState>,
    CurrentCustomer(customer): CurrentCustomer,
    Json(request): Json<CancelRequest>,
) -> Result<Json<ApiResponse<CancelResponse>>, ApiError<CancelResponse>> {
    state
        .service
        .cancel(customer.customer_id, request.record_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(CancelResponse {
        message: "Reservation cancelled".to_string(),
    })))
}
