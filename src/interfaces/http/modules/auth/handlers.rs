//! Login handler

use axum::{extract::State, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse};
use crate::interfaces::http::modules::BookingState;

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; existing customer updated or new one created", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn login(
    State(state): State<BookingState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError<LoginResponse>> {
    let result = state
        .service
        .login(&request.name, &request.phone)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(LoginResponse {
        user_name: result.customer.name,
        token: result.token,
        token_type: result.token_type,
        expires_in: result.expires_in,
    })))
}
