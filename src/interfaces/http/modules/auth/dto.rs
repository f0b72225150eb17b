//! Login DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identify by phone number; the name is (re)recorded on every login
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "0912-345-678")]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user_name: String,
    /// Session token; send as `Authorization: Bearer <token>`
    pub token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}
