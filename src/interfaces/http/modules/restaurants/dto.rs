//! Restaurant DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewRestaurant, Restaurant};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub total_tables: i32,
    #[schema(example = "11:00")]
    pub open_time: String,
    #[schema(example = "22:00")]
    pub close_time: String,
    pub created_at: String,
}

impl From<Restaurant> for RestaurantDto {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
            total_tables: r.total_tables,
            open_time: r.open_time,
            close_time: r.close_time,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

fn default_open_time() -> String {
    "11:00".to_string()
}

fn default_close_time() -> String {
    "22:00".to_string()
}

/// Register a restaurant. A `close_time` earlier than `open_time` means the
/// restaurant closes after midnight.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub total_tables: i32,
    #[serde(default = "default_open_time")]
    #[validate(length(min = 1, max = 5))]
    #[schema(example = "11:00")]
    pub open_time: String,
    #[serde(default = "default_close_time")]
    #[validate(length(min = 1, max = 5))]
    #[schema(example = "22:00")]
    pub close_time: String,
}

impl From<CreateRestaurantRequest> for NewRestaurant {
    fn from(r: CreateRestaurantRequest) -> Self {
        Self {
            name: r.name,
            address: r.address,
            total_tables: r.total_tables,
            open_time: r.open_time,
            close_time: r.close_time,
        }
    }
}
