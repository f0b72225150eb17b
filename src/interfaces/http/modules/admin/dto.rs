//! Admin DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::AdminTables;
use crate::domain::Customer;
use crate::interfaces::http::modules::reservations::ReservationDto;
use crate::interfaces::http::modules::restaurants::RestaurantDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone_number: c.phone_number,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

/// Every row of every table
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminTablesDto {
    pub customers: Vec<CustomerDto>,
    pub restaurants: Vec<RestaurantDto>,
    pub reservations: Vec<ReservationDto>,
}

impl From<AdminTables> for AdminTablesDto {
    fn from(t: AdminTables) -> Self {
        Self {
            customers: t.customers.into_iter().map(Into::into).collect(),
            restaurants: t.restaurants.into_iter().map(Into::into).collect(),
            reservations: t.reservations.into_iter().map(Into::into).collect(),
        }
    }
}
