//! Reservation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Reservation, ReservationDetails};

/// Book one hourly slot for the logged-in customer
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReserveRequest {
    pub restaurant_id: i32,
    /// `YYYY-MM-DD`
    #[schema(example = "2030-06-01")]
    pub date: String,
    /// Slot label as returned by `/api/time-slots`
    #[schema(example = "19:00")]
    pub time: String,
    pub party_size: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReserveResponse {
    pub reservation_id: i32,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CancelRequest {
    /// Reservation ID
    pub record_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CancelResponse {
    pub message: String,
}

/// One of the caller's reservations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MyReservationDto {
    pub record_id: i32,
    pub restaurant_name: String,
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    pub reservation_time: String,
    pub party_size: i32,
    /// `Confirmed` or `Cancelled`
    pub status: String,
}

impl From<ReservationDetails> for MyReservationDto {
    fn from(d: ReservationDetails) -> Self {
        Self {
            record_id: d.id,
            restaurant_name: d.restaurant_name,
            reservation_date: d.reservation_date.format("%Y-%m-%d").to_string(),
            reservation_time: d.reservation_time,
            party_size: d.party_size,
            status: d.status.to_string(),
        }
    }
}

/// Raw reservation row, as shown in the admin tables
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub reservation_date: String,
    pub reservation_time: String,
    pub party_size: i32,
    pub status: String,
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            restaurant_id: r.restaurant_id,
            reservation_date: r.reservation_date.format("%Y-%m-%d").to_string(),
            reservation_time: r.reservation_time,
            party_size: r.party_size,
            status: r.status.to_string(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
