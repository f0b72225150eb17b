//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{NewReservation, Reservation, ReservationDetails, ReservationStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a `Confirmed` reservation; the store assigns the ID
    async fn create(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Find all reservations (any status), by ID
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// A customer's reservations joined with restaurant names, newest first
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Vec<ReservationDetails>>;

    /// Number of non-cancelled reservations in one slot
    async fn count_active(
        &self,
        restaurant_id: i32,
        date: NaiveDate,
        time: &str,
    ) -> DomainResult<u64>;

    /// Persist a status change. `NotFound` when the ID is unknown.
    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()>;
}
