//! Domain layer: entities, repository interfaces and the availability engine.

pub mod availability;
pub mod customer;
pub mod repositories;
pub mod reservation;
pub mod restaurant;

pub use availability::{compute_slots, OperatingHours, Slot};
pub use customer::{Customer, CustomerRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{
    NewReservation, Reservation, ReservationDetails, ReservationRepository, ReservationStatus,
};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantRepository};

pub use crate::shared::errors::DomainError;
