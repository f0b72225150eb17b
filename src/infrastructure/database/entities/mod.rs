//! Database entities module

pub mod customer;
pub mod reservation;
pub mod restaurant;

pub use customer::Entity as Customer;
pub use reservation::Entity as Reservation;
pub use restaurant::Entity as Restaurant;
