//! Booking use cases: login, availability, reservations, admin views

pub mod service;

pub use service::{AdminTables, BookingService, LoginResult, ReserveCommand};
