//! Application layer - use-case orchestration over domain repositories

pub mod booking;

pub use booking::{AdminTables, BookingService, LoginResult, ReserveCommand};
