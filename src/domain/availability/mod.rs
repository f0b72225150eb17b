//! Availability engine
//!
//! Turns a restaurant's stored operating hours and capacity into the list of
//! hourly slots a customer may book on a given date.

pub mod hours;
pub mod slots;

pub use hours::{OperatingHours, DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR};
pub use slots::{compute_slots, format_slot_time, offered_hours, Slot};
