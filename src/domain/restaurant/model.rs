//! Restaurant domain entity

use chrono::{DateTime, Utc};

use crate::domain::availability::OperatingHours;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    /// Capacity: non-cancelled reservations allowed per slot
    pub total_tables: i32,
    /// Opening time, "HH:MM"
    pub open_time: String,
    /// Closing time, "HH:MM". May be earlier than `open_time` for
    /// restaurants that close after midnight.
    pub close_time: String,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Hourly window derived from the stored open/close strings.
    /// Unparseable strings fall back to the default window.
    pub fn operating_hours(&self) -> OperatingHours {
        OperatingHours::parse(&self.open_time, &self.close_time)
    }

    /// Whether `booked` reservations exhaust this restaurant's tables
    pub fn is_full_at(&self, booked: u64) -> bool {
        booked >= self.total_tables.max(0) as u64
    }
}

/// Fields required to register a restaurant
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: Option<String>,
    pub total_tables: i32,
    pub open_time: String,
    pub close_time: String,
}
