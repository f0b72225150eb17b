//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Table is held for the customer
    Confirmed,
    /// Cancelled by the customer; no longer counts toward capacity
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Read a persisted status. Anything but `"Confirmed"` is cancelled.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "Confirmed" => Self::Confirmed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Table reservation for one hourly slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub reservation_date: NaiveDate,
    /// Hour-aligned slot, "HH:00"
    pub reservation_time: String,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Release the table. Idempotent.
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }

    /// Active reservations occupy a table
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }
}

/// Fields supplied when booking; status starts as `Confirmed`.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub party_size: i32,
}

/// Reservation joined with its restaurant, as listed to the customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDetails {
    pub id: i32,
    pub restaurant_name: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub party_size: i32,
    pub status: ReservationStatus,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation {
            id: 1,
            customer_id: 7,
            restaurant_id: 3,
            reservation_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            reservation_time: "19:00".into(),
            party_size: 4,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn new_reservation_is_active() {
        let r = sample_reservation();
        assert!(r.is_active());
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn cancel_sets_cancelled() {
        let mut r = sample_reservation();
        r.cancel();
        assert_eq!(r.status, ReservationStatus::Cancelled);
        assert!(!r.is_active());
    }

    #[test]
    fn status_strings_match_stored_values() {
        assert_eq!(ReservationStatus::Confirmed.as_str(), "Confirmed");
        assert_eq!(ReservationStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!(
            ReservationStatus::from_stored("Confirmed"),
            ReservationStatus::Confirmed
        );
    }

    #[test]
    fn unknown_status_defaults_to_cancelled() {
        let s = ReservationStatus::from_stored("Pending");
        assert_eq!(s, ReservationStatus::Cancelled);
    }
}
