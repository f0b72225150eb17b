//! Hourly slot computation

use std::future::Future;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use super::hours::OperatingHours;
use crate::domain::{DomainResult, Restaurant};

/// One bookable hour on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Start of the slot, "HH:00"
    pub time: String,
    pub is_full: bool,
}

/// Format an unwrapped hour as a wall-clock slot label (`25` → `"01:00"`).
pub fn format_slot_time(hour: i64) -> String {
    format!("{:02}:00", hour.rem_euclid(24))
}

/// Display hours (0–23) offered on `target`, in enumeration order.
///
/// Nothing is offered for dates before today. For today, every slot whose
/// display hour is at or before the current hour is dropped, including the
/// slot currently in progress. The cutoff compares the wrapped display hour,
/// so after-midnight slots of an overnight restaurant (e.g. `"01:00"`) are
/// dropped from today's list once the clock passes 01:00.
pub fn offered_hours(hours: OperatingHours, target: NaiveDate, now: NaiveDateTime) -> Vec<i64> {
    let today = now.date();
    if target < today {
        return Vec::new();
    }

    let current_hour = i64::from(now.hour());
    hours
        .hours()
        .map(|h| h.rem_euclid(24))
        .filter(|&display_hour| !(target == today && display_hour <= current_hour))
        .collect()
}

/// Compute the bookable slots of `restaurant` on `target`.
///
/// `booked_count` is called once per offered slot with its `"HH:00"` label and
/// must return the number of non-cancelled reservations in that slot. A slot
/// is full when that count reaches the restaurant's table capacity.
pub async fn compute_slots<F, Fut>(
    restaurant: &Restaurant,
    target: NaiveDate,
    now: NaiveDateTime,
    mut booked_count: F,
) -> DomainResult<Vec<Slot>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = DomainResult<u64>>,
{
    let offered = offered_hours(restaurant.operating_hours(), target, now);

    let mut slots = Vec::with_capacity(offered.len());
    for hour in offered {
        let time = format_slot_time(hour);
        let booked = booked_count(time.clone()).await?;
        slots.push(Slot {
            is_full: restaurant.is_full_at(booked),
            time,
        });
    }
    Ok(slots)
}

// ── Tests ──────────────────────────────────────────────────────
