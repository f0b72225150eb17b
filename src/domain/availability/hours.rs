//! Operating-hours parsing

use std::ops::Range;

/// Opening hour used when the stored strings cannot be parsed
pub const DEFAULT_OPEN_HOUR: i64 = 11;
/// Closing hour used when the stored strings cannot be parsed
pub const DEFAULT_CLOSE_HOUR: i64 = 22;

/// Hourly operating window.
///
/// `close_hour` is unwrapped: a restaurant open 22:00–02:00 has
/// `open_hour = 22` and `close_hour = 26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    open: i64,
    close: i64,
}

impl OperatingHours {
    /// Parse `"HH:MM"` open/close strings.
    ///
    /// Only the hour component is read. If either string fails to parse,
    /// both fall back to the default window. A close hour earlier than the
    /// open hour means the restaurant closes after midnight.
    pub fn parse(open_time: &str, close_time: &str) -> Self {
        match (parse_hour(open_time), parse_hour(close_time)) {
            (Some(open), Some(close)) if close < open => Self {
                open,
                close: close + 24,
            },
            (Some(open), Some(close)) => Self { open, close },
            _ => Self::default(),
        }
    }

    pub fn open_hour(&self) -> i64 {
        self.open
    }

    pub fn close_hour(&self) -> i64 {
        self.close
    }

    /// Unwrapped hours from open (inclusive) to close (exclusive)
    pub fn hours(&self) -> Range<i64> {
        self.open..self.close
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_HOUR,
            close: DEFAULT_CLOSE_HOUR,
        }
    }
}

fn parse_hour(s: &str) -> Option<i64> {
    s.split(':').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hour_component() {
        let h = OperatingHours::parse("09:00", "17:30");
        assert_eq!(h.open_hour(), 9);
        assert_eq!(h.close_hour(), 17);
        assert_eq!(h.hours().count(), 8);
    }

    #[test]
    fn close_before_open_wraps_past_midnight() {
        let h = OperatingHours::parse("22:00", "02:00");
        assert_eq!(h.open_hour(), 22);
        assert_eq!(h.close_hour(), 26);
        assert_eq!(h.hours().count(), 4);
    }

    #[test]
    fn malformed_open_time_falls_back_to_defaults() {
        assert_eq!(
            OperatingHours::parse("noon", "23:00"),
            OperatingHours::default()
        );
        assert_eq!(OperatingHours::default().hours(), 11..22);
    }

    #[test]
    fn malformed_close_time_falls_back_to_defaults() {
        assert_eq!(OperatingHours::parse("08:00", ""), OperatingHours::default());
        assert_eq!(
            OperatingHours::parse("08:00", "late"),
            OperatingHours::default()
        );
    }

    #[test]
    fn hour_without_minutes_is_accepted() {
        let h = OperatingHours::parse("7", "15");
        assert_eq!(h.hours(), 7..15);
    }

    #[test]
    fn equal_open_and_close_is_an_empty_window() {
        let h = OperatingHours::parse("12:00", "12:00");
        assert_eq!(h.hours().count(), 0);
    }
}
