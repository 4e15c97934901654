//! Small helpers shared by the front end

use chrono::{DateTime, Local, TimeZone, Utc};
use std::time::{Duration, Instant};

/// Delay used to debounce scroll handling
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);

/// Trailing-edge debounce
///
/// Each [`trigger`](Debouncer::trigger) restarts the wait; [`ready`](Debouncer::ready)
/// fires once when `wait` has passed since the last trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_trigger: None,
        }
    }

    /// An event arrived at `now`
    pub fn trigger(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    /// Whether a call is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Returns true exactly once per burst, after the quiet period
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(at) if now.saturating_duration_since(at) >= self.wait => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }
}

/// Long-form US date, e.g. "October 18, 2026"
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Long-form local date for a Unix millisecond timestamp
pub fn format_timestamp_ms(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(date) => format_date(&date.with_timezone(&Local)),
        None => timestamp_ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let start = Instant::now();

        assert!(!debouncer.ready(start));

        debouncer.trigger(start);
        debouncer.trigger(start + Duration::from_millis(5));
        assert!(!debouncer.ready(start + Duration::from_millis(12)), "restarted by second trigger");
        assert!(debouncer.ready(start + Duration::from_millis(15)));
        assert!(!debouncer.ready(start + Duration::from_millis(30)), "fires once per burst");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2026, 10, 8, 12, 0, 0).single().expect("valid date");
        assert_eq!(format_date(&date), "October 8, 2026");
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp_ms(i64::MAX), i64::MAX.to_string());
    }
}
