//! Wall-clock time as the clock hands see it.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveTime, Timelike};

/// Hour / minute / second in the local calendar.
///
/// Fields are always in range: hour 0–23, minute and second 0–59. Leap
/// seconds reported by the platform are folded into second 59.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// Builds a time, wrapping each field into its range.
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour: hour % 24, minute: minute % 60, second: second % 60 }
    }

    pub const fn midnight() -> Self {
        Self::new(0, 0, 0)
    }

    /// Extracts the fields from any chrono time-like value.
    pub fn from_timelike(t: &impl Timelike) -> Self {
        Self::new(t.hour(), t.minute(), t.second().min(59))
    }

    /// Current time in the system's local time zone.
    pub fn now_local() -> Self {
        Self::from_timelike(&Local::now())
    }

    /// Hour on a 12-hour dial, 0–11 (12 o'clock is 0).
    #[inline]
    pub const fn hour12(self) -> u32 {
        self.hour % 12
    }

    /// Seconds since midnight.
    #[inline]
    pub const fn seconds_since_midnight(self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Error returned when a `HH:MM[:SS]` string cannot be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeParseError(pub String);

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time of day '{}': expected HH:MM or HH:MM:SS", self.0)
    }
}

impl std::error::Error for TimeParseError {}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(|t| Self::from_timelike(&t))
            .map_err(|_| TimeParseError(s.to_owned()))
    }
}

// ── TimeSource ────────────────────────────────────────────────────────────

/// Where the redraw loop gets "now" from.
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// The system wall clock in the local time zone.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::now_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedClock(pub TimeOfDay);

impl TimeSource for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_out_of_range_fields() {
        assert_eq!(TimeOfDay::new(25, 61, 60), TimeOfDay { hour: 1, minute: 1, second: 0 });
    }

    #[test]
    fn hour12_folds_afternoon() {
        assert_eq!(TimeOfDay::new(14, 30, 45).hour12(), 2);
        assert_eq!(TimeOfDay::new(12, 0, 0).hour12(), 0);
        assert_eq!(TimeOfDay::midnight().hour12(), 0);
    }

    #[test]
    fn parses_with_and_without_seconds() {
        assert_eq!("14:30:45".parse::<TimeOfDay>(), Ok(TimeOfDay::new(14, 30, 45)));
        assert_eq!(" 09:05 ".parse::<TimeOfDay>(), Ok(TimeOfDay::new(9, 5, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert!("25:00:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(3, 4, 5).to_string(), "03:04:05");
    }

    #[test]
    fn from_naive_time() {
        let t = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
        assert_eq!(TimeOfDay::from_timelike(&t), TimeOfDay::new(23, 59, 58));
    }

    #[test]
    fn fixed_clock_is_fixed() {
        let clock = FixedClock(TimeOfDay::new(6, 0, 0));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().seconds_since_midnight(), 6 * 3600);
    }
}
