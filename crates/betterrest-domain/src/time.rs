//! Time-of-day handling
//!
//! Only the hour and minute of a wake time take part in the estimation. The
//! bedtime is the wake time minus a duration, wrapping across midnight.

use crate::inputs::InputError;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_HOUR: u32 = 3600;
const SECONDS_PER_MINUTE: u32 = 60;

/// Accepted wake time layouts, tried in order
const WAKE_FORMATS: [&str; 3] = ["%H:%M", "%I:%M %p", "%I:%M%p"];

/// The time of day the user wants to wake up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    /// Create a wake time from an hour (0-23) and minute (0-59)
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, InputError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| InputError::InvalidWakeTime(format!("{:02}:{:02}", hour, minute)))
    }

    /// Create a wake time from optional components
    ///
    /// A missing hour or minute counts as zero.
    pub fn from_components(hour: Option<u32>, minute: Option<u32>) -> Result<Self, InputError> {
        Self::from_hm(hour.unwrap_or(0), minute.unwrap_or(0))
    }

    /// Parse `HH:MM` (24-hour) or `H:MM AM` style input
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        WAKE_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
            .map(Self::from)
            .ok_or_else(|| InputError::InvalidWakeTime(trimmed.to_string()))
    }

    /// The hour component (0-23)
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute component (0-59)
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds since midnight, ignoring any seconds component
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour() * SECONDS_PER_HOUR + self.minute() * SECONDS_PER_MINUTE
    }

    /// The underlying clock time
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Subtract a duration, wrapping into the previous day when needed
    pub fn minus(&self, duration: TimeDelta) -> NaiveTime {
        self.0.overflowing_sub_signed(duration).0
    }
}

impl Default for WakeTime {
    /// 7 AM, the usual starting point for a wake-up picker
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        // Pickers only offer hours and minutes
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }
}

impl From<NaiveDateTime> for WakeTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from(datetime.time())
    }
}

impl FromStr for WakeTime {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// How clock times are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStyle {
    /// Short 12-hour style, e.g. `10:45 PM`
    #[default]
    TwelveHour,
    /// 24-hour style, e.g. `22:45`
    TwentyFourHour,
}

impl ClockStyle {
    /// Format a time of day in this style
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockStyle::TwelveHour => time.format("%-I:%M %p").to_string(),
            ClockStyle::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(WakeTime::from_hm(7, 0).unwrap().seconds_since_midnight(), 25200);
        assert_eq!(WakeTime::from_hm(0, 0).unwrap().seconds_since_midnight(), 0);
        assert_eq!(WakeTime::from_hm(23, 59).unwrap().seconds_since_midnight(), 86340);
    }

    #[test]
    fn test_missing_components_default_to_zero() {
        let wake = WakeTime::from_components(None, Some(30)).unwrap();
        assert_eq!(wake.seconds_since_midnight(), 1800);

        let wake = WakeTime::from_components(Some(6), None).unwrap();
        assert_eq!(wake.seconds_since_midnight(), 21600);

        let wake = WakeTime::from_components(None, None).unwrap();
        assert_eq!(wake.seconds_since_midnight(), 0);
    }

    #[test]
    fn test_invalid_components() {
        assert!(WakeTime::from_hm(24, 0).is_err());
        assert!(WakeTime::from_hm(7, 60).is_err());
    }

    #[test]
    fn test_seconds_are_dropped() {
        let wake = WakeTime::from(NaiveTime::from_hms_opt(7, 15, 42).unwrap());
        assert_eq!(wake.seconds_since_midnight(), 26100);
        assert_eq!(wake.time(), hm(7, 15));
    }

    #[test]
    fn test_date_portion_ignored() {
        let datetime = chrono::NaiveDate::from_ymd_opt(2024, 4, 27)
            .unwrap()
            .and_hms_opt(6, 45, 0)
            .unwrap();
        assert_eq!(WakeTime::from(datetime), WakeTime::from_hm(6, 45).unwrap());
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(WakeTime::parse("07:00").unwrap(), WakeTime::from_hm(7, 0).unwrap());
        assert_eq!(WakeTime::parse("6:30").unwrap(), WakeTime::from_hm(6, 30).unwrap());
        assert_eq!(WakeTime::parse("22:15").unwrap(), WakeTime::from_hm(22, 15).unwrap());
        assert_eq!(WakeTime::parse("7:00 AM").unwrap(), WakeTime::from_hm(7, 0).unwrap());
        assert_eq!(WakeTime::parse("11:30 PM").unwrap(), WakeTime::from_hm(23, 30).unwrap());
        assert_eq!(WakeTime::parse("12:00 AM").unwrap(), WakeTime::from_hm(0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(WakeTime::parse("").is_err());
        assert!(WakeTime::parse("seven").is_err());
        assert!(WakeTime::parse("25:00").is_err());
    }

    #[test]
    fn test_minus_wraps_midnight() {
        let wake = WakeTime::from_hm(0, 30).unwrap();
        assert_eq!(wake.minus(TimeDelta::hours(2)), hm(22, 30));

        let wake = WakeTime::from_hm(7, 0).unwrap();
        assert_eq!(wake.minus(TimeDelta::hours(8)), hm(23, 0));
        assert_eq!(wake.minus(TimeDelta::hours(31)), hm(0, 0));
    }

    #[test]
    fn test_default_is_seven() {
        assert_eq!(WakeTime::default(), WakeTime::from_hm(7, 0).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(WakeTime::from_hm(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_clock_styles() {
        assert_eq!(ClockStyle::TwelveHour.format(hm(22, 45)), "10:45 PM");
        assert_eq!(ClockStyle::TwelveHour.format(hm(7, 0)), "7:00 AM");
        assert_eq!(ClockStyle::TwelveHour.format(hm(0, 5)), "12:05 AM");
        assert_eq!(ClockStyle::TwentyFourHour.format(hm(22, 45)), "22:45");
    }
}
