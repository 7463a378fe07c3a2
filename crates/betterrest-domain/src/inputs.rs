//! Collector-side input values
//!
//! The estimator accepts any sleep goal and cup count. The form that collects
//! them restricts sleep to 4-12 hours in quarter-hour steps and coffee to 1-20
//! cups; these types enforce those bounds and provide stepper behavior.

use std::fmt;
use thiserror::Error;

/// Errors raised when collecting user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Wake time could not be read
    #[error("Invalid wake time: '{0}' (expected HH:MM or H:MM AM/PM)")]
    InvalidWakeTime(String),

    /// Sleep goal outside the accepted range
    #[error("Sleep goal {0} is outside {min}-{max} hours", min = SleepGoal::MIN_HOURS, max = SleepGoal::MAX_HOURS)]
    SleepOutOfRange(f64),

    /// Sleep goal not on a quarter-hour step
    #[error("Sleep goal {0} must be a multiple of {step} hours", step = SleepGoal::STEP_HOURS)]
    SleepOffStep(f64),

    /// Cup count outside the accepted range
    #[error("Coffee intake {0} is outside {min}-{max} cups", min = CaffeineIntake::MIN_CUPS, max = CaffeineIntake::MAX_CUPS)]
    CaffeineOutOfRange(u32),
}

/// Desired sleep duration, held as a count of quarter hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SleepGoal {
    quarters: u32,
}

impl SleepGoal {
    /// Smallest accepted goal
    pub const MIN_HOURS: f64 = 4.0;
    /// Largest accepted goal
    pub const MAX_HOURS: f64 = 12.0;
    /// Stepper increment
    pub const STEP_HOURS: f64 = 0.25;

    const QUARTERS_PER_HOUR: u32 = 4;
    const MIN_QUARTERS: u32 = 16;
    const MAX_QUARTERS: u32 = 48;
    const DEFAULT_QUARTERS: u32 = 32;

    /// Create a sleep goal, rejecting values off the quarter-hour grid or out of range
    pub fn new(hours: f64) -> Result<Self, InputError> {
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(InputError::SleepOutOfRange(hours));
        }

        let scaled = hours * f64::from(Self::QUARTERS_PER_HOUR);
        if (scaled - scaled.round()).abs() > 1e-9 {
            return Err(InputError::SleepOffStep(hours));
        }

        // In range, so the cast cannot truncate
        Ok(Self { quarters: scaled.round() as u32 })
    }

    /// Goal in hours
    pub fn hours(&self) -> f64 {
        f64::from(self.quarters) / f64::from(Self::QUARTERS_PER_HOUR)
    }

    /// One step up, clamped at the maximum
    pub fn increment(self) -> Self {
        Self { quarters: (self.quarters + 1).min(Self::MAX_QUARTERS) }
    }

    /// One step down, clamped at the minimum
    pub fn decrement(self) -> Self {
        Self { quarters: self.quarters.saturating_sub(1).max(Self::MIN_QUARTERS) }
    }
}

impl Default for SleepGoal {
    fn default() -> Self {
        Self { quarters: Self::DEFAULT_QUARTERS }
    }
}

impl fmt::Display for SleepGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.hours())
    }
}

/// Daily coffee intake in cups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaffeineIntake {
    cups: u32,
}

impl CaffeineIntake {
    /// Smallest accepted intake
    pub const MIN_CUPS: u32 = 1;
    /// Largest accepted intake
    pub const MAX_CUPS: u32 = 20;

    /// Create an intake, rejecting counts outside 1-20
    pub fn new(cups: u32) -> Result<Self, InputError> {
        if !(Self::MIN_CUPS..=Self::MAX_CUPS).contains(&cups) {
            return Err(InputError::CaffeineOutOfRange(cups));
        }
        Ok(Self { cups })
    }

    /// Number of cups
    pub fn cups(&self) -> u32 {
        self.cups
    }

    /// One cup more, clamped at the maximum
    pub fn increment(self) -> Self {
        Self { cups: (self.cups + 1).min(Self::MAX_CUPS) }
    }

    /// One cup less, clamped at the minimum
    pub fn decrement(self) -> Self {
        Self { cups: self.cups.saturating_sub(1).max(Self::MIN_CUPS) }
    }
}

impl Default for CaffeineIntake {
    fn default() -> Self {
        Self { cups: Self::MIN_CUPS }
    }
}

impl fmt::Display for CaffeineIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cups == 1 {
            write!(f, "1 cup")
        } else {
            write!(f, "{} cups", self.cups)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_goal_bounds() {
        assert!(SleepGoal::new(4.0).is_ok());
        assert!(SleepGoal::new(12.0).is_ok());
        assert_eq!(SleepGoal::new(3.75), Err(InputError::SleepOutOfRange(3.75)));
        assert_eq!(SleepGoal::new(12.25), Err(InputError::SleepOutOfRange(12.25)));
        assert!(SleepGoal::new(f64::NAN).is_err());
    }

    #[test]
    fn test_sleep_goal_step() {
        assert_eq!(SleepGoal::new(7.75).unwrap().hours(), 7.75);
        assert_eq!(SleepGoal::new(8.1), Err(InputError::SleepOffStep(8.1)));
    }

    #[test]
    fn test_sleep_goal_stepper_clamps() {
        let goal = SleepGoal::new(12.0).unwrap();
        assert_eq!(goal.increment().hours(), 12.0);

        let goal = SleepGoal::new(4.0).unwrap();
        assert_eq!(goal.decrement().hours(), 4.0);

        let goal = SleepGoal::default();
        assert_eq!(goal.hours(), 8.0);
        assert_eq!(goal.increment().hours(), 8.25);
        assert_eq!(goal.decrement().hours(), 7.75);
    }

    #[test]
    fn test_sleep_goal_display() {
        assert_eq!(SleepGoal::default().to_string(), "8 hours");
        assert_eq!(SleepGoal::new(6.5).unwrap().to_string(), "6.5 hours");
    }

    #[test]
    fn test_caffeine_bounds() {
        assert!(CaffeineIntake::new(1).is_ok());
        assert!(CaffeineIntake::new(20).is_ok());
        assert_eq!(CaffeineIntake::new(0), Err(InputError::CaffeineOutOfRange(0)));
        assert_eq!(CaffeineIntake::new(21), Err(InputError::CaffeineOutOfRange(21)));
    }

    #[test]
    fn test_caffeine_stepper_clamps() {
        assert_eq!(CaffeineIntake::default().decrement().cups(), 1);
        assert_eq!(CaffeineIntake::new(20).unwrap().increment().cups(), 20);
        assert_eq!(CaffeineIntake::new(3).unwrap().increment().cups(), 4);
    }

    #[test]
    fn test_caffeine_inflection() {
        assert_eq!(CaffeineIntake::new(1).unwrap().to_string(), "1 cup");
        assert_eq!(CaffeineIntake::new(2).unwrap().to_string(), "2 cups");
    }

    #[test]
    fn test_error_messages() {
        let err = InputError::CaffeineOutOfRange(30);
        assert_eq!(err.to_string(), "Coffee intake 30 is outside 1-20 cups");

        let err = InputError::SleepOutOfRange(2.0);
        assert_eq!(err.to_string(), "Sleep goal 2 is outside 4-12 hours");
    }
}
