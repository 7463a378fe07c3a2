//! The input form: wake time, sleep goal and coffee intake.
//!
//! Holds the three values the user is editing. Each trigger turns the current
//! values into an immutable [`EstimationRequest`].

use crate::config::FormDefaults;
use betterrest_domain::{CaffeineIntake, EstimationRequest, InputError, SleepGoal, WakeTime};

/// Current form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SleepForm {
    /// When the user wants to wake up
    pub wake: WakeTime,
    /// Desired amount of sleep
    pub sleep: SleepGoal,
    /// Daily coffee intake
    pub coffee: CaffeineIntake,
}

/// A stepper action: set a value or move one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<T> {
    /// Set an exact value
    Set(T),
    /// One step up
    Up,
    /// One step down
    Down,
}

impl SleepForm {
    /// Build a form from configured defaults.
    pub fn from_defaults(defaults: &FormDefaults) -> Result<Self, InputError> {
        Ok(Self {
            wake: WakeTime::parse(&defaults.wake)?,
            sleep: SleepGoal::new(defaults.sleep_hours)?,
            coffee: CaffeineIntake::new(defaults.coffee_cups)?,
        })
    }

    /// Replace the wake time.
    pub fn set_wake(&mut self, wake: WakeTime) {
        self.wake = wake;
    }

    /// Apply a sleep stepper action.
    pub fn step_sleep(&mut self, step: Step<f64>) -> Result<(), InputError> {
        self.sleep = match step {
            Step::Set(hours) => SleepGoal::new(hours)?,
            Step::Up => self.sleep.increment(),
            Step::Down => self.sleep.decrement(),
        };
        Ok(())
    }

    /// Apply a coffee stepper action.
    pub fn step_coffee(&mut self, step: Step<u32>) -> Result<(), InputError> {
        self.coffee = match step {
            Step::Set(cups) => CaffeineIntake::new(cups)?,
            Step::Up => self.coffee.increment(),
            Step::Down => self.coffee.decrement(),
        };
        Ok(())
    }

    /// Snapshot the current values as an estimation request.
    pub fn request(&self) -> EstimationRequest {
        EstimationRequest::new(self.wake, self.sleep.hours(), self.coffee.cups())
    }
}
