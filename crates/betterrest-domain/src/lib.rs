//! BetterRest Domain Layer
//!
//! This crate contains the bedtime estimation core and the value types it
//! operates on. It depends only on `chrono` (time-of-day arithmetic) and
//! `thiserror`, and defines the trait interface that regression backends
//! implement.
//!
//! ## Key Concepts
//!
//! - **Wake time**: The clock time the user wants to wake up at
//! - **Sleep goal**: Desired hours of sleep, collected on quarter-hour steps
//! - **Caffeine intake**: Daily coffee cups
//! - **Regressor**: An opaque trained model predicting actual sleep seconds
//! - **Estimation result**: Either a bedtime or a fixed failure message
//!
//! ## Architecture
//!
//! - Pure computation only: no I/O, no logging, no hidden state
//! - Model backends live in `betterrest-model`
//! - Presentation lives in `betterrest-cli`
//!
//! # Examples
//!
//! ```
//! use betterrest_domain::traits::{SleepFeatures, SleepPrediction, SleepRegressor};
//! use betterrest_domain::{BedtimeEstimator, EstimationRequest, WakeTime};
//! use chrono::NaiveTime;
//!
//! struct EightHours;
//!
//! impl SleepRegressor for EightHours {
//!     type Error = String;
//!
//!     fn predict(&self, _features: &SleepFeatures) -> Result<SleepPrediction, String> {
//!         Ok(SleepPrediction::new(8.0 * 3600.0))
//!     }
//! }
//!
//! let estimator = BedtimeEstimator::new(EightHours);
//! let request = EstimationRequest::new(WakeTime::from_hm(7, 0).unwrap(), 8.0, 1);
//! let result = estimator.estimate(&request);
//! assert_eq!(result.bedtime(), NaiveTime::from_hms_opt(23, 0, 0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod estimator;
pub mod inputs;
pub mod message;
pub mod time;
pub mod traits;

// Re-exports for convenience
pub use estimator::{
    estimate, BedtimeEstimator, EstimationError, EstimationRequest, EstimationResult,
    FAILURE_MESSAGE,
};
pub use inputs::{CaffeineIntake, InputError, SleepGoal};
pub use message::{AlertMessage, ERROR_TITLE, SUCCESS_TITLE};
pub use time::{ClockStyle, WakeTime};
