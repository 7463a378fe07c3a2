//! Bedtime estimation
//!
//! Turns a wake time, a sleep goal and a caffeine count into a bedtime by
//! asking a regression model how long the user will actually sleep and
//! counting back from the wake time.
//!
//! The estimator is a pure function of its inputs and the model. It never
//! retries and never logs; callers that want the failure cause use
//! [`BedtimeEstimator::try_estimate`].

use crate::time::WakeTime;
use crate::traits::{SleepFeatures, SleepRegressor};
use chrono::{NaiveTime, TimeDelta};
use std::fmt::Display;
use thiserror::Error;

/// User-facing text for every estimation failure
pub const FAILURE_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Errors that can occur while estimating a bedtime
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// The model failed to produce a prediction
    #[error("Model error: {0}")]
    Model(String),

    /// The model produced a value that is not a usable duration
    #[error("Invalid prediction: {0} seconds")]
    InvalidPrediction(f64),
}

/// The three inputs of one estimation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationRequest {
    /// Desired wake time
    pub wake_time: WakeTime,

    /// Desired sleep in hours
    pub sleep_goal_hours: f64,

    /// Daily coffee intake in cups
    pub caffeine_cups: u32,
}

impl EstimationRequest {
    /// Create a request
    pub fn new(wake_time: WakeTime, sleep_goal_hours: f64, caffeine_cups: u32) -> Self {
        Self {
            wake_time,
            sleep_goal_hours,
            caffeine_cups,
        }
    }

    /// Model features for this request
    pub fn features(&self) -> SleepFeatures {
        SleepFeatures {
            wake: f64::from(self.wake_time.seconds_since_midnight()),
            estimated_sleep: self.sleep_goal_hours,
            coffee: f64::from(self.caffeine_cups),
        }
    }
}

/// Outcome of one estimation: exactly one of a bedtime or a failure message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimationResult {
    /// A bedtime was computed
    Success {
        /// Clock time to go to sleep
        bedtime: NaiveTime,
    },

    /// The estimation failed
    Failure {
        /// Message for the user
        reason: String,
    },
}

impl EstimationResult {
    /// The generic failure result
    pub fn failure() -> Self {
        EstimationResult::Failure {
            reason: FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether a bedtime was computed
    pub fn is_success(&self) -> bool {
        matches!(self, EstimationResult::Success { .. })
    }

    /// The bedtime, if any
    pub fn bedtime(&self) -> Option<NaiveTime> {
        match self {
            EstimationResult::Success { bedtime } => Some(*bedtime),
            EstimationResult::Failure { .. } => None,
        }
    }
}

impl From<Result<NaiveTime, EstimationError>> for EstimationResult {
    /// Collapse any error into the generic failure
    fn from(outcome: Result<NaiveTime, EstimationError>) -> Self {
        match outcome {
            Ok(bedtime) => EstimationResult::Success { bedtime },
            Err(_) => EstimationResult::failure(),
        }
    }
}

/// Computes bedtimes using a regression model
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<R> {
    model: R,
}

impl<R> BedtimeEstimator<R>
where
    R: SleepRegressor,
    R::Error: Display,
{
    /// Create an estimator backed by the given model
    pub fn new(model: R) -> Self {
        Self { model }
    }

    /// The backing model
    pub fn model(&self) -> &R {
        &self.model
    }

    /// Estimate a bedtime, keeping the failure cause
    pub fn try_estimate(&self, request: &EstimationRequest) -> Result<NaiveTime, EstimationError> {
        let prediction = self
            .model
            .predict(&request.features())
            .map_err(|e| EstimationError::Model(e.to_string()))?;

        let sleep = sleep_duration(prediction.actual_sleep)?;
        Ok(request.wake_time.minus(sleep))
    }

    /// Estimate a bedtime
    ///
    /// Every failure becomes [`EstimationResult::Failure`] carrying
    /// [`FAILURE_MESSAGE`].
    pub fn estimate(&self, request: &EstimationRequest) -> EstimationResult {
        self.try_estimate(request).into()
    }
}

/// Estimate a bedtime with a borrowed model
pub fn estimate<R>(
    model: &R,
    wake_time: WakeTime,
    sleep_goal_hours: f64,
    caffeine_cups: u32,
) -> EstimationResult
where
    R: SleepRegressor + ?Sized,
    R::Error: Display,
{
    let request = EstimationRequest::new(wake_time, sleep_goal_hours, caffeine_cups);
    BedtimeEstimator::new(model).estimate(&request)
}

/// Convert predicted seconds into a duration with millisecond precision
fn sleep_duration(seconds: f64) -> Result<TimeDelta, EstimationError> {
    if !seconds.is_finite() {
        return Err(EstimationError::InvalidPrediction(seconds));
    }

    let millis = (seconds * MILLIS_PER_SECOND).round();
    if millis.abs() >= i64::MAX as f64 {
        return Err(EstimationError::InvalidPrediction(seconds));
    }

    TimeDelta::try_milliseconds(millis as i64).ok_or(EstimationError::InvalidPrediction(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SleepPrediction;
    use std::cell::RefCell;

    /// Records the features it sees and answers with a fixed outcome
    struct StubModel {
        outcome: Result<f64, String>,
        seen: RefCell<Vec<SleepFeatures>>,
    }

    impl StubModel {
        fn returning(seconds: f64) -> Self {
            Self {
                outcome: Ok(seconds),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl SleepRegressor for StubModel {
        type Error = String;

        fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, String> {
            self.seen.borrow_mut().push(*features);
            self.outcome.clone().map(SleepPrediction::new)
        }
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn request(hour: u32, minute: u32, sleep: f64, coffee: u32) -> EstimationRequest {
        EstimationRequest::new(WakeTime::from_hm(hour, minute).unwrap(), sleep, coffee)
    }

    #[test]
    fn test_features_passed_to_model() {
        let model = StubModel::returning(28800.0);
        let estimator = BedtimeEstimator::new(&model);

        estimator.estimate(&request(7, 0, 8.0, 2));

        let seen = model.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            SleepFeatures {
                wake: 25200.0,
                estimated_sleep: 8.0,
                coffee: 2.0
            }
        );
    }

    #[test]
    fn test_midnight_wake_is_zero_seconds() {
        assert_eq!(request(0, 0, 8.0, 1).features().wake, 0.0);
    }

    #[test]
    fn test_success_subtracts_prediction() {
        let model = StubModel::returning(8.0 * 3600.0);
        let result = BedtimeEstimator::new(&model).estimate(&request(7, 0, 8.0, 1));
        assert_eq!(result, EstimationResult::Success { bedtime: hm(23, 0) });
    }

    #[test]
    fn test_midnight_wraparound() {
        let model = StubModel::returning(2.0 * 3600.0);
        let result = BedtimeEstimator::new(&model).estimate(&request(0, 30, 8.0, 1));
        assert_eq!(result.bedtime(), Some(hm(22, 30)));
    }

    #[test]
    fn test_fractional_prediction() {
        // 8h 12m 30s
        let model = StubModel::returning(29550.0);
        let bedtime = BedtimeEstimator::new(&model)
            .try_estimate(&request(6, 45, 8.0, 1))
            .unwrap();
        assert_eq!(bedtime, NaiveTime::from_hms_opt(22, 32, 30).unwrap());
    }

    #[test]
    fn test_model_failure_collapses() {
        let model = StubModel::failing("model artifact missing");
        let estimator = BedtimeEstimator::new(&model);

        let result = estimator.estimate(&request(7, 0, 8.0, 1));
        assert_eq!(
            result,
            EstimationResult::Failure {
                reason: FAILURE_MESSAGE.to_string()
            }
        );
        assert!(!result.is_success());
        assert_eq!(result.bedtime(), None);
    }

    #[test]
    fn test_try_estimate_keeps_cause() {
        let model = StubModel::failing("model artifact missing");
        let err = BedtimeEstimator::new(&model)
            .try_estimate(&request(7, 0, 8.0, 1))
            .unwrap_err();
        assert_eq!(err, EstimationError::Model("model artifact missing".to_string()));
    }

    #[test]
    fn test_non_finite_prediction_fails() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            let model = StubModel::returning(value);
            let estimator = BedtimeEstimator::new(&model);
            assert!(matches!(
                estimator.try_estimate(&request(7, 0, 8.0, 1)),
                Err(EstimationError::InvalidPrediction(_))
            ));
            assert_eq!(estimator.estimate(&request(7, 0, 8.0, 1)), EstimationResult::failure());
        }
    }

    #[test]
    fn test_boundary_inputs_succeed() {
        let model = StubModel::returning(30000.0);
        let estimator = BedtimeEstimator::new(&model);

        for (sleep, coffee) in [(4.0, 1), (12.0, 1), (4.0, 20), (12.0, 20)] {
            assert!(estimator.estimate(&request(7, 0, sleep, coffee)).is_success());
        }
    }

    #[test]
    fn test_estimator_places_no_bound_on_inputs() {
        let model = StubModel::returning(3600.0);
        let result = estimate(&model, WakeTime::default(), 30.0, 0);
        assert_eq!(result.bedtime(), Some(hm(6, 0)));
    }

    #[test]
    fn test_free_function_matches_estimator() {
        let model = StubModel::returning(27000.0);
        let wake = WakeTime::from_hm(6, 0).unwrap();
        assert_eq!(
            estimate(&model, wake, 7.5, 3),
            BedtimeEstimator::new(&model).estimate(&EstimationRequest::new(wake, 7.5, 3))
        );
    }
}
