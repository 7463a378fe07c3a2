//! Mock regressor for deterministic testing

use crate::ModelError;
use betterrest_domain::traits::{SleepFeatures, SleepPrediction, SleepRegressor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock regressor returning a fixed prediction or a fixed error
///
/// Clones share the call counter and the record of the last features seen.
///
/// # Examples
///
/// ```
/// use betterrest_model::MockRegressor;
/// use betterrest_domain::traits::{SleepFeatures, SleepRegressor};
///
/// let features = SleepFeatures { wake: 0.0, estimated_sleep: 8.0, coffee: 1.0 };
///
/// let model = MockRegressor::failing("artifact missing");
/// assert!(model.predict(&features).is_err());
/// assert_eq!(model.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockRegressor {
    outcome: Result<f64, String>,
    call_count: Arc<AtomicUsize>,
    last_features: Arc<Mutex<Option<SleepFeatures>>>,
}

impl MockRegressor {
    /// Create a mock that always predicts the given number of seconds
    pub fn new(actual_sleep: f64) -> Self {
        Self::with_outcome(Ok(actual_sleep))
    }

    /// Create a mock whose every prediction fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(Err(message.into()))
    }

    fn with_outcome(outcome: Result<f64, String>) -> Self {
        Self {
            outcome,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_features: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// Features passed to the most recent prediction
    pub fn last_features(&self) -> Option<SleepFeatures> {
        self.last_features.lock().ok().and_then(|last| *last)
    }
}

impl Default for MockRegressor {
    /// Eight hours of sleep
    fn default() -> Self {
        Self::new(28_800.0)
    }
}

impl SleepRegressor for MockRegressor {
    type Error = ModelError;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_features.lock() {
            *last = Some(*features);
        }

        self.outcome
            .clone()
            .map(SleepPrediction::new)
            .map_err(ModelError::Prediction)
    }
}
