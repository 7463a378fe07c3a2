//! Trait definitions for external interactions
//!
//! The regression model is the only collaborator the estimator talks to.
//! Implementations live in `betterrest-model`.

/// Input features for a single sleep prediction
///
/// Units follow the trained model: `wake` is seconds since midnight,
/// `estimated_sleep` is hours, `coffee` is a cup count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepFeatures {
    /// Wake time as seconds since midnight
    pub wake: f64,

    /// Desired sleep in hours
    pub estimated_sleep: f64,

    /// Daily coffee intake in cups
    pub coffee: f64,
}

impl SleepFeatures {
    /// Whether every feature is a finite number
    pub fn is_finite(&self) -> bool {
        self.wake.is_finite() && self.estimated_sleep.is_finite() && self.coffee.is_finite()
    }
}

/// Output of a sleep prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepPrediction {
    /// Predicted actual sleep in seconds
    pub actual_sleep: f64,
}

impl SleepPrediction {
    /// Create a prediction from a number of seconds
    pub fn new(actual_sleep: f64) -> Self {
        Self { actual_sleep }
    }
}

/// Trait for regression models predicting actual sleep
///
/// Implemented by the infrastructure layer (betterrest-model). A backend may
/// fail to load or to predict; the estimator treats every error the same way.
pub trait SleepRegressor {
    /// Error type for prediction failures
    type Error;

    /// Predict actual sleep (seconds) for the given features
    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error>;
}

impl<R: SleepRegressor + ?Sized> SleepRegressor for &R {
    type Error = R::Error;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        (**self).predict(features)
    }
}

impl<R: SleepRegressor + ?Sized> SleepRegressor for Box<R> {
    type Error = R::Error;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        (**self).predict(features)
    }
}
