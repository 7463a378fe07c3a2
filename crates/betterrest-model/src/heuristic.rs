//! Rule-based stand-in for a trained model
//!
//! Predicts the sleep goal plus a fixed penalty per cup of coffee. Useful
//! when no trained artifact is available.

use crate::ModelError;
use betterrest_domain::traits::{SleepFeatures, SleepPrediction, SleepRegressor};
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Sleep goal plus a per-cup caffeine penalty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicRegressor {
    /// Extra minutes of sleep needed per cup
    pub caffeine_penalty_minutes: f64,
}

impl HeuristicRegressor {
    /// Create a heuristic with the given per-cup penalty
    pub fn new(caffeine_penalty_minutes: f64) -> Self {
        Self {
            caffeine_penalty_minutes,
        }
    }
}

impl Default for HeuristicRegressor {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl SleepRegressor for HeuristicRegressor {
    type Error = ModelError;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        if !features.is_finite() || features.estimated_sleep < 0.0 || features.coffee < 0.0 {
            return Err(ModelError::Prediction(format!(
                "features out of domain: {:?}",
                features
            )));
        }

        let actual_sleep = features.estimated_sleep * SECONDS_PER_HOUR
            + features.coffee * self.caffeine_penalty_minutes * SECONDS_PER_MINUTE;
        Ok(SleepPrediction::new(actual_sleep))
    }
}
