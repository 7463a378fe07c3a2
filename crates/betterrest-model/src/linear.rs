//! Linear regression backend
//!
//! Formula: `actual_sleep = intercept + wake·w + estimated_sleep·s + coffee·c`
//!
//! Artifacts are small JSON or TOML documents tagged with [`LINEAR_FORMAT`].
//! A default artifact is compiled into the crate and used when no path is
//! configured.

use crate::ModelError;
use betterrest_domain::traits::{SleepFeatures, SleepPrediction, SleepRegressor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Format tag every linear artifact must carry
pub const LINEAR_FORMAT: &str = "linear-regression-v1";

const BUNDLED_ARTIFACT: &str = include_str!("../models/sleep_calculator.json");

/// Per-feature coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearWeights {
    /// Coefficient for wake time (seconds since midnight)
    pub wake: f64,
    /// Coefficient for the sleep goal (hours)
    pub estimated_sleep: f64,
    /// Coefficient for coffee cups
    pub coffee: f64,
}

/// A trained linear regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Artifact format tag
    pub format: String,

    /// Human-readable model name
    #[serde(default = "default_name")]
    pub name: String,

    /// Constant term (seconds)
    pub intercept: f64,

    /// Feature coefficients
    pub weights: LinearWeights,
}

impl LinearRegressor {
    /// Create a model from raw weights
    pub fn new(intercept: f64, weights: LinearWeights) -> Result<Self, ModelError> {
        let model = Self {
            format: LINEAR_FORMAT.to_string(),
            name: default_name(),
            intercept,
            weights,
        };
        model.validate()?;
        Ok(model)
    }

    /// The artifact shipped with the crate
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_json(BUNDLED_ARTIFACT)
    }

    /// Load an artifact from disk
    ///
    /// Files ending in `.toml` are read as TOML, everything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let model = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_json(&contents)?
        };

        debug!(path = %path.display(), name = %model.name, "Model artifact loaded");
        Ok(model)
    }

    /// Parse a JSON artifact
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Parse a TOML artifact
    pub fn from_toml(toml_str: &str) -> Result<Self, ModelError> {
        let model: Self = toml::from_str(toml_str)?;
        model.validate()?;
        Ok(model)
    }

    /// Serialize to a JSON artifact
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the format tag and that every weight is finite
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format != LINEAR_FORMAT {
            return Err(ModelError::UnsupportedFormat(self.format.clone()));
        }

        let terms = [
            ("intercept", self.intercept),
            ("wake", self.weights.wake),
            ("estimated_sleep", self.weights.estimated_sleep),
            ("coffee", self.weights.coffee),
        ];
        for (name, value) in terms {
            if !value.is_finite() {
                return Err(ModelError::InvalidWeights(format!("{} is {}", name, value)));
            }
        }

        Ok(())
    }
}

impl SleepRegressor for LinearRegressor {
    type Error = ModelError;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        if !features.is_finite() {
            return Err(ModelError::Prediction(format!(
                "non-finite features: {:?}",
                features
            )));
        }

        let actual_sleep = self.intercept
            + self.weights.wake * features.wake
            + self.weights.estimated_sleep * features.estimated_sleep
            + self.weights.coffee * features.coffee;

        if !actual_sleep.is_finite() {
            return Err(ModelError::Prediction(format!(
                "prediction overflowed for {:?}",
                features
            )));
        }

        debug!(actual_sleep, "Linear prediction");
        Ok(SleepPrediction::new(actual_sleep))
    }
}

fn default_name() -> String {
    "SleepCalculator".to_string()
}
