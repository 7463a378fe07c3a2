//! BetterRest Regression Backends
//!
//! Implementations of the `SleepRegressor` trait from `betterrest-domain`.
//! Each backend predicts how many seconds a user will actually sleep given
//! their wake time, sleep goal and coffee intake.
//!
//! # Backends
//!
//! - `LinearRegressor`: Trained linear model loaded from a JSON or TOML artifact
//! - `HeuristicRegressor`: Rule-based stand-in, no artifact required
//! - `MockRegressor`: Deterministic mock for testing
//! - `OnDemandRegressor`: Loads the configured backend at call time
//!
//! # Examples
//!
//! ```
//! use betterrest_model::MockRegressor;
//! use betterrest_domain::traits::{SleepFeatures, SleepRegressor};
//!
//! let model = MockRegressor::new(28_800.0);
//! let features = SleepFeatures { wake: 25_200.0, estimated_sleep: 8.0, coffee: 1.0 };
//! assert_eq!(model.predict(&features).unwrap().actual_sleep, 28_800.0);
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod heuristic;
pub mod linear;
pub mod mock;

use std::path::PathBuf;
use thiserror::Error;

pub use backend::{load_regressor, ModelKind, OnDemandRegressor, Regressor};
pub use heuristic::HeuristicRegressor;
pub use linear::{LinearRegressor, LinearWeights, LINEAR_FORMAT};
pub use mock::MockRegressor;

/// Errors that can occur while loading or running a model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file could not be read
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        /// Artifact location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Artifact contents could not be parsed
    #[error("Failed to parse model artifact: {0}")]
    Parse(String),

    /// Artifact declares a format this crate cannot run
    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    /// Artifact weights are unusable
    #[error("Invalid model weights: {0}")]
    InvalidWeights(String),

    /// Prediction could not be produced
    #[error("Prediction failed: {0}")]
    Prediction(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for ModelError {
    fn from(e: toml::de::Error) -> Self {
        ModelError::Parse(e.to_string())
    }
}
