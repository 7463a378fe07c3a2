//! Backend selection
//!
//! Picks a regressor from configuration: the linear model (from a file or the
//! bundled artifact) or the rule-based heuristic.

use crate::heuristic::HeuristicRegressor;
use crate::linear::LinearRegressor;
use crate::ModelError;
use betterrest_domain::traits::{SleepFeatures, SleepPrediction, SleepRegressor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Trained linear regression artifact
    #[default]
    Linear,
    /// Rule-based stand-in
    Heuristic,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Linear => write!(f, "linear"),
            ModelKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Any of the artifact-free or artifact-backed regressors
#[derive(Debug, Clone, PartialEq)]
pub enum Regressor {
    /// Linear model
    Linear(LinearRegressor),
    /// Heuristic model
    Heuristic(HeuristicRegressor),
}

impl Regressor {
    /// Short description for display
    pub fn describe(&self) -> String {
        match self {
            Regressor::Linear(model) => format!("linear ({})", model.name),
            Regressor::Heuristic(model) => format!(
                "heuristic ({} min per cup)",
                model.caffeine_penalty_minutes
            ),
        }
    }
}

impl SleepRegressor for Regressor {
    type Error = ModelError;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        match self {
            Regressor::Linear(model) => model.predict(features),
            Regressor::Heuristic(model) => model.predict(features),
        }
    }
}

/// Loads the configured backend on every prediction
///
/// Mirrors a model that is constructed at call time: a missing or broken
/// artifact surfaces as a prediction error instead of failing at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnDemandRegressor {
    kind: ModelKind,
    path: Option<PathBuf>,
}

impl OnDemandRegressor {
    /// Create a regressor that loads `kind` (and `path`, if any) per call
    pub fn new(kind: ModelKind, path: Option<PathBuf>) -> Self {
        Self { kind, path }
    }

    /// Backend kind
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Artifact path, if configured
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the backend once, without predicting
    pub fn load(&self) -> Result<Regressor, ModelError> {
        load_regressor(self.kind, self.path.as_deref())
    }
}

impl SleepRegressor for OnDemandRegressor {
    type Error = ModelError;

    fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        self.load()?.predict(features)
    }
}

/// Load the configured backend
///
/// A linear backend without a path uses the bundled artifact. A path given
/// for the heuristic backend is ignored.
pub fn load_regressor(kind: ModelKind, path: Option<&Path>) -> Result<Regressor, ModelError> {
    match (kind, path) {
        (ModelKind::Linear, Some(path)) => LinearRegressor::load(path).map(Regressor::Linear),
        (ModelKind::Linear, None) => {
            debug!("No model artifact configured, using bundled model");
            LinearRegressor::bundled().map(Regressor::Linear)
        }
        (ModelKind::Heuristic, path) => {
            if let Some(path) = path {
                debug!(path = %path.display(), "Heuristic model ignores artifact path");
            }
            Ok(Regressor::Heuristic(HeuristicRegressor::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_linear() {
        let model = load_regressor(ModelKind::Linear, None).unwrap();
        assert!(matches!(model, Regressor::Linear(_)));
        assert_eq!(model.describe(), "linear (SleepCalculator)");
    }

    #[test]
    fn test_load_heuristic() {
        let model = load_regressor(ModelKind::Heuristic, Some(Path::new("ignored.json"))).unwrap();
        assert_eq!(model, Regressor::Heuristic(HeuristicRegressor::default()));
    }

    #[test]
    fn test_load_missing_artifact() {
        let result = load_regressor(ModelKind::Linear, Some(Path::new("/nonexistent/model.json")));
        assert!(matches!(result, Err(ModelError::Io { .. })));
    }

    #[test]
    fn test_regressor_dispatch() {
        let features = SleepFeatures { wake: 25_200.0, estimated_sleep: 8.0, coffee: 1.0 };
        let heuristic = Regressor::Heuristic(HeuristicRegressor::new(0.0));
        assert_eq!(heuristic.predict(&features).unwrap().actual_sleep, 28_800.0);
    }

    #[test]
    fn test_on_demand_success() {
        let model = OnDemandRegressor::new(ModelKind::Heuristic, None);
        let features = SleepFeatures { wake: 0.0, estimated_sleep: 8.0, coffee: 0.0 };
        assert_eq!(model.predict(&features).unwrap().actual_sleep, 28_800.0);
    }

    #[test]
    fn test_on_demand_missing_artifact_fails_at_prediction() {
        let model = OnDemandRegressor::new(
            ModelKind::Linear,
            Some(PathBuf::from("/nonexistent/model.json")),
        );
        let features = SleepFeatures { wake: 0.0, estimated_sleep: 8.0, coffee: 1.0 };
        assert!(matches!(model.predict(&features), Err(ModelError::Io { .. })));
        assert_eq!(model.path(), Some(Path::new("/nonexistent/model.json")));
    }

    #[test]
    fn test_model_kind_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: ModelKind,
        }

        let parsed: Wrapper = toml::from_str("kind = \"heuristic\"").unwrap();
        assert_eq!(parsed.kind, ModelKind::Heuristic);
        assert_eq!(ModelKind::Linear.to_string(), "linear");
    }
}
