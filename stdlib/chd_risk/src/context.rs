//! Read-only assessment context: the loaded scaler and model pair.
//!
//! Built once at startup and passed by reference to every evaluation.
//! Nothing in it is mutated after construction.

use crate::assessment::Assessment;
use crate::error::RiskError;
use crate::features::{PatientFeatures, FEATURE_NAMES};
use chd_model::{
    ensure_feature_order, FeatureScaler, LogisticModel, ModelCard, ProbabilityModel,
    StandardScaler,
};
use std::path::PathBuf;

/// The one user-visible message when the artifacts cannot be used.
pub const LOAD_FAILURE_MESSAGE: &str = "Model file/scaler not found. Please verify the file paths.";

pub const DEFAULT_MODEL_PATH: &str = "assets/heart_disease_model.json";
pub const DEFAULT_SCALER_PATH: &str = "assets/heart_disease_scaler.json";

/// Locations of the two trained artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            scaler: PathBuf::from(DEFAULT_SCALER_PATH),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentContext {
    model: LogisticModel,
    scaler: StandardScaler,
}

impl AssessmentContext {
    /// Pair a model with its scaler after checking both use the expected columns.
    pub fn new(model: LogisticModel, scaler: StandardScaler) -> Result<Self, RiskError> {
        ensure_feature_order(&FEATURE_NAMES, scaler.feature_names())?;
        ensure_feature_order(&FEATURE_NAMES, model.feature_names())?;
        Ok(Self { model, scaler })
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, RiskError> {
        let model = LogisticModel::load(&paths.model)?;
        let scaler = StandardScaler::load(&paths.scaler)?;
        Self::new(model, scaler)
    }

    pub fn model(&self) -> &LogisticModel {
        &self.model
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn card(&self) -> &ModelCard {
        self.model.metadata()
    }

    /// Standardised feature vector for one patient
    pub fn normalize(&self, features: &PatientFeatures) -> Result<Vec<f64>, RiskError> {
        Ok(self.scaler.scale(&features.to_vector())?)
    }

    /// Score one patient: scale, predict, convert to percent, classify.
    pub fn evaluate(&self, features: &PatientFeatures) -> Result<Assessment, RiskError> {
        if let Some(cigs) = features.ignored_cigarettes() {
            log::warn!("ignoring {cigs} cigarettes/day for a non-smoker");
        }
        let normalized = self.normalize(features)?;
        let probability = self.model.predict_probability(&normalized)? * 100.0;
        let assessment = Assessment::new(features.clone(), probability);
        log::debug!(
            "{} scored {:.3}% -> {}",
            self.model.backend_name(),
            probability,
            assessment.tier
        );
        Ok(assessment)
    }
}
