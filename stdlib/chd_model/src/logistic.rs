//! Binary logistic regression over standardised features: p = sigmoid(w·z + b)

use crate::artifact::{ensure_finite, read_json};
use crate::backend::{check_dimension, sigmoid, ProbabilityModel};
use crate::error::ModelError;
use crate::metadata::ModelCard;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fitted logistic-regression classifier with its model card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    metadata: ModelCard,
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// One named model coefficient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficient {
    pub feature: String,
    pub weight: f64,
}

impl LogisticModel {
    pub fn new(
        metadata: ModelCard,
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        let model = Self {
            metadata,
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load a model artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let model: LogisticModel = read_json(path)?;
        model.validate()?;
        log::info!(
            "loaded model '{}' v{} from '{}'",
            model.metadata.name,
            model.metadata.version,
            path.display()
        );
        Ok(model)
    }

    pub fn metadata(&self) -> &ModelCard {
        &self.metadata
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Raw log-odds before the logistic link
    pub fn decision_function(&self, normalized: &[f64]) -> Result<f64, ModelError> {
        check_dimension(self.coefficients.len(), normalized)?;
        let dot: f64 = normalized
            .iter()
            .zip(self.coefficients.iter())
            .map(|(z, w)| z * w)
            .sum();
        Ok(dot + self.intercept)
    }

    /// The `n` coefficients with the largest magnitude, strongest first.
    pub fn top_coefficients(&self, n: usize) -> Vec<Coefficient> {
        let mut all: Vec<Coefficient> = self
            .feature_names
            .iter()
            .zip(self.coefficients.iter())
            .map(|(feature, weight)| Coefficient {
                feature: feature.clone(),
                weight: *weight,
            })
            .collect();
        // stable sort keeps artifact order among equal magnitudes
        all.sort_by(|a, b| b.weight.abs().total_cmp(&a.weight.abs()));
        all.truncate(n);
        all
    }

    fn validate(&self) -> Result<(), ModelError> {
        check_dimension(self.feature_names.len(), &self.coefficients)?;
        ensure_finite("coefficients", &self.coefficients)?;
        ensure_finite("intercept", &[self.intercept])?;
        Ok(())
    }
}

impl ProbabilityModel for LogisticModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_probability(&self, normalized: &[f64]) -> Result<f64, ModelError> {
        let logit = self.decision_function(normalized)?;
        Ok(sigmoid(logit).clamp(0.0, 1.0))
    }

    fn backend_name(&self) -> &str {
        "logistic_regression"
    }
}
