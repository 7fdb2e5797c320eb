//! Standard (z-score) feature scaler

use crate::artifact::{ensure_finite, read_json};
use crate::backend::{check_dimension, FeatureScaler};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-feature standardisation `z = (x - mean) / scale`, fitted offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(
        feature_names: Vec<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let scaler = Self {
            feature_names,
            mean,
            scale,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Load a scaler artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let scaler: StandardScaler = read_json(path)?;
        scaler.validate()?;
        log::info!(
            "loaded scaler '{}' ({} features)",
            path.display(),
            scaler.feature_names.len()
        );
        Ok(scaler)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale_factors(&self) -> &[f64] {
        &self.scale
    }

    fn validate(&self) -> Result<(), ModelError> {
        let n = self.feature_names.len();
        check_dimension(n, &self.mean)?;
        check_dimension(n, &self.scale)?;
        ensure_finite("mean", &self.mean)?;
        ensure_finite("scale", &self.scale)?;
        if let Some(idx) = self.scale.iter().position(|s| *s <= 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "scale[{idx}] for '{}' must be positive",
                self.feature_names[idx]
            )));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn scale(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_dimension(self.n_features(), features)?;
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}
