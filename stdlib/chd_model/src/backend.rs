//! Inference traits shared by the scaler and model artifacts

use crate::error::ModelError;

/// Logistic function
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// A fitted transform from raw feature values to the model's input space.
pub trait FeatureScaler: Send + Sync {
    /// Number of features the scaler was fitted on
    fn n_features(&self) -> usize;

    /// Transform one raw feature vector
    fn scale(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// A binary classifier returning the probability of the positive class.
pub trait ProbabilityModel: Send + Sync {
    /// Number of inputs the model expects
    fn n_features(&self) -> usize;

    /// Probability of the positive class, in [0, 1]
    fn predict_probability(&self, normalized: &[f64]) -> Result<f64, ModelError>;

    /// Backend identifier used in logs
    fn backend_name(&self) -> &str;
}

pub(crate) fn check_dimension(expected: usize, values: &[f64]) -> Result<(), ModelError> {
    if values.len() != expected {
        return Err(ModelError::DimensionMismatch {
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}
