//! Model card and versioning carried inside the model artifact

use serde::{Deserialize, Serialize};

/// Semantic version for models
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ModelVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let parts: Vec<&str> = s.trim_start_matches('v').split('.').collect();
        if parts.len() != 3 {
            return Err(format!("Invalid version format: {s}"));
        }
        let component = |label: &str, raw: &str| {
            raw.parse::<u32>()
                .map_err(|_| format!("Invalid {label} version: {raw}"))
        };
        Ok(Self::new(
            component("major", parts[0])?,
            component("minor", parts[1])?,
            component("patch", parts[2])?,
        ))
    }
}

impl std::fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for ModelVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModelVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ModelVersion::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Descriptive and validation metadata for a trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCard {
    /// Display name
    pub name: String,
    pub version: ModelVersion,
    /// Algorithm family, e.g. "Logistic Regression"
    pub algorithm: String,
    /// Hold-out accuracy as a fraction in [0, 1]
    pub training_accuracy: f64,
    /// Change in accuracy against the previous release, as a fraction
    #[serde(default)]
    pub accuracy_delta: Option<f64>,
    pub roc_auc: f64,
    #[serde(default)]
    pub roc_auc_delta: Option<f64>,
    /// Number of samples in the validation split
    pub validation_samples: u32,
    /// Number of patients in the full study dataset
    pub dataset_size: u32,
    /// Source cohort, e.g. "Framingham Heart Study"
    pub study: String,
}

impl ModelCard {
    pub fn accuracy_percent(&self) -> f64 {
        self.training_accuracy * 100.0
    }
}
