//! Trained model artifacts for coronary heart disease risk scoring.
//!
//! A fitted standard scaler and a binary logistic-regression model are
//! loaded from JSON artifacts and exposed behind two small traits,
//! [`FeatureScaler`] and [`ProbabilityModel`]. Both are deterministic and
//! side-effect free once loaded.

pub mod artifact;
pub mod backend;
pub mod error;
pub mod logistic;
pub mod metadata;
pub mod scaler;

pub use artifact::ensure_feature_order;
pub use backend::{sigmoid, FeatureScaler, ProbabilityModel};
pub use error::ModelError;
pub use logistic::{Coefficient, LogisticModel};
pub use metadata::{ModelCard, ModelVersion};
pub use scaler::StandardScaler;
