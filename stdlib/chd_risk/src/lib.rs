//! Coronary heart disease risk assessment.
//!
//! Builds the 14-value patient feature vector, runs it through the trained
//! scaler and logistic model held by an [`AssessmentContext`], and maps the
//! resulting probability to a [`RiskTier`].

pub mod assessment;
pub mod context;
pub mod domain;
pub mod error;
pub mod explain;
pub mod features;
pub mod tier;

pub use assessment::Assessment;
pub use context::{ArtifactPaths, AssessmentContext, LOAD_FAILURE_MESSAGE};
pub use domain::{FieldDomain, FieldKind, DOMAINS};
pub use error::RiskError;
pub use explain::{explain, Explanation, FeatureContribution};
pub use features::{Gender, PatientFeatures, FEATURE_NAMES, N_FEATURES};
pub use tier::{RiskTier, TierRecord, ELEVATED_RISK_THRESHOLD, HIGH_RISK_THRESHOLD};
