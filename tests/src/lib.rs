//! Shared fixtures for the integration tests: the shipped artifacts and a
//! few reference patients with known scores.

use chd_risk::{ArtifactPaths, AssessmentContext, Gender, PatientFeatures, RiskError};
use std::path::PathBuf;

pub fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

pub fn shipped_paths() -> ArtifactPaths {
    let dir = assets_dir();
    ArtifactPaths {
        model: dir.join("heart_disease_model.json"),
        scaler: dir.join("heart_disease_scaler.json"),
    }
}

pub fn shipped_context() -> Result<AssessmentContext, RiskError> {
    AssessmentContext::load(&shipped_paths())
}

/// Scores about 29% with the shipped model.
pub fn hypertensive_patient() -> PatientFeatures {
    PatientFeatures {
        gender: Gender::Male,
        age: 58,
        prevalent_hyp: true,
        tot_chol: 250,
        sys_bp: 150,
        dia_bp: 90,
        bmi: 28.0,
        heart_rate: 75,
        glucose: 100,
        ..Default::default()
    }
}

/// Every field at the risky end of its domain.
pub fn extreme_patient() -> PatientFeatures {
    PatientFeatures {
        gender: Gender::Male,
        age: 80,
        current_smoker: true,
        cigs_per_day: 70,
        bp_meds: true,
        prevalent_stroke: true,
        prevalent_hyp: true,
        diabetes: true,
        tot_chol: 600,
        sys_bp: 250,
        dia_bp: 140,
        bmi: 50.0,
        heart_rate: 120,
        glucose: 400,
    }
}

/// Every field at the low end of its domain.
pub fn minimal_patient() -> PatientFeatures {
    PatientFeatures {
        gender: Gender::Female,
        age: 30,
        current_smoker: false,
        cigs_per_day: 0,
        bp_meds: false,
        prevalent_stroke: false,
        prevalent_hyp: false,
        diabetes: false,
        tot_chol: 100,
        sys_bp: 80,
        dia_bp: 40,
        bmi: 15.0,
        heart_rate: 40,
        glucose: 40,
    }
}
