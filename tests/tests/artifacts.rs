use chd_model::ModelError;
use chd_risk::{ArtifactPaths, AssessmentContext, RiskError, FEATURE_NAMES};
use chdrisk_tests::{assets_dir, shipped_context, shipped_paths};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn copy_assets(dir: &Path) -> ArtifactPaths {
    let paths = ArtifactPaths {
        model: dir.join("model.json"),
        scaler: dir.join("scaler.json"),
    };
    let shipped = shipped_paths();
    fs::copy(&shipped.model, &paths.model).unwrap();
    fs::copy(&shipped.scaler, &paths.scaler).unwrap();
    paths
}

fn edit_json(path: &Path, edit: impl FnOnce(&mut Value)) {
    let mut value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    edit(&mut value);
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

#[test]
fn test_shipped_artifacts_load() {
    let ctx = shipped_context().unwrap();
    assert_eq!(ctx.model().feature_names(), FEATURE_NAMES);
    assert_eq!(ctx.scaler().feature_names(), FEATURE_NAMES);
    assert_eq!(ctx.card().dataset_size, 4238);
    assert_eq!(ctx.card().version.to_string(), "1.0.0");
    assert!(assets_dir().join("heart_disease_model.json").exists());
}

#[test]
fn test_missing_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = copy_assets(dir.path());
    paths.model = dir.path().join("absent.json");
    let err = AssessmentContext::load(&paths).unwrap_err();
    assert!(matches!(err, RiskError::Model(ModelError::Io { .. })));
}

#[test]
fn test_missing_scaler_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = copy_assets(dir.path());
    paths.scaler = dir.path().join("absent.json");
    assert!(AssessmentContext::load(&paths).is_err());
}

#[test]
fn test_corrupted_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_assets(dir.path());
    fs::write(&paths.model, "{ not json").unwrap();
    let err = AssessmentContext::load(&paths).unwrap_err();
    assert!(matches!(err, RiskError::Model(ModelError::Parse { .. })));
}

#[test]
fn test_reordered_scaler_columns_fail() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_assets(dir.path());
    edit_json(&paths.scaler, |v| {
        if let Some(names) = v["feature_names"].as_array_mut() {
            names.swap(8, 9);
        }
    });
    let err = AssessmentContext::load(&paths).unwrap_err();
    assert!(matches!(
        err,
        RiskError::Model(ModelError::FeatureMismatch { .. })
    ));
}

#[test]
fn test_short_coefficient_vector_fails() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_assets(dir.path());
    edit_json(&paths.model, |v| {
        if let Some(w) = v["coefficients"].as_array_mut() {
            w.pop();
        }
    });
    assert!(AssessmentContext::load(&paths).is_err());
}

#[test]
fn test_zero_scale_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_assets(dir.path());
    edit_json(&paths.scaler, |v| {
        v["scale"][3] = Value::from(0.0);
    });
    let err = AssessmentContext::load(&paths).unwrap_err();
    assert!(matches!(
        err,
        RiskError::Model(ModelError::InvalidParameter(_))
    ));
}
