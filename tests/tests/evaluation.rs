use chd_model::sigmoid;
use chd_risk::{explain, PatientFeatures, RiskTier};
use chdrisk_tests::{extreme_patient, hypertensive_patient, minimal_patient, shipped_context};
use pretty_assertions::assert_eq;

#[test]
fn test_default_patient_is_low_risk() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ctx = shipped_context().unwrap();
    let a = ctx.evaluate(&PatientFeatures::default()).unwrap();
    assert!((a.probability - 10.355).abs() < 0.01, "got {}", a.probability);
    assert_eq!(a.tier, RiskTier::Low);
    assert_eq!(a.record.label, "LOW RISK");
    assert_eq!(a.record.severity_color, "#059669");
    assert_eq!(a.probability_display(), "10.4%");
}

#[test]
fn test_hypertensive_patient_is_elevated() {
    let ctx = shipped_context().unwrap();
    let a = ctx.evaluate(&hypertensive_patient()).unwrap();
    assert!(a.probability > 25.0 && a.probability < 33.0, "got {}", a.probability);
    assert_eq!(a.tier, RiskTier::Elevated);
    assert_eq!(a.record.label, "ELEVATED RISK");
    assert_eq!(a.record.severity_color, "#d97706");
}

#[test]
fn test_extreme_patient_is_high_risk() {
    let ctx = shipped_context().unwrap();
    let a = ctx.evaluate(&extreme_patient()).unwrap();
    assert!(a.probability > 99.0 && a.probability <= 100.0);
    assert_eq!(a.tier, RiskTier::High);
    assert!(a.record.recommendation.contains("Clinical intervention"));
}

#[test]
fn test_minimal_patient_scores_below_one_percent() {
    let ctx = shipped_context().unwrap();
    let a = ctx.evaluate(&minimal_patient()).unwrap();
    assert!(a.probability > 0.0 && a.probability < 1.0);
    assert_eq!(a.tier, RiskTier::Low);
}

#[test]
fn test_cigarettes_are_ignored_for_non_smokers() {
    let ctx = shipped_context().unwrap();
    let with_count = PatientFeatures {
        current_smoker: false,
        cigs_per_day: 40,
        ..Default::default()
    };
    let without = PatientFeatures {
        cigs_per_day: 0,
        ..with_count.clone()
    };
    let a = ctx.evaluate(&with_count).unwrap();
    let b = ctx.evaluate(&without).unwrap();
    assert_eq!(a.probability, b.probability);
}

#[test]
fn test_context_is_reusable_and_deterministic() {
    let ctx = shipped_context().unwrap();
    let patient = hypertensive_patient();
    let first = ctx.evaluate(&patient).unwrap();
    for _ in 0..10 {
        assert_eq!(ctx.evaluate(&patient).unwrap(), first);
    }
}

#[test]
fn test_explanation_reproduces_the_probability() {
    let ctx = shipped_context().unwrap();
    let patient = hypertensive_patient();
    let a = ctx.evaluate(&patient).unwrap();
    let e = explain(&ctx, &patient).unwrap();
    assert!((sigmoid(e.logit) * 100.0 - a.probability).abs() < 1e-9);

    let drivers: Vec<&str> = e.risk_drivers(3).iter().map(|c| c.feature).collect();
    assert_eq!(drivers, vec!["age", "male", "sysBP"]);
}
