use chd_report::{
    importance_bars, render_dashboard, render_text_report, Branding, DashboardView,
};
use chd_risk::{explain, PatientFeatures, LOAD_FAILURE_MESSAGE};
use chdrisk_tests::{extreme_patient, shipped_context};

#[test]
fn test_full_dashboard_sections() {
    let ctx = shipped_context().unwrap();
    let patient = extreme_patient();
    let assessment = ctx.evaluate(&patient).unwrap();
    let explanation = explain(&ctx, &patient).unwrap();
    let branding = Branding {
        author: Some("Cardiology Lab".into()),
        ..Default::default()
    };
    let page = render_dashboard(&DashboardView {
        branding: &branding,
        context: Some(&ctx),
        assessment: Some(&assessment),
        explanation: Some(&explanation),
        unavailable_message: LOAD_FAILURE_MESSAGE,
    });

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"<div class="report-container" style="border-top-color: #dc2626;">"#));
    assert!(page.contains("HIGH RISK"));
    assert!(page.contains("Key risk drivers"));
    assert!(page.contains("86.60%"));
    assert!(page.contains("+1.2%"));
    assert!(page.contains("0.728"));
    assert!(page.contains("-0.01"));
    assert!(page.contains("4,238"));
    assert!(page.contains("Top 5 Predictive Risk Factors"));
    assert!(page.contains("About the Framingham Heart Study"));
    assert!(page.contains(r#"<div class="creator-tag">Cardiology Lab</div>"#));
    assert!(page.contains("Framingham Heart Study Model • v1.0.0"));
    assert!(!page.contains("error-banner\">"));
    assert_eq!(page.matches("<svg").count(), 2);
}

#[test]
fn test_dashboard_without_assessment_shows_hint() {
    let ctx = shipped_context().unwrap();
    let branding = Branding::default();
    let page = render_dashboard(&DashboardView {
        branding: &branding,
        context: Some(&ctx),
        assessment: None,
        explanation: None,
        unavailable_message: LOAD_FAILURE_MESSAGE,
    });
    assert!(page.contains("Run an assessment"));
    assert!(!page.contains(r#"<div class="report-container""#));
    assert!(page.contains("Top 5 Predictive Risk Factors"));
}

#[test]
fn test_failed_load_page_has_only_the_error() {
    let branding = Branding::default();
    let page = render_dashboard(&DashboardView {
        branding: &branding,
        context: None,
        assessment: None,
        explanation: None,
        unavailable_message: LOAD_FAILURE_MESSAGE,
    });
    assert!(page.contains(LOAD_FAILURE_MESSAGE));
    assert!(!page.contains(r#"<div class="report-container""#));
    assert!(!page.contains("<svg"));
    assert!(!page.contains("Model Performance Metrics"));
}

#[test]
fn test_importance_follows_loaded_coefficients() {
    let ctx = shipped_context().unwrap();
    let bars = importance_bars(ctx.model(), 5);
    assert_eq!(bars.len(), 5);
    assert_eq!(bars[0].label, "Age");
    assert!(bars
        .windows(2)
        .all(|w| w[0].weight.abs() >= w[1].weight.abs()));
}

#[test]
fn test_text_report_for_default_patient() {
    let ctx = shipped_context().unwrap();
    let patient = PatientFeatures::default();
    let a = ctx.evaluate(&patient).unwrap();
    let report = render_text_report(&a, Some(&explain(&ctx, &patient).unwrap()));
    assert!(report.contains("10-Year CHD Probability: 10.4%"));
    assert!(report.contains("LOW RISK"));
    assert!(report.contains("Maintain healthy lifestyle"));
}
