//! Self-contained HTML dashboard.
//!
//! Sidebar, header and footer are always rendered. The three content
//! sections (patient evaluation, model performance, study details) need a
//! loaded [`AssessmentContext`]; without one the page shows a single error
//! banner in their place.

use crate::bars::{importance_bars, render_importance_svg, TOP_FACTORS};
use crate::content::{self, Branding};
use crate::gauge::render_gauge_svg;
use crate::theme::GLOBAL_CSS;
use chd_model::ModelCard;
use chd_risk::{Assessment, AssessmentContext, Explanation, PatientFeatures};

/// Everything the dashboard page shows
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub branding: &'a Branding,
    /// `None` when the artifacts could not be loaded
    pub context: Option<&'a AssessmentContext>,
    pub assessment: Option<&'a Assessment>,
    pub explanation: Option<&'a Explanation>,
    /// Banner text shown when `context` is `None`
    pub unavailable_message: &'a str,
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_dashboard(view: &DashboardView<'_>) -> String {
    let card = view.context.map(|c| c.card());
    let body = match view.context {
        Some(ctx) => render_sections(view, ctx),
        None => {
            log::debug!("rendering dashboard without a model");
            format!(
                r#"<div class="error-banner">{}</div>"#,
                escape(view.unavailable_message)
            )
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="app">
        {sidebar}
        <main class="main">
            {header}
            {body}
            <div class="footer">{footer}</div>
        </main>
    </div>
</body>
</html>"#,
        title = escape(view.branding.title()),
        css = GLOBAL_CSS,
        sidebar = render_sidebar(card),
        header = render_header(view.branding, card),
        body = body,
        footer = escape(&content::footer_text(view.branding, card)),
    )
}

fn render_header(branding: &Branding, card: Option<&ModelCard>) -> String {
    let creator = branding
        .author
        .as_deref()
        .map(|a| format!(r#"<div class="creator-tag">{}</div>"#, escape(a)))
        .unwrap_or_default();
    format!(
        r#"<div class="dashboard-header">
    <div>
        <h1 class="header-title">{}</h1>
        <p class="header-subtitle">{}</p>
    </div>
    {creator}
</div>"#,
        escape(branding.title()),
        escape(&branding.subtitle(card)),
    )
}

fn render_sidebar(card: Option<&ModelCard>) -> String {
    let specs = match card {
        Some(card) => format!(
            r#"<h5>Model Specs</h5>
<p class="caption">Algorithm: {}</p>
<p class="caption">Training Accuracy: {}</p>
<p class="caption">Validation: {} samples</p>"#,
            escape(&card.algorithm),
            content::format_accuracy(card),
            content::group_thousands(card.validation_samples),
        ),
        None => r#"<p class="caption">Model unavailable</p>"#.to_string(),
    };
    format!(
        r#"<aside class="sidebar">
    <h3>{}</h3>
    <p>{}</p>
    <hr>
    {specs}
    <hr>
    <div class="info">{}</div>
</aside>"#,
        content::SIDEBAR_HEADING,
        content::SIDEBAR_INTRO,
        content::DISCLAIMER,
    )
}

fn render_sections(view: &DashboardView<'_>, ctx: &AssessmentContext) -> String {
    format!(
        r##"<nav class="tabs">
    <a href="#evaluation">Patient Evaluation</a>
    <a href="#performance">Model Performance</a>
    <a href="#study">Study Details</a>
</nav>
<section id="evaluation">
{}
</section>
<section id="performance">
{}
</section>
<section id="study">
{}
</section>"##,
        render_evaluation(view),
        render_performance(ctx),
        render_study(ctx.card()),
    )
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!(
        r#"<div class="field"><span class="field-label">{}</span><span class="field-value">{}</span></div>"#,
        escape(label),
        escape(&value.to_string())
    )
}

fn check(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn render_inputs(p: &PatientFeatures) -> String {
    let smoking = if p.current_smoker {
        "Current Smoker"
    } else {
        "Non-Smoker"
    };
    let mut profile = vec![
        field("Gender", p.gender),
        field("Age", p.age),
        field("Smoking History", smoking),
    ];
    if p.current_smoker {
        profile.push(field("Cigarettes / Day", p.cigs_per_day));
    }
    let vitals = [
        field("Systolic BP (mmHg)", p.sys_bp),
        field("Diastolic BP (mmHg)", p.dia_bp),
        field("BMI (kg/m²)", format!("{:.1}", p.bmi)),
        field("Resting Heart Rate (bpm)", p.heart_rate),
    ];
    let labs = [
        field("Total Cholesterol (mg/dL)", p.tot_chol),
        field("Glucose (mg/dL)", p.glucose),
    ];
    let history = [
        field("BP Meds", check(p.bp_meds)),
        field("Diabetes", check(p.diabetes)),
        field("Prior Stroke", check(p.prevalent_stroke)),
        field("Hypertension", check(p.prevalent_hyp)),
    ];
    format!(
        r#"<div class="columns-3">
    <div class="input-card"><div class="section-title">01. Patient Profile</div>{}</div>
    <div class="input-card"><div class="section-title">02. Clinical Vitals</div>{}</div>
    <div class="input-card"><div class="section-title">03. Lab Results &amp; History</div>{}<div class="section-title" style="margin-top:1rem;">04. Medical History</div>{}</div>
</div>"#,
        profile.concat(),
        vitals.concat(),
        labs.concat(),
        history.concat(),
    )
}

fn render_report(assessment: &Assessment) -> String {
    let color = assessment.record.severity_color;
    format!(
        r#"<div class="report-container" style="border-top-color: {color};">
    <p class="risk-label">10-Year CHD Probability</p>
    <p class="risk-value" style="color: {color};">{}</p>
    <p class="risk-tier" style="color: {color};">{}</p>
    <p class="risk-recommendation">{}</p>
</div>"#,
        assessment.probability_display(),
        assessment.record.label,
        assessment.record.recommendation,
    )
}

fn render_drivers(explanation: &Explanation) -> String {
    let items: String = explanation
        .risk_drivers(3)
        .iter()
        .map(|c| {
            format!(
                "<li>{} <span class=\"caption\">(+{:.2} log-odds)</span></li>",
                escape(c.label),
                c.contribution
            )
        })
        .collect();
    if items.is_empty() {
        return String::new();
    }
    format!(r#"<h4>Key risk drivers for this patient</h4><ul>{items}</ul>"#)
}

fn render_evaluation(view: &DashboardView<'_>) -> String {
    let Some(assessment) = view.assessment else {
        return format!(
            r#"<div class="info">{}</div>"#,
            content::NO_ASSESSMENT_HINT
        );
    };
    let drivers = view.explanation.map(render_drivers).unwrap_or_default();
    format!(
        r#"{}
<hr>
<h3>Assessment Report</h3>
<div class="columns-1-2">
    <div>{}{}</div>
    <div>{}</div>
</div>"#,
        render_inputs(&assessment.features),
        render_report(assessment),
        drivers,
        render_gauge_svg(assessment.probability, assessment.tier),
    )
}

fn metric(label: &str, value: &str, delta: Option<(String, bool)>) -> String {
    let delta = match delta {
        Some((text, up)) => format!(
            r#"<div class="metric-delta {}">{}</div>"#,
            if up { "up" } else { "down" },
            escape(&text)
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div>{delta}</div>"#,
        escape(label),
        escape(value),
    )
}

fn render_performance(ctx: &AssessmentContext) -> String {
    let card = ctx.card();
    let accuracy = metric(
        "Overall Accuracy",
        &content::format_accuracy(card),
        card.accuracy_delta
            .map(|d| (content::format_accuracy_delta(d), d >= 0.0)),
    );
    let auc = metric(
        "ROC-AUC Score",
        &format!("{:.3}", card.roc_auc),
        card.roc_auc_delta
            .map(|d| (content::format_auc_delta(d), d >= 0.0)),
    );
    let dataset = format!(
        r#"<div class="metric"><div class="metric-label">Dataset Size</div><div class="metric-value">{}</div><div class="metric-delta">Patients</div></div>"#,
        content::group_thousands(card.dataset_size)
    );
    let bars = importance_bars(ctx.model(), TOP_FACTORS);
    format!(
        r#"<h3>Model Performance Metrics</h3>
<div class="columns-3">{accuracy}{auc}{dataset}</div>
<h3>Feature Importance Analysis</h3>
{}"#,
        render_importance_svg(&bars)
    )
}

fn render_study(card: &ModelCard) -> String {
    format!(
        r#"<h3>{}</h3>
<p>{}</p>
<div class="info">Predictions come from a {} model fitted to {} participants of the {}.</div>"#,
        content::STUDY_HEADING,
        content::STUDY_TEXT,
        escape(&card.algorithm.to_lowercase()),
        content::group_thousands(card.dataset_size),
        escape(&card.study),
    )
}
