//! Per-feature contributions to one patient's log-odds

use crate::context::AssessmentContext;
use crate::domain::DOMAINS;
use crate::error::RiskError;
use crate::features::PatientFeatures;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub feature: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub standardized: f64,
    pub weight: f64,
    /// `weight * standardized`, in logit units
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub intercept: f64,
    pub logit: f64,
    /// Strongest absolute contribution first
    pub contributions: Vec<FeatureContribution>,
}

impl Explanation {
    /// Contributions that push risk up, strongest first
    pub fn risk_drivers(&self, n: usize) -> Vec<&FeatureContribution> {
        self.contributions
            .iter()
            .filter(|c| c.contribution > 0.0)
            .take(n)
            .collect()
    }
}

pub fn explain(
    context: &AssessmentContext,
    features: &PatientFeatures,
) -> Result<Explanation, RiskError> {
    let raw = features.to_vector();
    let standardized = context.normalize(features)?;
    let model = context.model();

    let mut contributions: Vec<FeatureContribution> = DOMAINS
        .iter()
        .zip(raw.iter())
        .zip(standardized.iter().zip(model.coefficients()))
        .map(|((domain, value), (z, w))| FeatureContribution {
            feature: domain.name,
            label: domain.short_label,
            value: *value,
            standardized: *z,
            weight: *w,
            contribution: w * z,
        })
        .collect();
    contributions.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));

    let logit = model.intercept() + contributions.iter().map(|c| c.contribution).sum::<f64>();
    Ok(Explanation {
        intercept: model.intercept(),
        logit,
        contributions,
    })
}
