//! Result of one evaluation

use crate::features::PatientFeatures;
use crate::tier::{RiskTier, TierRecord};
use serde::Serialize;

/// Probability and tier for one patient, with the inputs that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub features: PatientFeatures,
    /// 10-year CHD probability in percent, within [0, 100]
    pub probability: f64,
    pub tier: RiskTier,
    pub record: TierRecord,
}

impl Assessment {
    /// Build from a probability in percent; out-of-range values are clamped.
    pub fn new(features: PatientFeatures, probability: f64) -> Self {
        let probability = probability.clamp(0.0, 100.0);
        let tier = RiskTier::classify(probability);
        Self {
            features,
            probability,
            tier,
            record: tier.record(),
        }
    }

    /// Probability formatted to one decimal place, e.g. "12.3%"
    pub fn probability_display(&self) -> String {
        format!("{:.1}%", self.probability)
    }
}
