//! Risk tier classification of a 10-year CHD probability.
//!
//! The probability is expressed in percent, `p` in [0, 100]. Tier
//! boundaries belong to the upper tier: 20 is elevated, 50 is high.

use serde::{Deserialize, Serialize};

/// Probabilities below this are low risk
pub const ELEVATED_RISK_THRESHOLD: f64 = 20.0;
/// Probabilities at or above this are high risk
pub const HIGH_RISK_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "LOW_RISK")]
    Low,
    #[serde(rename = "ELEVATED_RISK")]
    Elevated,
    #[serde(rename = "HIGH_RISK")]
    High,
}

/// Label, severity colour and recommendation shown for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierRecord {
    pub label: &'static str,
    pub severity_color: &'static str,
    pub recommendation: &'static str,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Elevated, RiskTier::High];

    /// Map a probability in percent to its tier.
    ///
    /// NaN compares false against both thresholds and lands in `High`.
    pub fn classify(probability: f64) -> Self {
        if probability < ELEVATED_RISK_THRESHOLD {
            RiskTier::Low
        } else if probability < HIGH_RISK_THRESHOLD {
            RiskTier::Elevated
        } else {
            RiskTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::Elevated => "ELEVATED RISK",
            RiskTier::High => "HIGH RISK",
        }
    }

    pub fn severity_color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#059669",
            RiskTier::Elevated => "#d97706",
            RiskTier::High => "#dc2626",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Patient falls within the low-risk category. Maintain healthy lifestyle."
            }
            RiskTier::Elevated => {
                "Moderate risk factors identified. Lifestyle modification recommended."
            }
            RiskTier::High => {
                "Significant risk factors present. Clinical intervention may be required."
            }
        }
    }

    /// Light background used for this tier's band on the gauge
    pub fn band_color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#ecfdf5",
            RiskTier::Elevated => "#fffbeb",
            RiskTier::High => "#fef2f2",
        }
    }

    /// Half-open probability range `[start, end)`; the high tier includes 100.
    pub fn range(&self) -> (f64, f64) {
        match self {
            RiskTier::Low => (0.0, ELEVATED_RISK_THRESHOLD),
            RiskTier::Elevated => (ELEVATED_RISK_THRESHOLD, HIGH_RISK_THRESHOLD),
            RiskTier::High => (HIGH_RISK_THRESHOLD, 100.0),
        }
    }

    pub fn record(&self) -> TierRecord {
        TierRecord {
            label: self.label(),
            severity_color: self.severity_color(),
            recommendation: self.recommendation(),
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
