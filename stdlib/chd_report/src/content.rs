//! Static explanatory text and page branding

use chd_model::ModelCard;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Cardiovascular Risk Assessment";
pub const SIDEBAR_HEADING: &str = "Clinical Dashboard";
pub const SIDEBAR_INTRO: &str =
    "Enter patient vitals and demographics to generate a 10-year CHD risk profile.";
pub const DISCLAIMER: &str =
    "This system is a decision-support tool for education and research. Not for clinical use.";
pub const STUDY_HEADING: &str = "About the Framingham Heart Study";
pub const STUDY_TEXT: &str = "The Framingham Heart Study is a long-term, ongoing cardiovascular \
    cohort study of residents of the city of Framingham, Massachusetts. The study began in 1948 \
    with 5,209 adult subjects from Framingham, and is now on its third generation of participants.";
pub const NO_ASSESSMENT_HINT: &str =
    "Run an assessment with patient values to generate the risk report.";

/// Page title, subtitle and attribution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
}

impl Branding {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Configured subtitle, or one derived from the model card
    pub fn subtitle(&self, card: Option<&ModelCard>) -> String {
        if let Some(s) = &self.subtitle {
            return s.clone();
        }
        match card {
            Some(card) => format!("{} Predictive Model • {}", card.study, card.algorithm),
            None => "10-Year Coronary Heart Disease Risk".to_string(),
        }
    }
}

pub fn footer_text(branding: &Branding, card: Option<&ModelCard>) -> String {
    let mut parts = Vec::new();
    if let Some(author) = &branding.author {
        parts.push(format!("© {author}"));
    }
    if let Some(card) = card {
        parts.push(format!("{} Model", card.study));
        parts.push(format!("v{}", card.version));
    }
    if parts.is_empty() {
        parts.push(branding.title().to_string());
    }
    parts.join(" • ")
}

/// Insert thousands separators: 4238 -> "4,238"
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_accuracy(card: &ModelCard) -> String {
    format!("{:.2}%", card.accuracy_percent())
}

pub fn format_accuracy_delta(delta: f64) -> String {
    format!("{:+.1}%", delta * 100.0)
}

pub fn format_auc_delta(delta: f64) -> String {
    format!("{delta:+.2}")
}
