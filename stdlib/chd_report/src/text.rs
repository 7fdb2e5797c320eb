//! Terminal and JSON renderings of an assessment and of the model card

use crate::bars::ImportanceBar;
use crate::content::{self, STUDY_HEADING, STUDY_TEXT};
use chd_model::ModelCard;
use chd_risk::{Assessment, Explanation, ELEVATED_RISK_THRESHOLD, HIGH_RISK_THRESHOLD};
use std::fmt::Write;

const GAUGE_WIDTH: usize = 50;

/// One-line bar for a probability in percent. `#` marks the filled part,
/// `|` the tier thresholds and `.` the rest.
pub fn text_gauge(probability: f64, width: usize) -> String {
    let filled = ((probability.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let marker = |t: f64| ((t / 100.0) * width as f64).round() as usize;
    let markers = [marker(ELEVATED_RISK_THRESHOLD), marker(HIGH_RISK_THRESHOLD)];
    let bar: String = (0..width)
        .map(|i| {
            if i < filled {
                '#'
            } else if markers.contains(&i) {
                '|'
            } else {
                '.'
            }
        })
        .collect();
    format!("[{bar}]")
}

pub fn render_text_report(assessment: &Assessment, explanation: Option<&Explanation>) -> String {
    let mut out = String::new();
    let f = &assessment.features;
    let _ = writeln!(out, "Assessment Report");
    let _ = writeln!(out, "=================");
    let _ = writeln!(
        out,
        "Patient: {}, {} years, {}",
        f.gender,
        f.age,
        if f.current_smoker {
            format!("smoker ({} cigarettes/day)", f.cigs_per_day)
        } else {
            "non-smoker".to_string()
        }
    );
    let _ = writeln!(
        out,
        "Vitals:  BP {}/{} mmHg, BMI {:.1}, heart rate {} bpm",
        f.sys_bp, f.dia_bp, f.bmi, f.heart_rate
    );
    let _ = writeln!(
        out,
        "Labs:    cholesterol {} mg/dL, glucose {} mg/dL",
        f.tot_chol, f.glucose
    );
    let history: Vec<&str> = [
        (f.bp_meds, "BP meds"),
        (f.diabetes, "diabetes"),
        (f.prevalent_stroke, "prior stroke"),
        (f.prevalent_hyp, "hypertension"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| *name)
    .collect();
    let _ = writeln!(
        out,
        "History: {}",
        if history.is_empty() {
            "none".to_string()
        } else {
            history.join(", ")
        }
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "10-Year CHD Probability: {}",
        assessment.probability_display()
    );
    let _ = writeln!(out, "{}", text_gauge(assessment.probability, GAUGE_WIDTH));
    let _ = writeln!(out, "{}", assessment.record.label);
    let _ = writeln!(out, "{}", assessment.record.recommendation);

    if let Some(explanation) = explanation {
        let drivers = explanation.risk_drivers(3);
        if !drivers.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Key risk drivers:");
            for c in drivers {
                let _ = writeln!(out, "  {:<18} +{:.2} log-odds", c.label, c.contribution);
            }
        }
    }
    out
}

pub fn render_json_report(assessment: &Assessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}

pub fn render_model_text(card: &ModelCard, bars: &[ImportanceBar]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (v{})", card.name, card.version);
    let _ = writeln!(out, "Algorithm:          {}", card.algorithm);
    let accuracy = match card.accuracy_delta {
        Some(d) => format!(
            "{} ({})",
            content::format_accuracy(card),
            content::format_accuracy_delta(d)
        ),
        None => content::format_accuracy(card),
    };
    let _ = writeln!(out, "Overall Accuracy:   {accuracy}");
    let auc = match card.roc_auc_delta {
        Some(d) => format!("{:.3} ({})", card.roc_auc, content::format_auc_delta(d)),
        None => format!("{:.3}", card.roc_auc),
    };
    let _ = writeln!(out, "ROC-AUC Score:      {auc}");
    let _ = writeln!(
        out,
        "Dataset Size:       {} Patients",
        content::group_thousands(card.dataset_size)
    );
    let _ = writeln!(
        out,
        "Validation:         {} samples",
        content::group_thousands(card.validation_samples)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Top {} Predictive Risk Factors:", bars.len());
    for bar in bars {
        let _ = writeln!(out, "  {:<18} {:+.3}", bar.label, bar.weight);
    }
    out
}

pub fn render_about_text() -> String {
    format!(
        "{STUDY_HEADING}\n\n{STUDY_TEXT}\n\n{}\n",
        content::DISCLAIMER
    )
}
