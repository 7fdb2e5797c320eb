//! Patient feature vector for 10-year CHD risk scoring.
//!
//! One [`PatientFeatures`] is built per assessment from the current form
//! state, turned into a 14-value vector in [`FEATURE_NAMES`] order, and
//! discarded once the probability is known.

use crate::domain::{self, FieldDomain, DEFAULT_SMOKER_CIGS_PER_DAY, DOMAINS, SMOKER_CIGS_PER_DAY};
use crate::error::RiskError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Number of model inputs
pub const N_FEATURES: usize = 14;

/// Column order expected by the model and scaler artifacts
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "male",
    "age",
    "currentSmoker",
    "cigsPerDay",
    "BPMeds",
    "prevalentStroke",
    "prevalentHyp",
    "diabetes",
    "totChol",
    "sysBP",
    "diaBP",
    "BMI",
    "heartRate",
    "glucose",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Demographic, lifestyle, vital-sign and lab attributes of one patient.
///
/// Missing fields in a JSON form take the dashboard defaults. A smoker
/// without a cigarette count gets [`DEFAULT_SMOKER_CIGS_PER_DAY`]; anyone
/// else gets zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientFeatures {
    pub gender: Gender,
    /// Years
    pub age: u8,
    pub current_smoker: bool,
    /// Only meaningful when `current_smoker` is set
    pub cigs_per_day: u8,
    pub bp_meds: bool,
    pub prevalent_stroke: bool,
    pub prevalent_hyp: bool,
    pub diabetes: bool,
    /// mg/dL
    pub tot_chol: u16,
    /// mmHg
    pub sys_bp: u16,
    /// mmHg
    pub dia_bp: u16,
    /// kg/m²
    pub bmi: f64,
    /// Resting, bpm
    pub heart_rate: u8,
    /// mg/dL
    pub glucose: u16,
}

impl Default for PatientFeatures {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 50,
            current_smoker: false,
            cigs_per_day: 0,
            bp_meds: false,
            prevalent_stroke: false,
            prevalent_hyp: false,
            diabetes: false,
            tot_chol: 200,
            sys_bp: 120,
            dia_bp: 80,
            bmi: 25.0,
            heart_rate: 72,
            glucose: 85,
        }
    }
}

/// Wire shape of a JSON patient form
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PatientForm {
    gender: Gender,
    age: u8,
    current_smoker: bool,
    cigs_per_day: Option<u8>,
    bp_meds: bool,
    prevalent_stroke: bool,
    prevalent_hyp: bool,
    diabetes: bool,
    tot_chol: u16,
    sys_bp: u16,
    dia_bp: u16,
    bmi: f64,
    heart_rate: u8,
    glucose: u16,
}

impl Default for PatientForm {
    fn default() -> Self {
        let d = PatientFeatures::default();
        Self {
            gender: d.gender,
            age: d.age,
            current_smoker: d.current_smoker,
            cigs_per_day: None,
            bp_meds: d.bp_meds,
            prevalent_stroke: d.prevalent_stroke,
            prevalent_hyp: d.prevalent_hyp,
            diabetes: d.diabetes,
            tot_chol: d.tot_chol,
            sys_bp: d.sys_bp,
            dia_bp: d.dia_bp,
            bmi: d.bmi,
            heart_rate: d.heart_rate,
            glucose: d.glucose,
        }
    }
}

impl From<PatientForm> for PatientFeatures {
    fn from(form: PatientForm) -> Self {
        let cigs_per_day = form.cigs_per_day.unwrap_or(if form.current_smoker {
            DEFAULT_SMOKER_CIGS_PER_DAY
        } else {
            0
        });
        Self {
            gender: form.gender,
            age: form.age,
            current_smoker: form.current_smoker,
            cigs_per_day,
            bp_meds: form.bp_meds,
            prevalent_stroke: form.prevalent_stroke,
            prevalent_hyp: form.prevalent_hyp,
            diabetes: form.diabetes,
            tot_chol: form.tot_chol,
            sys_bp: form.sys_bp,
            dia_bp: form.dia_bp,
            bmi: form.bmi,
            heart_rate: form.heart_rate,
            glucose: form.glucose,
        }
    }
}

impl<'de> Deserialize<'de> for PatientFeatures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PatientForm::deserialize(deserializer).map(Self::from)
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

impl PatientFeatures {
    /// Cigarettes per day as the model sees them: zero for non-smokers.
    pub fn effective_cigs_per_day(&self) -> u8 {
        if self.current_smoker {
            self.cigs_per_day
        } else {
            0
        }
    }

    /// A cigarette count recorded for a non-smoker, which the model never sees
    pub fn ignored_cigarettes(&self) -> Option<u8> {
        (!self.current_smoker && self.cigs_per_day > 0).then_some(self.cigs_per_day)
    }

    /// Feature values in [`FEATURE_NAMES`] order
    pub fn to_vector(&self) -> [f64; N_FEATURES] {
        [
            flag(self.gender == Gender::Male),
            f64::from(self.age),
            flag(self.current_smoker),
            f64::from(self.effective_cigs_per_day()),
            flag(self.bp_meds),
            flag(self.prevalent_stroke),
            flag(self.prevalent_hyp),
            flag(self.diabetes),
            f64::from(self.tot_chol),
            f64::from(self.sys_bp),
            f64::from(self.dia_bp),
            self.bmi,
            f64::from(self.heart_rate),
            f64::from(self.glucose),
        ]
    }

    /// Pairs of (domain, value) in model column order
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDomain, f64)> {
        DOMAINS.iter().zip(self.to_vector())
    }

    /// Check every field against its closed domain.
    ///
    /// # Errors
    /// Returns one message per violated field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = self
            .fields()
            .filter(|(domain, value)| !domain.contains(*value))
            .map(|(domain, value)| {
                format!(
                    "{} {} out of range [{}]",
                    domain.label,
                    value,
                    domain.describe_bounds()
                )
            })
            .collect();

        let (lo, hi) = SMOKER_CIGS_PER_DAY;
        if self.current_smoker && !(lo..=hi).contains(&self.cigs_per_day) {
            errors.push(format!(
                "{} {} out of range [{lo}-{hi}] for a current smoker",
                domain::CIGS_PER_DAY.label,
                self.cigs_per_day
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parse and validate a JSON patient form.
    pub fn from_json_str(text: &str) -> Result<Self, RiskError> {
        let features: PatientFeatures = serde_json::from_str(text)
            .map_err(|e| RiskError::InvalidPatient(vec![e.to_string()]))?;
        features.validate().map_err(RiskError::InvalidPatient)?;
        Ok(features)
    }

    /// Read a JSON patient form from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RiskError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            RiskError::InvalidPatient(vec![format!("cannot read '{}': {e}", path.display())])
        })?;
        Self::from_json_str(&text)
    }
}
