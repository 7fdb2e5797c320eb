//! Closed input domains of the 14 patient fields, in model column order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Binary,
    Integer,
    Real,
}

/// Bounds and display metadata for one model input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDomain {
    /// Column name in the model and scaler artifacts
    pub name: &'static str,
    /// Form label
    pub label: &'static str,
    /// Compact label for charts
    pub short_label: &'static str,
    pub unit: Option<&'static str>,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
}

impl FieldDomain {
    pub fn contains(&self, value: f64) -> bool {
        if !(self.min..=self.max).contains(&value) {
            return false;
        }
        match self.kind {
            FieldKind::Binary => value == 0.0 || value == 1.0,
            FieldKind::Integer => value.fract() == 0.0,
            FieldKind::Real => true,
        }
    }

    pub fn describe_bounds(&self) -> String {
        match self.kind {
            FieldKind::Binary => "0 or 1".to_string(),
            FieldKind::Integer => format!("{}-{}", self.min, self.max),
            FieldKind::Real => format!("{:.1}-{:.1}", self.min, self.max),
        }
    }
}

const fn binary(name: &'static str, label: &'static str, short_label: &'static str) -> FieldDomain {
    FieldDomain {
        name,
        label,
        short_label,
        unit: None,
        kind: FieldKind::Binary,
        min: 0.0,
        max: 1.0,
    }
}

const fn integer(
    name: &'static str,
    label: &'static str,
    short_label: &'static str,
    unit: Option<&'static str>,
    min: f64,
    max: f64,
) -> FieldDomain {
    FieldDomain {
        name,
        label,
        short_label,
        unit,
        kind: FieldKind::Integer,
        min,
        max,
    }
}

pub const MALE: FieldDomain = binary("male", "Gender", "Gender (Male)");
pub const AGE: FieldDomain = integer("age", "Age", "Age", Some("years"), 30.0, 80.0);
pub const CURRENT_SMOKER: FieldDomain = binary("currentSmoker", "Smoking History", "Current Smoker");
/// Zero is only valid for non-smokers; see [`SMOKER_CIGS_PER_DAY`].
pub const CIGS_PER_DAY: FieldDomain =
    integer("cigsPerDay", "Cigarettes / Day", "Cigarettes/Day", None, 0.0, 70.0);
pub const BP_MEDS: FieldDomain = binary("BPMeds", "BP Meds", "BP Medication");
pub const PREVALENT_STROKE: FieldDomain = binary("prevalentStroke", "Prior Stroke", "Prior Stroke");
pub const PREVALENT_HYP: FieldDomain = binary("prevalentHyp", "Hypertension", "Hypertension");
pub const DIABETES: FieldDomain = binary("diabetes", "Diabetes", "Diabetes");
pub const TOT_CHOL: FieldDomain = integer(
    "totChol",
    "Total Cholesterol",
    "Total Cholesterol",
    Some("mg/dL"),
    100.0,
    600.0,
);
pub const SYS_BP: FieldDomain =
    integer("sysBP", "Systolic BP", "Systolic BP", Some("mmHg"), 80.0, 250.0);
pub const DIA_BP: FieldDomain =
    integer("diaBP", "Diastolic BP", "Diastolic BP", Some("mmHg"), 40.0, 140.0);
pub const BMI: FieldDomain = FieldDomain {
    name: "BMI",
    label: "BMI",
    short_label: "BMI",
    unit: Some("kg/m²"),
    kind: FieldKind::Real,
    min: 15.0,
    max: 50.0,
};
pub const HEART_RATE: FieldDomain = integer(
    "heartRate",
    "Resting Heart Rate",
    "Heart Rate",
    Some("bpm"),
    40.0,
    120.0,
);
pub const GLUCOSE: FieldDomain =
    integer("glucose", "Glucose", "Glucose", Some("mg/dL"), 40.0, 400.0);

/// Cigarette range once the smoker flag is set
pub const SMOKER_CIGS_PER_DAY: (u8, u8) = (1, 70);
/// Cigarettes per day assumed for a smoker whose form leaves the count out
pub const DEFAULT_SMOKER_CIGS_PER_DAY: u8 = 10;

/// All fields in model column order
pub static DOMAINS: [FieldDomain; 14] = [
    MALE,
    AGE,
    CURRENT_SMOKER,
    CIGS_PER_DAY,
    BP_MEDS,
    PREVALENT_STROKE,
    PREVALENT_HYP,
    DIABETES,
    TOT_CHOL,
    SYS_BP,
    DIA_BP,
    BMI,
    HEART_RATE,
    GLUCOSE,
];

pub fn domain_for(name: &str) -> Option<&'static FieldDomain> {
    DOMAINS.iter().find(|d| d.name == name)
}
