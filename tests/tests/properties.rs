use chd_risk::domain::SMOKER_CIGS_PER_DAY;
use chd_risk::{AssessmentContext, Gender, PatientFeatures, RiskTier, DOMAINS};
use chdrisk_tests::shipped_context;
use proptest::prelude::*;
use std::sync::OnceLock;

fn context() -> &'static AssessmentContext {
    static CTX: OnceLock<AssessmentContext> = OnceLock::new();
    CTX.get_or_init(|| shipped_context().expect("shipped artifacts load"))
}

prop_compose! {
    fn valid_patient()(
        flags in any::<[bool; 6]>(),
        age in 30u8..=80,
        cigs in 1u8..=70,
        tot_chol in 100u16..=600,
        sys_bp in 80u16..=250,
        dia_bp in 40u16..=140,
        bmi_tenths in 150u16..=500,
        heart_rate in 40u8..=120,
        glucose in 40u16..=400
    ) -> PatientFeatures {
        let [male, smoker, bp_meds, stroke, hyp, diabetes] = flags;
        PatientFeatures {
            gender: if male { Gender::Male } else { Gender::Female },
            age,
            current_smoker: smoker,
            cigs_per_day: if smoker { cigs } else { 0 },
            bp_meds,
            prevalent_stroke: stroke,
            prevalent_hyp: hyp,
            diabetes,
            tot_chol,
            sys_bp,
            dia_bp,
            bmi: f64::from(bmi_tenths) / 10.0,
            heart_rate,
            glucose,
        }
    }
}

/// The same patient with one model column moved up by `step` (binary columns
/// switch on), staying inside the column's domain.
fn raise(patient: &PatientFeatures, column: usize, step: u16) -> PatientFeatures {
    let max = DOMAINS[column].max as u16;
    let up16 = |v: u16| (v + step).min(max);
    let up8 = |v: u8| up16(u16::from(v)) as u8;
    let mut p = patient.clone();
    match column {
        0 => p.gender = Gender::Male,
        1 => p.age = up8(p.age),
        2 => {
            p.current_smoker = true;
            p.cigs_per_day = p.cigs_per_day.max(SMOKER_CIGS_PER_DAY.0);
        }
        3 => p.cigs_per_day = up8(p.cigs_per_day),
        4 => p.bp_meds = true,
        5 => p.prevalent_stroke = true,
        6 => p.prevalent_hyp = true,
        7 => p.diabetes = true,
        8 => p.tot_chol = up16(p.tot_chol),
        9 => p.sys_bp = up16(p.sys_bp),
        10 => p.dia_bp = up16(p.dia_bp),
        11 => p.bmi = (p.bmi + f64::from(step) / 10.0).min(DOMAINS[column].max),
        12 => p.heart_rate = up8(p.heart_rate),
        13 => p.glucose = up16(p.glucose),
        _ => unreachable!("no column {column}"),
    }
    p
}

proptest! {
    #[test]
    fn valid_patients_pass_validation(patient in valid_patient()) {
        prop_assert!(patient.validate().is_ok());
    }

    #[test]
    fn probability_is_a_percentage_with_matching_tier(patient in valid_patient()) {
        let a = context().evaluate(&patient).unwrap();
        prop_assert!((0.0..=100.0).contains(&a.probability));
        prop_assert_eq!(a.tier, RiskTier::classify(a.probability));
        prop_assert_eq!(a.record, a.tier.record());
    }

    #[test]
    fn risk_never_falls_when_a_positive_factor_rises(patient in valid_patient(), step in 1u16..=40) {
        let ctx = context();
        let base = ctx.evaluate(&patient).unwrap();
        let positive = ctx
            .model()
            .coefficients()
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(column, _)| column);
        for column in positive {
            let raised = raise(&patient, column, step);
            if raised.to_vector()[column] <= patient.to_vector()[column] {
                continue;
            }
            prop_assert!(raised.validate().is_ok(), "{} left its domain", DOMAINS[column].name);
            let after = ctx.evaluate(&raised).unwrap();
            prop_assert!(
                after.probability >= base.probability,
                "raising {} lowered risk from {} to {}",
                DOMAINS[column].name,
                base.probability,
                after.probability
            );
        }
    }
}

#[test]
fn shipped_model_has_twelve_positive_factors() {
    let positive: Vec<&str> = context()
        .model()
        .coefficients()
        .iter()
        .zip(DOMAINS.iter())
        .filter(|(w, _)| **w > 0.0)
        .map(|(_, d)| d.name)
        .collect();
    assert_eq!(positive.len(), 12);
    assert!(!positive.contains(&"diaBP"));
    assert!(!positive.contains(&"heartRate"));
}
