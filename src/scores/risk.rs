use crate::patient::PatientInput;
use crate::scores::{RiskAssessment, RiskFactor, RiskLevel};

const AGE_THRESHOLD: u32 = 50;
const RESTING_BP_THRESHOLD: u32 = 130;
const CHOLESTEROL_THRESHOLD: u32 = 240;
const MAX_HEART_RATE_THRESHOLD: u32 = 120;
const ST_DEPRESSION_THRESHOLD: f64 = 2.0;

const HIGH_MIN_SCORE: u8 = 3;
const MODERATE_SCORE: u8 = 2;

/// Tallies the five threshold checks and maps the total to a level.
///
/// Inputs are assumed to be range-checked already.
pub fn score(
    age: u32,
    resting_bp: u32,
    cholesterol: u32,
    max_heart_rate: u32,
    st_depression: f64,
) -> RiskLevel {
    let total = [
        age > AGE_THRESHOLD,
        resting_bp > RESTING_BP_THRESHOLD,
        cholesterol > CHOLESTEROL_THRESHOLD,
        max_heart_rate < MAX_HEART_RATE_THRESHOLD,
        st_depression > ST_DEPRESSION_THRESHOLD,
    ]
    .iter()
    .filter(|hit| **hit)
    .count() as u8;
    level_for(total)
}

pub fn level_for(total: u8) -> RiskLevel {
    if total >= HIGH_MIN_SCORE {
        RiskLevel::High
    } else if total == MODERATE_SCORE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

pub fn assess(patient: &PatientInput) -> RiskAssessment {
    let factors = vec![
        factor_above(
            "age",
            patient.age,
            AGE_THRESHOLD,
            patient.age > AGE_THRESHOLD,
        ),
        factor_above(
            "resting_bp",
            patient.resting_bp,
            RESTING_BP_THRESHOLD,
            patient.resting_bp > RESTING_BP_THRESHOLD,
        ),
        factor_above(
            "cholesterol",
            patient.cholesterol,
            CHOLESTEROL_THRESHOLD,
            patient.cholesterol > CHOLESTEROL_THRESHOLD,
        ),
        RiskFactor {
            name: "max_heart_rate".to_string(),
            value: f64::from(patient.max_heart_rate),
            fired: patient.max_heart_rate < MAX_HEART_RATE_THRESHOLD,
            threshold: format!("max_heart_rate < {}", MAX_HEART_RATE_THRESHOLD),
        },
        RiskFactor {
            name: "st_depression".to_string(),
            value: patient.st_depression,
            fired: patient.st_depression > ST_DEPRESSION_THRESHOLD,
            threshold: format!("st_depression > {:.1}", ST_DEPRESSION_THRESHOLD),
        },
    ];
    let total = factors.iter().filter(|f| f.fired).count() as u8;
    RiskAssessment {
        level: level_for(total),
        score: total,
        factors,
    }
}

fn factor_above(name: &str, value: u32, threshold: u32, fired: bool) -> RiskFactor {
    RiskFactor {
        name: name.to_string(),
        value: f64::from(value),
        fired,
        threshold: format!("{} > {}", name, threshold),
    }
}
