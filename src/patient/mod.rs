mod loader;
mod symptoms;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use loader::{load_patient_json, parse_patient_json};
pub use symptoms::{Symptom, SymptomSet};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
    #[error("unknown symptom '{0}' (run `kira-cardioqc symptoms` for the list)")]
    UnknownSymptom(String),
    #[error("{source_name}: malformed patient intake: {source}")]
    Malformed {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestingEcg {
    Normal,
    StTWaveAbnormality,
    LeftVentricularHypertrophy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Thalassemia {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

impl fmt::Display for ChestPainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypicalAngina => "Typical Angina",
            Self::AtypicalAngina => "Atypical Angina",
            Self::NonAnginalPain => "Non-anginal Pain",
            Self::Asymptomatic => "Asymptomatic",
        })
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "Yes",
            Self::No => "No",
        })
    }
}

impl fmt::Display for RestingEcg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "Normal",
            Self::StTWaveAbnormality => "ST-T Wave Abnormality",
            Self::LeftVentricularHypertrophy => "Left Ventricular Hypertrophy",
        })
    }
}

impl fmt::Display for StSlope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upsloping => "Upsloping",
            Self::Flat => "Flat",
            Self::Downsloping => "Downsloping",
        })
    }
}

impl fmt::Display for Thalassemia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "Normal",
            Self::FixedDefect => "Fixed Defect",
            Self::ReversibleDefect => "Reversible Defect",
        })
    }
}

/// Health parameters collected for one screening session.
///
/// Only age, resting blood pressure, cholesterol, maximum heart rate and ST
/// depression feed the risk score. The remaining clinical fields are carried
/// through to the outputs unscored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    pub name: String,
    pub date_of_check: NaiveDate,
    pub age: u32,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    /// mm Hg
    pub resting_bp: u32,
    /// mg/dl
    pub cholesterol: u32,
    /// Fasting blood sugar above 120 mg/dl.
    pub fasting_blood_sugar: YesNo,
    pub resting_ecg: RestingEcg,
    pub max_heart_rate: u32,
    pub exercise_angina: YesNo,
    pub st_depression: f64,
    pub st_slope: StSlope,
    pub major_vessels: u8,
    pub thalassemia: Thalassemia,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_check: chrono::Local::now().date_naive(),
            age: 30,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::TypicalAngina,
            resting_bp: 120,
            cholesterol: 200,
            fasting_blood_sugar: YesNo::Yes,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            exercise_angina: YesNo::Yes,
            st_depression: 1.0,
            st_slope: StSlope::Upsloping,
            major_vessels: 0,
            thalassemia: Thalassemia::Normal,
        }
    }
}

impl PatientInput {
    /// Range checks applied at the intake boundary.
    pub fn validate(&self) -> Result<(), InputError> {
        check_int("age", self.age, 1, 120)?;
        check_int("resting_bp", self.resting_bp, 50, 250)?;
        check_int("cholesterol", self.cholesterol, 100, 600)?;
        check_int("max_heart_rate", self.max_heart_rate, 50, 250)?;
        check_int("major_vessels", u32::from(self.major_vessels), 0, 4)?;
        if !(0.0..=10.0).contains(&self.st_depression) {
            return Err(InputError::OutOfRange {
                field: "st_depression",
                value: self.st_depression.to_string(),
                min: "0.0".to_string(),
                max: "10.0".to_string(),
            });
        }
        Ok(())
    }
}

fn check_int(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), InputError> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}
