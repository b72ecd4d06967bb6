use crate::patient::{Symptom, SymptomSet};

pub const NO_CONDITION: &str =
    "No specific condition detected. Please consult a doctor for a detailed diagnosis.";

pub struct ConditionRule {
    pub requires: &'static [Symptom],
    pub condition: &'static str,
}

/// Evaluated in declaration order; every matching rule contributes.
pub const RULES: [ConditionRule; 4] = [
    ConditionRule {
        requires: &[Symptom::Fever, Symptom::Cough, Symptom::ShortnessOfBreath],
        condition: "Possible Respiratory Infection (e.g., Pneumonia, COVID-19)",
    },
    ConditionRule {
        requires: &[Symptom::ChestPain, Symptom::ShortnessOfBreath],
        condition: "Possible Heart Condition (e.g., Angina, Heart Attack)",
    },
    ConditionRule {
        requires: &[Symptom::Fatigue, Symptom::SwellingInLegs],
        condition: "Possible Heart Failure",
    },
    ConditionRule {
        requires: &[Symptom::Headache, Symptom::Dizziness],
        condition: "Possible Hypertension or Neurological Issue",
    },
];

/// Never returns an empty list.
pub fn match_conditions(symptoms: &SymptomSet) -> Vec<String> {
    let mut out: Vec<String> = RULES
        .iter()
        .filter(|rule| symptoms.contains_all(rule.requires))
        .map(|rule| rule.condition.to_string())
        .collect();
    if out.is_empty() {
        out.push(NO_CONDITION.to_string());
    }
    out
}
