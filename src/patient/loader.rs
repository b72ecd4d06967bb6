use std::path::Path;

use anyhow::{Context, Result};

use crate::patient::{InputError, PatientInput};

pub fn load_patient_json(path: &Path) -> Result<PatientInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read patient intake {}", path.display()))?;
    let patient = parse_patient_json(&content, &path.display().to_string())?;
    Ok(patient)
}

/// Parses an intake document; fields left out take the form defaults.
pub fn parse_patient_json(content: &str, source: &str) -> Result<PatientInput, InputError> {
    let patient: PatientInput =
        serde_json::from_str(content).map_err(|source_err| InputError::Malformed {
            source_name: source.to_string(),
            source: source_err,
        })?;
    patient.validate()?;
    Ok(patient)
}
