use serde::{Deserialize, Serialize};

use crate::patient::{PatientInput, Symptom};
use crate::scores::RiskLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    pub fired: bool,
    pub threshold: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub level: Option<RiskLevel>,
    pub score: Option<u8>,
    pub factors: Vec<RiskFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomShare {
    pub symptom: Symptom,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outputs {
    pub report_pdf: Option<String>,
    pub risk_factor_chart: Option<String>,
    pub symptom_chart: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub patient: Option<PatientInput>,
    pub risk: Risk,
    pub symptoms: Vec<Symptom>,
    pub conditions: Option<Vec<String>>,
    pub symptom_distribution: Vec<SymptomShare>,
    pub outputs: Outputs,
}

impl CardioQcV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "kira-cardioqc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            patient: None,
            risk: Risk {
                level: None,
                score: None,
                factors: Vec::new(),
            },
            symptoms: Vec::new(),
            conditions: None,
            symptom_distribution: Vec::new(),
            outputs: Outputs {
                report_pdf: None,
                risk_factor_chart: None,
                symptom_chart: None,
            },
        }
    }
}
