use std::path::PathBuf;

use anyhow::Context;

use crate::charts::{ChartImage, PieSlice};
use crate::io::report_pdf::{REPORT_FILE_NAME, ReportArtifact};
use crate::patient::{PatientInput, SymptomSet};
use crate::schema::v1::CardioQcV1;
use crate::scores::RiskAssessment;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub report_path: PathBuf,
    pub json_path: PathBuf,
    pub risk_chart_path: PathBuf,
    pub symptom_chart_path: PathBuf,
}

/// State of one screening session.
///
/// Scoring, matching, charting and reporting can each run any number of
/// times in any order, so every derived value is optional until its stage
/// has run.
#[derive(Debug)]
pub struct Ctx {
    pub patient_path: Option<PathBuf>,
    pub symptom_labels: Vec<String>,
    pub write_json: bool,
    pub keep_charts: bool,
    pub patient: Option<PatientInput>,
    pub symptoms: SymptomSet,
    pub risk: Option<RiskAssessment>,
    pub conditions: Option<Vec<String>>,
    pub risk_chart: Option<ChartImage>,
    pub symptom_chart: Option<ChartImage>,
    pub symptom_slices: Vec<PieSlice>,
    /// Chart copies written to the output directory by this run.
    pub kept_risk_chart: Option<PathBuf>,
    pub kept_symptom_chart: Option<PathBuf>,
    pub artifact: Option<ReportArtifact>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: CardioQcV1,
}

impl Ctx {
    pub fn new(
        patient_path: Option<PathBuf>,
        symptom_labels: Vec<String>,
        out_dir: PathBuf,
        write_json: bool,
        keep_charts: bool,
        tool_version: &str,
    ) -> Self {
        let report_path = out_dir.join(REPORT_FILE_NAME);
        let json_path = out_dir.join("assessment.json");
        let risk_chart_path = out_dir.join("risk_factors.png");
        let symptom_chart_path = out_dir.join("symptom_distribution.png");
        Self {
            patient_path,
            symptom_labels,
            write_json,
            keep_charts,
            patient: None,
            symptoms: SymptomSet::new(),
            risk: None,
            conditions: None,
            risk_chart: None,
            symptom_chart: None,
            symptom_slices: Vec::new(),
            kept_risk_chart: None,
            kept_symptom_chart: None,
            artifact: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                report_path,
                json_path,
                risk_chart_path,
                symptom_chart_path,
            },
            report: CardioQcV1::empty(tool_version),
        }
    }

    pub fn patient(&self) -> anyhow::Result<&PatientInput> {
        self.patient.as_ref().context("patient input missing")
    }

    /// Replaces the selection. Conditions and the symptom chart were derived
    /// from the old selection and are dropped.
    pub fn set_symptoms(&mut self, symptoms: SymptomSet) {
        self.symptoms = symptoms;
        self.conditions = None;
        self.symptom_chart = None;
        self.kept_symptom_chart = None;
        self.symptom_slices.clear();
    }

    /// Drops rendered charts, removing their temporary files.
    pub fn release_charts(&mut self) {
        self.risk_chart = None;
        self.symptom_chart = None;
    }
}
