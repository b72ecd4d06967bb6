use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::patient::{self, PatientInput, SymptomSet};
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let patient = match &ctx.patient_path {
            Some(path) => patient::load_patient_json(path)?,
            None => {
                let msg = "no patient intake given; using form defaults".to_string();
                warn!("{}", msg);
                ctx.warnings.push(msg);
                PatientInput::default()
            }
        };
        if patient.name.trim().is_empty() {
            ctx.warnings.push("patient name is empty".to_string());
        }

        let symptoms = SymptomSet::parse(&ctx.symptom_labels)?;

        info!(
            age = patient.age,
            symptoms = symptoms.len(),
            "intake_ready"
        );
        ctx.patient = Some(patient);
        ctx.set_symptoms(symptoms);
        Ok(())
    }
}
