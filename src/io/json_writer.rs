use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{CardioQcV1, Outputs, Risk, RiskFactor, SymptomShare};

pub fn build_report(ctx: &Ctx) -> Result<CardioQcV1> {
    let risk = match &ctx.risk {
        Some(assessment) => Risk {
            level: Some(assessment.level),
            score: Some(assessment.score),
            factors: assessment
                .factors
                .iter()
                .map(|f| RiskFactor {
                    name: f.name.clone(),
                    value: f.value,
                    fired: f.fired,
                    threshold: f.threshold.clone(),
                })
                .collect(),
        },
        None => Risk {
            level: None,
            score: None,
            factors: Vec::new(),
        },
    };

    let symptom_distribution = ctx
        .symptom_slices
        .iter()
        .map(|s| SymptomShare {
            symptom: s.symptom,
            count: s.count,
            percent: s.percent,
        })
        .collect();

    let outputs = Outputs {
        report_pdf: ctx.artifact.as_ref().map(|a| file_name(&a.path)),
        risk_factor_chart: ctx.kept_risk_chart.as_deref().map(file_name),
        symptom_chart: ctx.kept_symptom_chart.as_deref().map(file_name),
    };

    Ok(CardioQcV1 {
        tool: "kira-cardioqc".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        patient: ctx.patient.clone(),
        risk,
        symptoms: ctx.symptoms.iter().collect(),
        conditions: ctx.conditions.clone(),
        symptom_distribution,
        outputs,
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
