use anyhow::Result;

use crate::ctx::Ctx;
use crate::scores::RiskAssessment;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let patient = ctx.patient()?;

    let mut out = String::new();
    out.push_str(&format!("kira-cardioqc v{}\n", version));
    let name = if patient.name.trim().is_empty() {
        "(unnamed)"
    } else {
        patient.name.as_str()
    };
    out.push_str(&format!(
        "Patient: {}, age {}, sex {}, checked {}\n",
        name, patient.age, patient.sex, patient.date_of_check
    ));

    match &ctx.risk {
        Some(risk) => {
            out.push_str(&format!("Risk: {} ({}/5)\n", risk.level, risk.score));
            out.push_str(&format!("Factors: {}\n", format_factors(risk)));
        }
        None => out.push_str("Risk: not assessed\n"),
    }

    if ctx.symptoms.is_empty() {
        out.push_str("Symptoms: none\n");
    } else {
        let labels: Vec<&str> = ctx.symptoms.iter().map(|s| s.label()).collect();
        out.push_str(&format!("Symptoms: {}\n", labels.join(", ")));
    }

    match &ctx.conditions {
        Some(conditions) => {
            out.push_str("Possible Conditions:\n");
            for condition in conditions {
                out.push_str(&format!("- {}\n", condition));
            }
        }
        None => out.push_str("Possible Conditions: not checked\n"),
    }

    if let Some(artifact) = &ctx.artifact {
        out.push_str(&format!(
            "Report: {} ({} page{})\n",
            artifact.path.display(),
            artifact.pages,
            if artifact.pages == 1 { "" } else { "s" }
        ));
    }

    Ok(out)
}

/// Fired threshold descriptions, or `none`.
pub fn format_factors(risk: &RiskAssessment) -> String {
    let fired: Vec<&str> = risk.fired().map(|f| f.threshold.as_str()).collect();
    if fired.is_empty() {
        "none".to_string()
    } else {
        fired.join(", ")
    }
}
