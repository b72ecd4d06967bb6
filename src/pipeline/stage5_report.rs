use anyhow::Result;
use tracing::{debug, info};

use crate::charts::render_risk_factor_chart;
use crate::ctx::Ctx;
use crate::io::report_pdf::{ReportInput, assemble};
use crate::pipeline::Stage;

pub struct Stage5Report;

impl Stage5Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Report {
    fn name(&self) -> &'static str {
        "stage5_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.risk.is_none() {
            debug!("risk not assessed; report uses placeholder");
        }
        if ctx.conditions.is_none() {
            debug!("conditions not checked; report lists none");
        }

        // The chart file is consumed here and removed once the report is written.
        let chart = match ctx.risk_chart.take() {
            Some(chart) => chart,
            None => render_risk_factor_chart(ctx.patient()?)?,
        };
        let input = ReportInput {
            patient: ctx.patient()?,
            risk: ctx.risk.as_ref().map(|r| r.level),
            symptoms: &ctx.symptoms,
            conditions: ctx.conditions.as_deref(),
            chart_image: chart.path(),
        };
        let result = assemble(&ctx.output.report_path, &input);
        drop(chart);
        ctx.symptom_chart = None;

        let artifact = result?;
        info!(
            path = %artifact.path.display(),
            pages = artifact.pages,
            "stage5_report_ready"
        );
        ctx.artifact = Some(artifact);
        Ok(())
    }
}
