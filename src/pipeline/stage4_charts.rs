use anyhow::Result;
use tracing::info;

use crate::charts::{render_risk_factor_chart, render_symptom_chart, symptom_distribution};
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage4Charts;

impl Stage4Charts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Charts {
    fn name(&self) -> &'static str {
        "stage4_charts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let risk_chart = render_risk_factor_chart(ctx.patient()?)?;
        let symptom_chart = render_symptom_chart(&ctx.symptoms)?;

        if ctx.keep_charts {
            risk_chart.persist_copy(&ctx.output.risk_chart_path)?;
            ctx.kept_risk_chart = Some(ctx.output.risk_chart_path.clone());
            ctx.kept_symptom_chart = match &symptom_chart {
                Some(chart) => {
                    chart.persist_copy(&ctx.output.symptom_chart_path)?;
                    Some(ctx.output.symptom_chart_path.clone())
                }
                None => None,
            };
        }

        info!(
            risk_chart = %risk_chart.path().display(),
            symptom_chart = symptom_chart.is_some(),
            "charts_ready"
        );
        ctx.symptom_slices = symptom_distribution(&ctx.symptoms);
        ctx.risk_chart = Some(risk_chart);
        ctx.symptom_chart = symptom_chart;
        Ok(())
    }
}
