use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::risk::assess;

pub struct Stage2Risk;

impl Stage2Risk {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Risk {
    fn name(&self) -> &'static str {
        "stage2_risk"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let assessment = assess(ctx.patient()?);
        info!(
            level = assessment.level.as_str(),
            score = assessment.score,
            "risk_assessment_ready"
        );
        ctx.risk = Some(assessment);
        Ok(())
    }
}
