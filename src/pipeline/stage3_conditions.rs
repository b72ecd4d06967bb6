use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::conditions::match_conditions;

pub struct Stage3Conditions;

impl Stage3Conditions {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Conditions {
    fn name(&self) -> &'static str {
        "stage3_conditions"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let conditions = match_conditions(&ctx.symptoms);
        info!(count = conditions.len(), "conditions_ready");
        ctx.conditions = Some(conditions);
        Ok(())
    }
}
