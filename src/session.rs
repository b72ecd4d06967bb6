//! Line-driven interactive session.
//!
//! Each input line names one action. Actions map onto single pipeline stages
//! and may be issued in any order; a report requested before scoring or
//! matching is still produced, with placeholders for the missing parts.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::summary::format_factors;
use crate::patient::{Symptom, SymptomSet};
use crate::pipeline::stage0_scaffold::Stage0Scaffold;
use crate::pipeline::stage1_input::Stage1Input;
use crate::pipeline::stage2_risk::Stage2Risk;
use crate::pipeline::stage3_conditions::Stage3Conditions;
use crate::pipeline::stage4_charts::Stage4Charts;
use crate::pipeline::stage5_report::Stage5Report;
use crate::pipeline::{Pipeline, Stage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Score,
    Match,
    Chart,
    Report,
    Symptoms(Vec<String>),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub actions: usize,
    pub failures: usize,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_action(line: &str) -> Result<Option<Action>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };
    let action = match verb.to_ascii_lowercase().as_str() {
        "score" | "predict" => Action::Score,
        "match" | "check" => Action::Match,
        "chart" | "charts" => Action::Chart,
        "report" => Action::Report,
        "symptoms" => Action::Symptoms(
            rest.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        "status" => Action::Status,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => bail!("unknown action '{}' (try `help`)", other),
    };
    Ok(Some(action))
}

/// Loads the intake, then runs actions from `input` until EOF or `quit`.
///
/// Intake failures end the session. Failures of individual actions are
/// printed as `error: ...` and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    ctx: &mut Ctx,
    input: R,
    out: &mut W,
) -> Result<SessionStats> {
    Pipeline::new(vec![Box::new(Stage0Scaffold::new()), Box::new(Stage1Input::new())])
        .run(ctx)?;
    writeln!(
        out,
        "kira-cardioqc session ready; type `help` for the list of actions"
    )?;
    for warning in &ctx.warnings {
        writeln!(out, "warning: {}", warning)?;
    }

    let mut stats = SessionStats::default();
    for line in input.lines() {
        let line = line?;
        let action = match parse_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(err) => {
                stats.failures += 1;
                writeln!(out, "error: {}", err)?;
                continue;
            }
        };
        if action == Action::Quit {
            break;
        }
        stats.actions += 1;
        if let Err(err) = dispatch(ctx, &action, out) {
            stats.failures += 1;
            writeln!(out, "error: {:#}", err)?;
        }
    }

    ctx.release_charts();
    info!(
        actions = stats.actions,
        failures = stats.failures,
        "session_finished"
    );
    Ok(stats)
}

fn dispatch<W: Write>(ctx: &mut Ctx, action: &Action, out: &mut W) -> Result<()> {
    match action {
        Action::Score => {
            run_stage(ctx, Stage2Risk::new())?;
            if let Some(risk) = &ctx.risk {
                writeln!(out, "{}", risk.level.headline())?;
                writeln!(
                    out,
                    "score: {}/5 (factors: {})",
                    risk.score,
                    format_factors(risk)
                )?;
            }
        }
        Action::Match => {
            run_stage(ctx, Stage3Conditions::new())?;
            writeln!(out, "Possible Conditions:")?;
            for condition in ctx.conditions.iter().flatten() {
                writeln!(out, "- {}", condition)?;
            }
        }
        Action::Chart => {
            run_stage(ctx, Stage4Charts::new())?;
            if ctx.keep_charts {
                writeln!(
                    out,
                    "Risk factor chart saved to {}",
                    ctx.output.risk_chart_path.display()
                )?;
            } else {
                writeln!(out, "Risk factor chart rendered")?;
            }
            if ctx.symptom_slices.is_empty() {
                writeln!(out, "Symptom Distribution: no symptoms selected")?;
            } else {
                writeln!(out, "Symptom Distribution:")?;
                for slice in &ctx.symptom_slices {
                    writeln!(out, "- {}: {:.1}%", slice.symptom, slice.percent)?;
                }
            }
        }
        Action::Report => {
            run_stage(ctx, Stage5Report::new())?;
            writeln!(out, "PDF report generated successfully!")?;
            if let Some(artifact) = &ctx.artifact {
                writeln!(out, "report: {}", artifact.path.display())?;
            }
        }
        Action::Symptoms(labels) => {
            let symptoms = SymptomSet::parse(labels)?;
            ctx.set_symptoms(symptoms);
            writeln!(out, "symptoms: {}", join_symptoms(&ctx.symptoms))?;
        }
        Action::Status => write_status(ctx, out)?,
        Action::Help => write_help(out)?,
        Action::Quit => {}
    }
    Ok(())
}

fn run_stage<S: Stage + 'static>(ctx: &mut Ctx, stage: S) -> Result<()> {
    Pipeline::new(vec![Box::new(stage)]).run(ctx)
}

fn join_symptoms(symptoms: &SymptomSet) -> String {
    if symptoms.is_empty() {
        return "none".to_string();
    }
    symptoms
        .iter()
        .map(Symptom::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_status<W: Write>(ctx: &Ctx, out: &mut W) -> Result<()> {
    match &ctx.risk {
        Some(risk) => writeln!(out, "risk: {}", risk.level)?,
        None => writeln!(out, "risk: not assessed")?,
    }
    writeln!(out, "symptoms: {}", join_symptoms(&ctx.symptoms))?;
    match &ctx.conditions {
        Some(conditions) => writeln!(out, "conditions: {}", conditions.len())?,
        None => writeln!(out, "conditions: not checked")?,
    }
    match &ctx.artifact {
        Some(artifact) => writeln!(out, "report: {}", artifact.path.display())?,
        None => writeln!(out, "report: not generated")?,
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "actions:")?;
    writeln!(out, "  score                 assess heart disease risk")?;
    writeln!(out, "  match                 suggest possible conditions")?;
    writeln!(out, "  chart                 render risk factor and symptom charts")?;
    writeln!(out, "  report                write the PDF report")?;
    writeln!(out, "  symptoms <a, b, ...>  replace the selected symptoms")?;
    writeln!(out, "  status                show what has been computed")?;
    writeln!(out, "  quit                  end the session")?;
    Ok(())
}
