use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_cardioqc::cli::{Cli, Commands};
use kira_cardioqc::ctx::Ctx;
use kira_cardioqc::io::summary::{format_factors, format_summary};
use kira_cardioqc::patient::{Symptom, SymptomSet};
use kira_cardioqc::pipeline::Pipeline;
use kira_cardioqc::pipeline::stage1_input::Stage1Input;
use kira_cardioqc::pipeline::stage2_risk::Stage2Risk;
use kira_cardioqc::scores::conditions::match_conditions;
use kira_cardioqc::session::run_session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(
                args.intake.patient,
                args.intake.symptoms,
                args.out,
                args.json,
                args.keep_charts,
                env!("CARGO_PKG_VERSION"),
            );
            let result = Pipeline::full().run(&mut ctx);
            ctx.release_charts();
            result?;
            print_summary(&ctx)?;
        }
        Commands::Session(args) => {
            let mut ctx = Ctx::new(
                args.intake.patient,
                args.intake.symptoms,
                args.out,
                false,
                args.keep_charts,
                env!("CARGO_PKG_VERSION"),
            );
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let stats = run_session(&mut ctx, stdin.lock(), &mut out)?;
            writeln!(
                out,
                "session ended: {} action{}, {} failed",
                stats.actions,
                if stats.actions == 1 { "" } else { "s" },
                stats.failures
            )?;
            out.flush()?;
        }
        Commands::Assess(args) => {
            let mut ctx = Ctx::new(
                args.patient,
                Vec::new(),
                PathBuf::from("."),
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Input::new()),
                Box::new(Stage2Risk::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_assessment(&ctx);
        }
        Commands::Check(args) => {
            let symptoms = SymptomSet::parse(&args.symptoms)?;
            println!("Possible Conditions:");
            for condition in match_conditions(&symptoms) {
                println!("- {}", condition);
            }
        }
        Commands::Symptoms => {
            for symptom in Symptom::ALL {
                println!("{}", symptom.label());
            }
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_assessment(ctx: &Ctx) {
    if let Some(risk) = &ctx.risk {
        println!("{}", risk.level.headline());
        println!("score: {}/5", risk.score);
        println!("factors: {}", format_factors(risk));
        println!("{}", risk.level.explanation());
    }
    print_warnings(ctx);
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
