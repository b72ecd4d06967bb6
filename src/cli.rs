use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kira-cardioqc",
    version,
    about = "Heart disease risk screening, symptom check and PDF reporting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score, match, chart and write the PDF report in one pass
    Run(RunArgs),
    /// Read actions line by line from stdin
    Session(SessionArgs),
    /// Print the heart disease risk assessment only
    Assess(AssessArgs),
    /// Print possible conditions for the given symptoms
    Check(CheckArgs),
    /// List recognised symptom labels
    Symptoms,
}

#[derive(Debug, Clone, Args)]
pub struct IntakeArgs {
    #[arg(long, help = "Patient intake JSON (form defaults when omitted)")]
    pub patient: Option<PathBuf>,

    #[arg(
        long = "symptom",
        value_delimiter = ',',
        help = "Selected symptom label (repeatable or comma separated)"
    )]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub intake: IntakeArgs,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Also write assessment.json")]
    pub json: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Keep rendered chart PNGs next to the report"
    )]
    pub keep_charts: bool,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub intake: IntakeArgs,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub keep_charts: bool,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    #[arg(long)]
    pub patient: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(long = "symptom", value_delimiter = ',', required = true)]
    pub symptoms: Vec<String>,
}
