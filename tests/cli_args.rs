use clap::Parser;
use kira_cardioqc::cli::{Cli, Commands};

#[test]
fn run_defaults() {
    let cli = Cli::parse_from(["kira-cardioqc", "run"]);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.intake.patient.is_none());
            assert!(args.intake.symptoms.is_empty());
            assert_eq!(args.out, std::path::PathBuf::from("."));
            assert!(!args.json);
            assert!(!args.keep_charts);
        }
        _ => panic!("expected run"),
    }
}

#[test]
fn symptoms_split_on_commas_and_repeat() {
    let cli = Cli::parse_from([
        "kira-cardioqc",
        "run",
        "--symptom",
        "Fever,Cough",
        "--symptom",
        "Chest Pain",
        "--json",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.intake.symptoms, vec!["Fever", "Cough", "Chest Pain"]);
            assert!(args.json);
        }
        _ => panic!("expected run"),
    }
}

#[test]
fn check_requires_symptoms() {
    assert!(Cli::try_parse_from(["kira-cardioqc", "check"]).is_err());
}
