use std::io::Cursor;

use kira_cardioqc::ctx::Ctx;
use kira_cardioqc::session::{Action, parse_action, run_session};
use tempfile::TempDir;

fn session_ctx(out: &std::path::Path, symptoms: &[&str]) -> Ctx {
    Ctx::new(
        None,
        symptoms.iter().map(|s| s.to_string()).collect(),
        out.to_path_buf(),
        false,
        false,
        "0.0.0-test",
    )
}

fn run(ctx: &mut Ctx, script: &str) -> String {
    let mut out = Vec::new();
    run_session(ctx, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parse_actions() {
    assert_eq!(parse_action("score").unwrap(), Some(Action::Score));
    assert_eq!(parse_action("  REPORT ").unwrap(), Some(Action::Report));
    assert_eq!(parse_action("# note").unwrap(), None);
    assert_eq!(parse_action("").unwrap(), None);
    assert_eq!(
        parse_action("symptoms Fever, Chest Pain").unwrap(),
        Some(Action::Symptoms(vec![
            "Fever".to_string(),
            "Chest Pain".to_string()
        ]))
    );
    assert_eq!(parse_action("symptoms").unwrap(), Some(Action::Symptoms(vec![])));
    assert!(parse_action("diagnose").is_err());
}

#[test]
fn report_before_score_uses_placeholder() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = session_ctx(tmp.path(), &[]);
    let out = run(&mut ctx, "report\n");
    assert!(out.contains("PDF report generated successfully!"));
    assert!(tmp.path().join("report.pdf").exists());
    assert!(ctx.risk.is_none());
    let artifact = ctx.artifact.as_ref().unwrap();
    assert_eq!(
        artifact.sections[2].lines[0],
        "Heart Disease Risk Level: Not assessed"
    );
}

#[test]
fn actions_in_any_order() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = session_ctx(tmp.path(), &["Chest Pain", "Shortness of Breath"]);
    let out = run(&mut ctx, "match\nscore\nchart\nscore\nreport\nstatus\nquit\nscore\n");
    assert!(out.contains("Possible Heart Condition (e.g., Angina, Heart Attack)"));
    assert!(out.contains("Low risk of heart disease."));
    assert!(out.contains("- Chest Pain: 50.0%"));
    assert!(out.contains("risk: Low"));
    assert!(out.contains("conditions: 1"));
    // Charts are released when the session ends.
    assert!(ctx.risk_chart.is_none());
    assert!(ctx.symptom_chart.is_none());
}

#[test]
fn changing_symptoms_drops_stale_conditions() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = session_ctx(tmp.path(), &["Headache", "Dizziness"]);
    let out = run(&mut ctx, "match\nsymptoms Fever\nstatus\n");
    assert!(out.contains("Possible Hypertension or Neurological Issue"));
    assert!(out.contains("symptoms: Fever"));
    assert!(out.contains("conditions: not checked"));
    assert!(ctx.conditions.is_none());
}

#[test]
fn bad_action_does_not_end_session() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = session_ctx(tmp.path(), &[]);
    let mut out = Vec::new();
    let stats = run_session(
        &mut ctx,
        Cursor::new("diagnose\nsymptoms Sneezing\nscore\n"),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("error: unknown action 'diagnose'"));
    assert!(text.contains("error: unknown symptom 'Sneezing'"));
    assert!(ctx.risk.is_some());
    assert_eq!(stats.failures, 2);
    assert_eq!(stats.actions, 2);
}

#[test]
fn chart_without_symptoms_skips_pie() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = session_ctx(tmp.path(), &[]);
    let out = run(&mut ctx, "chart\n");
    assert!(out.contains("Symptom Distribution: no symptoms selected"));
}

#[test]
fn report_write_failure_keeps_session_going() {
    let tmp = TempDir::new().unwrap();
    // A directory where the PDF should go makes the write fail.
    std::fs::create_dir(tmp.path().join("report.pdf")).unwrap();
    let mut ctx = session_ctx(tmp.path(), &[]);
    let mut out = Vec::new();
    let stats = run_session(&mut ctx, Cursor::new("report\nscore\n"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("error: "));
    assert!(text.contains("failed to write report"));
    assert!(!text.contains("PDF report generated successfully!"));
    assert_eq!(stats.failures, 1);
    assert!(ctx.risk.is_some());
    assert!(ctx.artifact.is_none());
}
