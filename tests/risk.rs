use kira_cardioqc::patient::PatientInput;
use kira_cardioqc::scores::RiskLevel;
use kira_cardioqc::scores::risk::{assess, level_for, score};

#[test]
fn worked_scenarios() {
    assert_eq!(score(45, 120, 200, 150, 1.0), RiskLevel::Low);
    assert_eq!(score(55, 140, 200, 150, 1.0), RiskLevel::Moderate);
    assert_eq!(score(60, 140, 260, 110, 2.5), RiskLevel::High);
    assert_eq!(score(55, 120, 200, 150, 1.0), RiskLevel::Low);
}

#[test]
fn thresholds_are_strict() {
    // Exactly at every threshold: nothing counts.
    assert_eq!(score(50, 130, 240, 120, 2.0), RiskLevel::Low);
    // One step past two of them.
    assert_eq!(score(51, 131, 240, 120, 2.0), RiskLevel::Moderate);
    assert_eq!(score(50, 130, 241, 119, 2.0), RiskLevel::Moderate);
    assert_eq!(score(50, 130, 240, 120, 2.1), RiskLevel::Low);
}

#[test]
fn level_mapping_covers_all_totals() {
    assert_eq!(level_for(0), RiskLevel::Low);
    assert_eq!(level_for(1), RiskLevel::Low);
    assert_eq!(level_for(2), RiskLevel::Moderate);
    for total in 3..=5 {
        assert_eq!(level_for(total), RiskLevel::High);
    }
}

#[test]
fn raising_a_factor_never_lowers_the_level() {
    let base = score(45, 120, 200, 150, 1.0);
    assert!(score(60, 120, 200, 150, 1.0) >= base);
    let mid = score(60, 140, 200, 150, 1.0);
    assert!(score(60, 140, 300, 150, 1.0) >= mid);
    assert!(score(60, 140, 300, 100, 1.0) >= mid);
}

#[test]
fn assess_reports_fired_factors() {
    let patient = PatientInput {
        age: 60,
        resting_bp: 140,
        cholesterol: 260,
        max_heart_rate: 110,
        st_depression: 2.5,
        ..PatientInput::default()
    };
    let assessment = assess(&patient);
    assert_eq!(assessment.level, RiskLevel::High);
    assert_eq!(assessment.score, 5);
    assert_eq!(assessment.factors.len(), 5);
    assert!(assessment.factors.iter().all(|f| f.fired));
    assert_eq!(assessment.factors[3].threshold, "max_heart_rate < 120");
}

#[test]
fn assess_matches_score_and_is_repeatable() {
    let patient = PatientInput {
        age: 55,
        resting_bp: 140,
        ..PatientInput::default()
    };
    let first = assess(&patient);
    let second = assess(&patient);
    assert_eq!(first.level, second.level);
    assert_eq!(first.factors, second.factors);
    assert_eq!(
        first.level,
        score(
            patient.age,
            patient.resting_bp,
            patient.cholesterol,
            patient.max_heart_rate,
            patient.st_depression
        )
    );
    let fired: Vec<&str> = first.fired().map(|f| f.name.as_str()).collect();
    assert_eq!(fired, vec!["age", "resting_bp"]);
}

#[test]
fn form_defaults_score_low() {
    let assessment = assess(&PatientInput::default());
    assert_eq!(assessment.score, 0);
    assert_eq!(assessment.level, RiskLevel::Low);
    assert_eq!(assessment.level.headline(), "Low risk of heart disease.");
}

#[test]
fn all_five_factors_high() {
    assert_eq!(score(55, 140, 250, 110, 2.5), RiskLevel::High);
}
