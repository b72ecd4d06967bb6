use std::fs;

use kira_cardioqc::patient::{
    InputError, PatientInput, Sex, StSlope, load_patient_json, parse_patient_json,
};
use tempfile::TempDir;

#[test]
fn missing_fields_take_form_defaults() {
    let patient = parse_patient_json(r#"{"name": "Jane Doe", "age": 61}"#, "inline").unwrap();
    assert_eq!(patient.name, "Jane Doe");
    assert_eq!(patient.age, 61);
    assert_eq!(patient.resting_bp, 120);
    assert_eq!(patient.cholesterol, 200);
    assert_eq!(patient.max_heart_rate, 150);
    assert_eq!(patient.st_slope, StSlope::Upsloping);
}

#[test]
fn full_intake_parses() {
    let json = r#"{
        "name": "John Roe",
        "date_of_check": "2024-03-01",
        "age": 58,
        "sex": "female",
        "chest_pain_type": "asymptomatic",
        "resting_bp": 145,
        "cholesterol": 250,
        "fasting_blood_sugar": "no",
        "resting_ecg": "left_ventricular_hypertrophy",
        "max_heart_rate": 118,
        "exercise_angina": "no",
        "st_depression": 2.4,
        "st_slope": "flat",
        "major_vessels": 2,
        "thalassemia": "reversible_defect"
    }"#;
    let patient = parse_patient_json(json, "inline").unwrap();
    assert_eq!(patient.sex, Sex::Female);
    assert_eq!(patient.date_of_check.to_string(), "2024-03-01");
    assert_eq!(patient.major_vessels, 2);
}

#[test]
fn out_of_range_is_rejected() {
    let err = parse_patient_json(r#"{"age": 0}"#, "inline").unwrap_err();
    assert!(matches!(err, InputError::OutOfRange { field: "age", .. }));

    let err = parse_patient_json(r#"{"st_depression": 10.5}"#, "inline").unwrap_err();
    assert!(matches!(
        err,
        InputError::OutOfRange {
            field: "st_depression",
            ..
        }
    ));

    let err = parse_patient_json(r#"{"major_vessels": 5}"#, "inline").unwrap_err();
    assert!(matches!(
        err,
        InputError::OutOfRange {
            field: "major_vessels",
            ..
        }
    ));
}

#[test]
fn range_edges_are_accepted() {
    let patient = PatientInput {
        age: 120,
        resting_bp: 250,
        cholesterol: 100,
        max_heart_rate: 50,
        st_depression: 0.0,
        major_vessels: 4,
        ..PatientInput::default()
    };
    assert!(patient.validate().is_ok());
}

#[test]
fn malformed_json_names_the_source() {
    let err = parse_patient_json("{ not json", "intake.json").unwrap_err();
    assert!(matches!(err, InputError::Malformed { .. }));
    assert!(err.to_string().starts_with("intake.json"));
}

#[test]
fn load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("patient.json");
    fs::write(&path, r#"{"name": "File Patient", "age": 40}"#).unwrap();
    let patient = load_patient_json(&path).unwrap();
    assert_eq!(patient.name, "File Patient");

    let missing = tmp.path().join("missing.json");
    let err = load_patient_json(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read patient intake"));
}
