use kira_cardioqc::charts::{
    BAR_HEIGHT, BAR_WIDTH, render_risk_factor_chart, render_symptom_chart, risk_factor_values,
    symptom_distribution,
};
use kira_cardioqc::patient::{PatientInput, SymptomSet};

#[test]
fn bar_values_follow_display_order() {
    let patient = PatientInput {
        age: 60,
        st_depression: 2.5,
        ..PatientInput::default()
    };
    let values = risk_factor_values(&patient);
    let labels: Vec<&str> = values.iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        vec![
            "Age",
            "Resting Blood Pressure",
            "Cholesterol",
            "Max Heart Rate",
            "ST Depression"
        ]
    );
    assert_eq!(values[0].1, 60.0);
    assert_eq!(values[4].1, 2.5);
}

#[test]
fn bar_chart_is_png_and_removed_on_drop() {
    let chart = render_risk_factor_chart(&PatientInput::default()).unwrap();
    let path = chart.path().to_path_buf();
    assert_eq!(chart.width(), BAR_WIDTH);
    assert_eq!(chart.height(), BAR_HEIGHT);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
    drop(chart);
    assert!(!path.exists());
}

#[test]
fn charts_get_distinct_files() {
    let a = render_risk_factor_chart(&PatientInput::default()).unwrap();
    let b = render_risk_factor_chart(&PatientInput::default()).unwrap();
    assert_ne!(a.path(), b.path());
}

#[test]
fn pie_skipped_without_symptoms() {
    assert!(render_symptom_chart(&SymptomSet::new()).unwrap().is_none());
    assert!(symptom_distribution(&SymptomSet::new()).is_empty());
}

#[test]
fn pie_shares_sum_to_hundred() {
    let set = SymptomSet::parse(&["Fever", "Cough", "Fatigue"]).unwrap();
    let slices = symptom_distribution(&set);
    assert_eq!(slices.len(), 3);
    let total: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(slices.iter().all(|s| s.count == 1));

    let chart = render_symptom_chart(&set).unwrap().unwrap();
    assert!(chart.path().exists());
}

#[test]
fn persist_copy_outlives_temp_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dest = tmp.path().join("risk_factors.png");
    let chart = render_risk_factor_chart(&PatientInput::default()).unwrap();
    chart.persist_copy(&dest).unwrap();
    drop(chart);
    assert!(dest.exists());
}

fn dark_pixels(path: &std::path::Path) -> usize {
    let img = printpdf::image_crate::open(path).unwrap().to_rgb8();
    img.pixels()
        .filter(|p| p.0.iter().all(|c| *c < 80))
        .count()
}

#[test]
fn pie_draws_title_and_percentage_labels() {
    // A single slice fills the pie with one palette colour; dark pixels can
    // only come from the title and label text.
    let set = SymptomSet::parse(&["Fever"]).unwrap();
    let chart = render_symptom_chart(&set).unwrap().unwrap();
    assert!(dark_pixels(chart.path()) > 50);
}

#[test]
fn bar_chart_renders_for_default_patient() {
    let chart = render_risk_factor_chart(&PatientInput::default()).unwrap();
    assert!(dark_pixels(chart.path()) > 0);
}
