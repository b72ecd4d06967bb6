use kira_cardioqc::patient::{InputError, Symptom, SymptomSet};

#[test]
fn labels_parse_loosely() {
    assert_eq!(
        "shortness of breath".parse::<Symptom>().unwrap(),
        Symptom::ShortnessOfBreath
    );
    assert_eq!(
        "swelling-in-legs".parse::<Symptom>().unwrap(),
        Symptom::SwellingInLegs
    );
    assert_eq!(" Chest_Pain ".parse::<Symptom>().unwrap(), Symptom::ChestPain);
}

#[test]
fn unknown_label_is_rejected() {
    let err = "Back Pain".parse::<Symptom>().unwrap_err();
    assert!(matches!(err, InputError::UnknownSymptom(ref s) if s == "Back Pain"));
}

#[test]
fn set_dedupes_and_keeps_order() {
    let set = SymptomSet::parse(&["Cough", "Fever", "cough", ""]).unwrap();
    assert_eq!(set.len(), 2);
    let items: Vec<Symptom> = set.iter().collect();
    assert_eq!(items, vec![Symptom::Cough, Symptom::Fever]);
}

#[test]
fn set_parse_fails_on_unknown() {
    assert!(SymptomSet::parse(&["Fever", "Sneezing"]).is_err());
}

#[test]
fn set_serializes_as_labels() {
    let set = SymptomSet::parse(&["Fever", "Swelling in Legs"]).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["Fever","Swelling in Legs"]"#);
    let back: SymptomSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn vocabulary_has_ten_labels() {
    assert_eq!(Symptom::ALL.len(), 10);
    assert_eq!(Symptom::ALL[2].label(), "Shortness of Breath");
}
