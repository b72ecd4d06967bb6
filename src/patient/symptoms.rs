use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::patient::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symptom {
    Fever,
    Cough,
    ShortnessOfBreath,
    ChestPain,
    Fatigue,
    Headache,
    Nausea,
    Dizziness,
    SwellingInLegs,
    Palpitations,
}

impl Symptom {
    /// Selection vocabulary in form order.
    pub const ALL: [Symptom; 10] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::ShortnessOfBreath,
        Symptom::ChestPain,
        Symptom::Fatigue,
        Symptom::Headache,
        Symptom::Nausea,
        Symptom::Dizziness,
        Symptom::SwellingInLegs,
        Symptom::Palpitations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::ShortnessOfBreath => "Shortness of Breath",
            Self::ChestPain => "Chest Pain",
            Self::Fatigue => "Fatigue",
            Self::Headache => "Headache",
            Self::Nausea => "Nausea",
            Self::Dizziness => "Dizziness",
            Self::SwellingInLegs => "Swelling in Legs",
            Self::Palpitations => "Palpitations",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Symptom::ALL
            .iter()
            .copied()
            .find(|sym| normalize(sym.label()) == wanted)
            .ok_or_else(|| InputError::UnknownSymptom(s.trim().to_string()))
    }
}

// "Shortness of Breath", "shortness-of-breath" and "SHORTNESS_OF_BREATH" are one label.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Serialize for Symptom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Symptom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Symptoms selected in one session.
///
/// Membership is what matching looks at; insertion order is kept for listing
/// in charts and the report. Re-selecting a symptom is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Symptom>", into = "Vec<Symptom>")]
pub struct SymptomSet {
    items: Vec<Symptom>,
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses labels in order, failing on the first unknown one.
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Result<Self, InputError> {
        let mut set = Self::new();
        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                continue;
            }
            set.insert(label.parse()?);
        }
        Ok(set)
    }

    /// Returns false when the symptom was already selected.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        if self.items.contains(&symptom) {
            return false;
        }
        self.items.push(symptom);
        true
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.items.contains(&symptom)
    }

    pub fn contains_all(&self, symptoms: &[Symptom]) -> bool {
        symptoms.iter().all(|s| self.contains(*s))
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Symptom>> for SymptomSet {
    fn from(items: Vec<Symptom>) -> Self {
        let mut set = Self::new();
        for s in items {
            set.insert(s);
        }
        set
    }
}

impl From<SymptomSet> for Vec<Symptom> {
    fn from(set: SymptomSet) -> Self {
        set.items
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        let mut set = Self::new();
        for s in iter {
            set.insert(s);
        }
        set
    }
}
