pub mod conditions;
pub mod risk;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// One-line notice shown right after scoring.
    pub fn headline(self) -> &'static str {
        match self {
            Self::High => "High risk of heart disease detected.",
            Self::Moderate => "Moderate risk of heart disease.",
            Self::Low => "Low risk of heart disease.",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::High => {
                "High Risk: You have multiple significant risk factors. Immediate medical consultation is recommended."
            }
            Self::Moderate => {
                "Moderate Risk: You have some risk factors. Consider consulting a doctor for further evaluation."
            }
            Self::Low => {
                "Low Risk: You have minimal risk factors. Maintain a healthy lifestyle to minimize future risks."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    pub fired: bool,
    pub threshold: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u8,
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn fired(&self) -> impl Iterator<Item = &RiskFactor> {
        self.factors.iter().filter(|f| f.fired)
    }
}
