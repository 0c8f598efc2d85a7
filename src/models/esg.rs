use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::validate::{Validate, count, finite, magnitude, non_empty};
use crate::utils::units::{format_percent, format_score, to_fixed};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EsgSummary {
    pub total_co2_kg: f64,
    pub total_energy_kwh: f64,
    pub avg_green_score: f64,
    #[serde(deserialize_with = "count")]
    pub total_runs: u64,
}

impl EsgSummary {
    pub fn grade(&self) -> EsgGrade {
        EsgGrade::from_score(self.avg_green_score)
    }

    /// Sentence used in the executive summary.
    pub fn co2_statement(&self) -> String {
        if self.total_co2_kg == 0.0 {
            "No emissions recorded yet.".to_string()
        } else {
            format!(
                "Total CO₂ emissions recorded are {} kg across {} runs.",
                self.total_co2_kg, self.total_runs
            )
        }
    }

    pub fn co2_display(&self) -> String {
        format!("{} kg", to_fixed(self.total_co2_kg, 6))
    }

    pub fn energy_display(&self) -> String {
        format!("{} kWh", to_fixed(self.total_energy_kwh, 6))
    }

    pub fn score_display(&self) -> String {
        format_score(self.avg_green_score)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EsgModelRow {
    pub model: String,
    pub co2_kg: f64,
    pub energy_kwh: f64,
    pub efficiency: f64,
    #[serde(deserialize_with = "count")]
    pub runs: u64,
}

impl EsgModelRow {
    pub fn rating(&self) -> ModelRating {
        ModelRating::from_efficiency(self.efficiency)
    }

    pub fn efficiency_display(&self) -> String {
        format_percent(self.efficiency)
    }
}

/// Summary plus per-model rows, fetched together.
#[derive(Clone, Debug, PartialEq)]
pub struct EsgReport {
    pub summary: EsgSummary,
    pub models: Vec<EsgModelRow>,
}

/// Organisation-wide compliance grade from the average green score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EsgGrade {
    C,
    B,
    A,
    APlus,
}

impl EsgGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::APlus
        } else if score >= 80.0 {
            Self::A
        } else if score >= 70.0 {
            Self::B
        } else {
            Self::C
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl std::fmt::Display for EsgGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-model rating; unlike [`EsgGrade`] it has a fifth band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModelRating {
    D,
    C,
    B,
    A,
    APlus,
}

impl ModelRating {
    pub fn from_efficiency(efficiency: f64) -> Self {
        if efficiency >= 90.0 {
            Self::APlus
        } else if efficiency >= 80.0 {
            Self::A
        } else if efficiency >= 70.0 {
            Self::B
        } else if efficiency >= 60.0 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for ModelRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Downloadable report formats served by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Pdf,
}

impl ReportFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "Download CSV",
            Self::Pdf => "Download PDF",
        }
    }
}

/// `"Q4, 2026"` for the reporting period containing `date`.
pub fn quarter_label(date: NaiveDate) -> String {
    format!("Q{}, {}", date.month0() / 3 + 1, date.year())
}

impl Validate for EsgSummary {
    fn validate(&self) -> Result<(), String> {
        magnitude("total_co2_kg", self.total_co2_kg)?;
        magnitude("total_energy_kwh", self.total_energy_kwh)?;
        finite("avg_green_score", self.avg_green_score)
    }
}

impl Validate for EsgModelRow {
    fn validate(&self) -> Result<(), String> {
        non_empty("model", &self.model)?;
        magnitude("co2_kg", self.co2_kg)?;
        magnitude("energy_kwh", self.energy_kwh)?;
        finite("efficiency", self.efficiency)
    }
}
