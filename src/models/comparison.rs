use serde::Deserialize;

use super::validate::{Validate, count, finite, magnitude, non_empty};
use crate::utils::units::format_percent;

/// Number of side-by-side slots on the comparison screen.
pub const MAX_SELECTED: usize = 3;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModelCompareModel {
    pub name: String,
    pub co2_kg: f64,
    pub energy_kwh: f64,
    pub gpu_hours: f64,
    /// 0–100, clamped on render.
    pub efficiency: f64,
    #[serde(deserialize_with = "count")]
    pub usage: u64,
}

impl ModelCompareModel {
    pub fn impact_label(&self) -> &'static str {
        if self.co2_kg < 1.0 {
            "Low impact"
        } else {
            "High impact"
        }
    }

    pub fn efficiency_display(&self) -> String {
        format_percent(self.efficiency)
    }
}

/// Response of `/api/models/compare`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModelComparison {
    pub models: Vec<ModelCompareModel>,
}

impl ModelComparison {
    pub fn find(&self, name: &str) -> Option<&ModelCompareModel> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }

    /// Selected models with the highest efficiency; ties keep the earliest slot.
    pub fn best_model<'a>(&'a self, selected: &SelectedModels) -> Option<&'a ModelCompareModel> {
        selected
            .iter()
            .filter_map(|name| self.find(name))
            .fold(None, |best: Option<&ModelCompareModel>, model| match best {
                Some(b) if model.efficiency > b.efficiency => Some(model),
                Some(b) => Some(b),
                None => Some(model),
            })
    }

    /// Grouped bar rows: one metric per row, one value per selected model.
    pub fn chart_rows(&self, selected: &SelectedModels) -> Vec<ComparisonRow> {
        let chosen: Vec<&ModelCompareModel> =
            selected.iter().filter_map(|name| self.find(name)).collect();

        let row = |metric: &'static str, value: fn(&ModelCompareModel) -> f64| ComparisonRow {
            metric,
            values: chosen.iter().map(|m| value(m)).collect(),
        };

        vec![
            row("CO₂ (g)", |m| m.co2_kg * 1000.0),
            row("Energy (Scaled kWh * 1k)", |m| m.energy_kwh * 1000.0),
            row("GPU Hours", |m| m.gpu_hours),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub values: Vec<f64>,
}

/// Bar colour for the model in slot `index`.
pub fn series_color(index: usize) -> String {
    format!("hsl({}, 70%, 45%)", 160 + index * 30)
}

/// Ordered, duplicate-free set of at most [`MAX_SELECTED`] model names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedModels(Vec<String>);

impl SelectedModels {
    /// First [`MAX_SELECTED`] distinct names returned by the backend.
    pub fn initial(comparison: &ModelComparison) -> Self {
        Self::from_names(comparison.names().map(str::to_string))
    }

    fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let mut out: Vec<String> = Vec::with_capacity(MAX_SELECTED);
        for name in names {
            if out.len() == MAX_SELECTED {
                break;
            }
            if !name.is_empty() && !out.contains(&name) {
                out.push(name);
            }
        }
        Self(out)
    }

    /// Replaces `slot` with `model` (or clears it with `None`), then drops empty
    /// slots and later duplicates. Slots past the current length append.
    pub fn replace_slot(&self, slot: usize, model: Option<String>) -> Self {
        if slot >= MAX_SELECTED {
            return self.clone();
        }

        let mut slots: Vec<Option<String>> = self.0.iter().cloned().map(Some).collect();
        if slot >= slots.len() {
            slots.resize(slot + 1, None);
        }
        slots[slot] = model.filter(|m| !m.is_empty());

        Self::from_names(slots.into_iter().flatten())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Validate for ModelCompareModel {
    fn validate(&self) -> Result<(), String> {
        non_empty("name", &self.name)?;
        magnitude("co2_kg", self.co2_kg)?;
        magnitude("energy_kwh", self.energy_kwh)?;
        magnitude("gpu_hours", self.gpu_hours)?;
        finite("efficiency", self.efficiency)
    }
}

impl Validate for ModelComparison {
    fn validate(&self) -> Result<(), String> {
        self.models.validate()
    }
}
