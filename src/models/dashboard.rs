use serde::Deserialize;

use super::validate::{Validate, count, finite, magnitude, non_empty};
use crate::utils::units::{
    clamp_score, format_percent, format_score, scale_energy, scale_mass, to_fixed,
};

/// Placeholder shown when a magnitude cannot be scaled.
pub const UNAVAILABLE: &str = "—";

/// Headline totals for the overview screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardMetrics {
    pub co2_kg: f64,
    pub energy_kwh: f64,
    /// Composite 0–100 score; may arrive outside the range and is clamped on render.
    pub green_score: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnergyTrendPoint {
    pub label: String,
    pub energy: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Co2ByModel {
    pub model: String,
    pub co2: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MostUsedModel {
    pub name: String,
    #[serde(deserialize_with = "count")]
    pub usage: u64,
    pub co2: f64,
    pub efficiency: f64,
}

impl MostUsedModel {
    /// CO₂ for a per-model card: grams below 10 g, otherwise kilograms to 8 places.
    pub fn display_co2(&self) -> String {
        format_model_co2(self.co2)
    }

    pub fn efficiency_display(&self) -> String {
        format_percent(self.efficiency)
    }
}

/// Server-side aggregates backing the charts and the most-used list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardInsights {
    #[serde(default)]
    pub energy_trend: Vec<EnergyTrendPoint>,
    #[serde(default)]
    pub co2_by_model: Vec<Co2ByModel>,
    #[serde(default)]
    pub most_used_models: Vec<MostUsedModel>,
}

impl DashboardInsights {
    /// The last `n` energy readings, oldest first.
    pub fn recent_energy(&self, n: usize) -> Vec<f64> {
        let skip = self.energy_trend.len().saturating_sub(n);
        self.energy_trend
            .iter()
            .skip(skip)
            .map(|p| p.energy)
            .collect()
    }

    /// `(labels, energy)` for the usage-over-time chart.
    pub fn energy_series(&self) -> (Vec<String>, Vec<f64>) {
        self.energy_trend
            .iter()
            .map(|p| (p.label.clone(), p.energy))
            .unzip()
    }

    /// `(models, co2)` for the emissions-by-model chart.
    pub fn co2_series(&self) -> (Vec<String>, Vec<f64>) {
        self.co2_by_model
            .iter()
            .map(|c| (c.model.clone(), c.co2))
            .unzip()
    }
}

/// Period-over-period percentage deltas. `None` means the backend lacks history.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardTrends {
    #[serde(default)]
    pub co2_change_pct: Option<f64>,
    #[serde(default)]
    pub energy_change_pct: Option<f64>,
    #[serde(default)]
    pub green_score_change_pct: Option<f64>,
}

impl DashboardTrends {
    pub fn indicator(&self, kind: TrendKind) -> TrendIndicator {
        let change = match kind {
            TrendKind::Co2 => self.co2_change_pct,
            TrendKind::Energy => self.energy_change_pct,
            TrendKind::GreenScore => self.green_score_change_pct,
        };
        TrendIndicator::new(change, kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendKind {
    Co2,
    Energy,
    GreenScore,
}

impl TrendKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Co2 => "reduction",
            Self::Energy => "decrease",
            Self::GreenScore => "improvement",
        }
    }
}

/// Caption and arrow orientation under a KPI value.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendIndicator {
    pub text: String,
    /// Arrow is rotated for any positive change, whatever the metric.
    pub flipped: bool,
}

impl TrendIndicator {
    pub fn new(change: Option<f64>, kind: TrendKind) -> Self {
        // Zero and NaN read as "no data", same as a missing value.
        let text = match change {
            Some(pct) if pct != 0.0 && !pct.is_nan() => format!("{pct}% {}", kind.noun()),
            _ => "No data".to_string(),
        };
        Self {
            text,
            flipped: change.unwrap_or(0.0) > 0.0,
        }
    }
}

/// One KPI card's worth of rendered values.
#[derive(Clone, Debug, PartialEq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: String,
    pub caption: &'static str,
    pub trend: TrendIndicator,
}

/// Everything fetched in one polling round.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub insights: DashboardInsights,
    pub trends: DashboardTrends,
}

impl DashboardSnapshot {
    pub fn kpis(&self) -> [Kpi; 3] {
        [
            Kpi {
                title: "Total CO₂ Emissions",
                value: scale_mass(self.metrics.co2_kg).unwrap_or_else(|_| UNAVAILABLE.to_string()),
                caption: "(CO₂)",
                trend: self.trends.indicator(TrendKind::Co2),
            },
            Kpi {
                title: "Energy Consumption",
                value: scale_energy(self.metrics.energy_kwh)
                    .unwrap_or_else(|_| UNAVAILABLE.to_string()),
                caption: "(Energy Consumption)",
                trend: self.trends.indicator(TrendKind::Energy),
            },
            Kpi {
                title: "Green AI Score",
                value: format_score(self.metrics.green_score),
                caption: "/ 100",
                trend: self.trends.indicator(TrendKind::GreenScore),
            },
        ]
    }

    /// Stroke dash for the score ring (circumference normalised to 100).
    pub fn score_dasharray(&self) -> String {
        format!("{}, 100", clamp_score(self.metrics.green_score))
    }
}

pub fn format_model_co2(co2_kg: f64) -> String {
    if co2_kg > 0.0 && co2_kg < 0.01 {
        format!("{} g", to_fixed(co2_kg * 1000.0, 2))
    } else {
        format!("{} kg", to_fixed(co2_kg, 8))
    }
}

impl Validate for DashboardMetrics {
    fn validate(&self) -> Result<(), String> {
        magnitude("co2_kg", self.co2_kg)?;
        magnitude("energy_kwh", self.energy_kwh)?;
        finite("green_score", self.green_score)
    }
}

impl Validate for DashboardInsights {
    fn validate(&self) -> Result<(), String> {
        for point in &self.energy_trend {
            magnitude("energy_trend.energy", point.energy)?;
        }
        for entry in &self.co2_by_model {
            non_empty("co2_by_model.model", &entry.model)?;
            magnitude("co2_by_model.co2", entry.co2)?;
        }
        for model in &self.most_used_models {
            non_empty("most_used_models.name", &model.name)?;
            magnitude("most_used_models.co2", model.co2)?;
            finite("most_used_models.efficiency", model.efficiency)?;
        }
        Ok(())
    }
}

impl Validate for DashboardTrends {
    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("co2_change_pct", self.co2_change_pct),
            ("energy_change_pct", self.energy_change_pct),
            ("green_score_change_pct", self.green_score_change_pct),
        ];
        fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .try_for_each(|(name, v)| finite(name, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_indicator_present() {
        let trend = TrendIndicator::new(Some(12.5), TrendKind::Co2);
        assert_eq!(trend.text, "12.5% reduction");
        assert!(trend.flipped);
    }

    #[test]
    fn test_trend_indicator_negative_keeps_arrow() {
        let trend = TrendIndicator::new(Some(-3.0), TrendKind::Energy);
        assert_eq!(trend.text, "-3% decrease");
        assert!(!trend.flipped);
    }

    #[test]
    fn test_trend_indicator_falsy_values() {
        for change in [None, Some(0.0), Some(f64::NAN)] {
            let trend = TrendIndicator::new(change, TrendKind::GreenScore);
            assert_eq!(trend.text, "No data");
            assert!(!trend.flipped);
        }
    }

    #[test]
    fn test_format_model_co2() {
        assert_eq!(format_model_co2(0.005), "5.00 g");
        assert_eq!(format_model_co2(0.02), "0.02000000 kg");
        assert_eq!(format_model_co2(0.0), "0.00000000 kg");
    }

    #[test]
    fn test_recent_energy_takes_tail() {
        let insights = DashboardInsights {
            energy_trend: (1..=6)
                .map(|i| EnergyTrendPoint {
                    label: format!("M{i}"),
                    energy: f64::from(i),
                })
                .collect(),
            ..Default::default()
        };
        assert_eq!(insights.recent_energy(4), vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(insights.recent_energy(10).len(), 6);
    }

    #[test]
    fn test_trends_deserialize_with_nulls_and_missing() {
        let json = r#"{ "co2_change_pct": null, "energy_change_pct": 4.2 }"#;
        let trends: DashboardTrends = serde_json::from_str(json).unwrap();
        assert_eq!(trends.co2_change_pct, None);
        assert_eq!(trends.energy_change_pct, Some(4.2));
        assert_eq!(trends.green_score_change_pct, None);
    }

    #[test]
    fn test_score_dasharray_is_clamped() {
        let snapshot = DashboardSnapshot {
            metrics: DashboardMetrics {
                co2_kg: 1.0,
                energy_kwh: 1.0,
                green_score: 140.0,
            },
            insights: DashboardInsights::default(),
            trends: DashboardTrends::default(),
        };
        assert_eq!(snapshot.score_dasharray(), "100, 100");
    }

    #[test]
    fn test_metrics_validation() {
        let bad = DashboardMetrics {
            co2_kg: -1.0,
            energy_kwh: 0.0,
            green_score: 50.0,
        };
        assert!(bad.validate().is_err());
    }
}
