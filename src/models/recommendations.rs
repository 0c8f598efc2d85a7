use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::validate::{Validate, magnitude, non_empty};
use crate::utils::units::to_fixed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "Low",
            Impact::Medium => "Medium",
            Impact::High => "High",
        }
    }

    /// Badge colour class
    pub fn css_class(&self) -> &'static str {
        match self {
            Impact::High => "impact-high",
            Impact::Medium => "impact-medium",
            Impact::Low => "impact-low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub co2_saving_kg: f64,
    /// Space-separated gradient classes from the backend, applied to the card icon.
    #[serde(rename = "impactColor", default)]
    pub impact_color: String,
}

impl Recommendation {
    pub fn savings_display(&self) -> String {
        format!("{} kg CO₂/month", to_fixed(self.co2_saving_kg, 2))
    }

    /// Classes for the card icon. Falls back to the impact colour when the
    /// backend sends no gradient.
    pub fn icon_classes(&self) -> Vec<String> {
        let mut classes = vec!["recommendation-icon".to_string()];
        if self.impact_color.trim().is_empty() {
            classes.push(self.impact.css_class().to_string());
        } else {
            classes.extend(self.impact_color.split_whitespace().map(str::to_string));
        }
        classes
    }
}

#[derive(Deserialize, Debug)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Body sent to `/api/recommendations/ai`.
///
/// Always the same literal workload; it is not derived from any selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub model: &'static str,
    pub gpu_hours: u32,
    pub batch_size: u32,
    pub region: &'static str,
    pub precision: &'static str,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            model: "bert-large",
            gpu_hours: 10,
            batch_size: 10,
            region: "pune",
            precision: "fp32",
        }
    }
}

/// Total potential monthly savings across all recommendations.
pub fn total_savings_kg(recommendations: &[Recommendation]) -> f64 {
    recommendations.iter().map(|r| r.co2_saving_kg).sum()
}

/// Indices the user has marked as applied in this session. Never sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppliedRecommendations(BTreeSet<usize>);

impl AppliedRecommendations {
    pub fn apply(&self, index: usize) -> Self {
        let mut next = self.0.clone();
        next.insert(index);
        Self(next)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Static tips shown under the backend recommendations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickTip {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
}

pub const QUICK_TIPS: [QuickTip; 3] = [
    QuickTip {
        title: "Batch Your Requests",
        description: "Group API calls together to reduce overhead",
        impact: Impact::Low,
    },
    QuickTip {
        title: "Cache Frequent Results",
        description: "Store and reuse common model outputs",
        impact: Impact::Medium,
    },
    QuickTip {
        title: "Schedule During Off-Peak",
        description: "Run heavy workloads when renewable energy is abundant",
        impact: Impact::Medium,
    },
];

impl Validate for Recommendation {
    fn validate(&self) -> Result<(), String> {
        non_empty("title", &self.title)?;
        magnitude("co2_saving_kg", self.co2_saving_kg)
    }
}

impl Validate for RecommendationsResponse {
    fn validate(&self) -> Result<(), String> {
        self.recommendations.validate()
    }
}
