//! Multi-series line chart data for the three scenarios
//!
//! Field names follow the camelCase convention of JS charting libraries so the
//! JSON can be handed to a renderer as-is.

use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, ScenarioSet};

/// Line styling for one scenario series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub border_color: &'static str,
    pub border_width: f64,
}

impl SeriesStyle {
    pub const TENSION: f64 = 0.25;

    pub fn for_scenario(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Pessimistic => Self { border_color: "#f97373", border_width: 1.3 },
            Scenario::Median => Self { border_color: "#22c55e", border_width: 2.0 },
            Scenario::Optimistic => Self { border_color: "#38bdf8", border_width: 1.5 },
        }
    }
}

/// One line of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub tension: f64,
    pub border_width: f64,
    pub point_radius: f64,
}

/// X labels plus one dataset per scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Build the chart from a scenario set; the median series drives the x axis
    pub fn from_scenarios(set: &ScenarioSet) -> Self {
        let labels = set
            .median
            .points
            .iter()
            .map(|p| year_label(p.time_years))
            .collect();

        let datasets = set
            .iter()
            .map(|(scenario, result)| {
                let style = SeriesStyle::for_scenario(scenario);
                ChartDataset {
                    label: scenario.label().to_string(),
                    data: result.points.iter().map(|p| p.value).collect(),
                    border_color: style.border_color.to_string(),
                    tension: SeriesStyle::TENSION,
                    border_width: style.border_width,
                    point_radius: 0.0,
                }
            })
            .collect();

        Self { labels, datasets }
    }

    pub fn dataset(&self, scenario: Scenario) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.label == scenario.label())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Years with one decimal, halves rounded up (`0.25` -> `"0.3"`)
fn year_label(time_years: f64) -> String {
    format!("{:.1}", (time_years * 10.0).round() / 10.0)
}
