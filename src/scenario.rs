//! Scenario runner for the pessimistic / median / optimistic projections
//!
//! Every submission is projected three times with identical capital, contribution
//! and duration; only the annual rate moves by a fixed spread around the median.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::input::ScenarioInput;
use crate::projection::ProjectionResult;

/// Rate spread (percentage points) between the median and the outer scenarios
pub const SCENARIO_SPREAD_PCT: f64 = 2.0;

/// One of the three rate scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Pessimistic,
    Median,
    Optimistic,
}

impl Scenario {
    /// All scenarios in display order
    pub const ALL: [Scenario; 3] = [Scenario::Pessimistic, Scenario::Median, Scenario::Optimistic];

    /// Offset applied to the median annual rate, in percentage points
    pub fn rate_offset(&self) -> f64 {
        match self {
            Scenario::Pessimistic => -SCENARIO_SPREAD_PCT,
            Scenario::Median => 0.0,
            Scenario::Optimistic => SCENARIO_SPREAD_PCT,
        }
    }

    /// Annual rate used by this scenario for a given median rate
    pub fn rate(&self, median_rate_percent: f64) -> f64 {
        median_rate_percent + self.rate_offset()
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Pessimistic => "Pessimiste",
            Scenario::Median => "Médian",
            Scenario::Optimistic => "Optimiste",
        }
    }

    /// Short key used to prefix summary fields
    pub fn key(&self) -> &'static str {
        match self {
            Scenario::Pessimistic => "pess",
            Scenario::Median => "med",
            Scenario::Optimistic => "opt",
        }
    }
}

/// The three projections for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// Input with the median rate
    pub input: ScenarioInput,
    pub pessimistic: ProjectionResult,
    pub median: ProjectionResult,
    pub optimistic: ProjectionResult,
}

impl ScenarioSet {
    pub fn get(&self, scenario: Scenario) -> &ProjectionResult {
        match scenario {
            Scenario::Pessimistic => &self.pessimistic,
            Scenario::Median => &self.median,
            Scenario::Optimistic => &self.optimistic,
        }
    }

    /// Annual rate the given scenario was projected with
    pub fn rate(&self, scenario: Scenario) -> f64 {
        scenario.rate(self.input.annual_rate_percent)
    }

    /// Iterate scenarios in display order
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, &ProjectionResult)> {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Runs the three scenarios for one or many inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single scenario for an input holding the median rate
    pub fn run_scenario(&self, input: &ScenarioInput, scenario: Scenario) -> ProjectionResult {
        input.with_rate(scenario.rate(input.annual_rate_percent)).project()
    }

    /// Run pessimistic, median and optimistic projections, in that order
    pub fn run(&self, input: &ScenarioInput) -> ScenarioSet {
        debug!(
            "running scenarios around {}% for {} years",
            input.annual_rate_percent, input.duration_years
        );
        let pessimistic = self.run_scenario(input, Scenario::Pessimistic);
        let median = self.run_scenario(input, Scenario::Median);
        let optimistic = self.run_scenario(input, Scenario::Optimistic);

        ScenarioSet {
            input: *input,
            pessimistic,
            median,
            optimistic,
        }
    }

    /// Run the scenarios for multiple inputs
    pub fn run_batch(&self, inputs: &[ScenarioInput]) -> Vec<ScenarioSet> {
        inputs.iter().map(|input| self.run(input)).collect()
    }
}
