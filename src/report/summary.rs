//! Per-scenario summary boxes

use serde::Serialize;

use super::format::format_euros;
use crate::projection::ProjectionResult;
use crate::scenario::{Scenario, ScenarioSet};

/// Formatted invested / value / performance figures for one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBox {
    pub scenario: Scenario,
    pub invested: String,
    pub value: String,
    pub performance: String,
}

impl SummaryBox {
    pub fn from_result(scenario: Scenario, result: &ProjectionResult) -> Self {
        Self {
            scenario,
            invested: format_euros(result.total_invested),
            value: format_euros(result.final_value),
            performance: format_euros(result.performance()),
        }
    }

    /// One box per scenario, in display order
    pub fn for_scenarios(set: &ScenarioSet) -> [SummaryBox; 3] {
        Scenario::ALL.map(|scenario| Self::from_result(scenario, set.get(scenario)))
    }

    /// Element ids the box fills, e.g. `pess-invested`
    pub fn field_ids(&self) -> [String; 3] {
        let key = self.scenario.key();
        [
            format!("{key}-invested"),
            format!("{key}-value"),
            format!("{key}-perf"),
        ]
    }
}
