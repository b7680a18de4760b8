//! Output structures for projections

use serde::{Deserialize, Serialize};

/// One (time, value) sample of a projected trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Elapsed time in years (month index / 12)
    pub time_years: f64,

    /// Portfolio value at that time
    pub value: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Initial capital plus all contributions made
    pub total_invested: f64,

    /// Portfolio value after the last month
    pub final_value: f64,

    /// One point per elapsed month, month 0 first
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    /// Number of projected months (excludes the initial point)
    pub fn months(&self) -> u32 {
        self.points.len().saturating_sub(1) as u32
    }

    /// Value at the end of a given month, if it was projected
    pub fn value_at_month(&self, month: u32) -> Option<f64> {
        self.points.get(month as usize).map(|p| p.value)
    }

    /// Gain (or loss) over what was invested
    pub fn performance(&self) -> f64 {
        self.final_value - self.total_invested
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            months: self.months(),
            total_invested: self.total_invested,
            final_value: self.final_value,
            performance: self.performance(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub total_invested: f64,
    pub final_value: f64,
    pub performance: f64,
}
