//! Projection state tracking for a single trajectory

use super::engine::MONTHS_PER_YEAR;
use super::points::ProjectionPoint;

/// State of the portfolio at a point in time during projection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Elapsed months (0 = initial state, no contribution applied yet)
    pub month: u32,

    /// Portfolio value at the end of the elapsed month
    pub value: f64,

    /// Initial capital plus every contribution made so far
    pub invested: f64,
}

impl ProjectionState {
    /// Initialize state at month 0 from the starting capital
    pub fn new(initial_capital: f64) -> Self {
        Self {
            month: 0,
            value: initial_capital,
            invested: initial_capital,
        }
    }

    /// Advance one month: accrue interest on the running value, then add the contribution
    pub fn advance_month(&mut self, monthly_rate: f64, monthly_contribution: f64) {
        self.month += 1;
        self.value = self.value * (1.0 + monthly_rate) + monthly_contribution;
        self.invested += monthly_contribution;
    }

    /// Elapsed time in years
    pub fn time_years(&self) -> f64 {
        self.month as f64 / MONTHS_PER_YEAR as f64
    }

    /// Snapshot of the current state as a chart sample
    pub fn point(&self) -> ProjectionPoint {
        ProjectionPoint {
            time_years: self.time_years(),
            value: self.value,
        }
    }
}
