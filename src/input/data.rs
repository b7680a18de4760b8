//! Scenario input value objects

use serde::{Deserialize, Serialize};

use super::error::InputError;
use crate::projection::{project, ProjectionResult};

/// Longest duration a submission may ask for
pub const MAX_DURATION_YEARS: u32 = 100;

/// The four numbers a projection is run on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Starting capital (month 0 value)
    pub initial_capital: f64,

    /// Added at the end of every month; negative means a withdrawal
    pub monthly_contribution: f64,

    /// Whole years to project
    pub duration_years: u32,

    /// Annual interest rate in percent (6.0 = 6%)
    pub annual_rate_percent: f64,
}

impl ScenarioInput {
    pub fn new(
        initial_capital: f64,
        monthly_contribution: f64,
        duration_years: u32,
        annual_rate_percent: f64,
    ) -> Self {
        Self {
            initial_capital,
            monthly_contribution,
            duration_years,
            annual_rate_percent,
        }
    }

    /// Same capital, contribution and duration at another rate
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..*self
        }
    }

    /// Run the engine on these inputs
    pub fn project(&self) -> ProjectionResult {
        project(
            self.initial_capital,
            self.monthly_contribution,
            self.duration_years,
            self.annual_rate_percent,
        )
    }

    /// Submission guard: finite numbers, non-zero capital and duration.
    ///
    /// The engine accepts anything; this is what callers check before charting.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("capital", self.initial_capital),
            ("monthly", self.monthly_contribution),
            ("rate", self.annual_rate_percent),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        if self.initial_capital == 0.0 {
            return Err(InputError::MissingCapital);
        }
        if self.duration_years == 0 {
            return Err(InputError::MissingDuration);
        }
        if self.duration_years > MAX_DURATION_YEARS {
            return Err(InputError::DurationTooLong {
                years: self.duration_years as f64,
                max: MAX_DURATION_YEARS,
            });
        }
        Ok(())
    }
}

/// A labelled input from a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub input: ScenarioInput,
}
