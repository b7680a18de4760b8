//! Raw simulation form fields

use serde::{Deserialize, Serialize};

use super::data::{ScenarioInput, MAX_DURATION_YEARS};
use super::error::InputError;

/// Text of the four simulation fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationForm {
    pub capital: String,
    pub monthly: String,
    pub years: String,
    pub rate: String,
}

impl SimulationForm {
    pub fn new(
        capital: impl Into<String>,
        monthly: impl Into<String>,
        years: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            capital: capital.into(),
            monthly: monthly.into(),
            years: years.into(),
            rate: rate.into(),
        }
    }

    /// Read the fields into an input; blank fields count as 0
    pub fn parse(&self) -> Result<ScenarioInput, InputError> {
        let initial_capital = parse_field("capital", &self.capital)?;
        let monthly_contribution = parse_field("monthly", &self.monthly)?;
        let years = parse_field("years", &self.years)?;
        let annual_rate_percent = parse_field("rate", &self.rate)?;

        if years < 0.0 || years.fract() != 0.0 {
            return Err(InputError::InvalidDuration { value: years });
        }
        if years > MAX_DURATION_YEARS as f64 {
            return Err(InputError::DurationTooLong {
                years,
                max: MAX_DURATION_YEARS,
            });
        }

        Ok(ScenarioInput::new(
            initial_capital,
            monthly_contribution,
            years as u32,
            annual_rate_percent,
        ))
    }

    /// Parse and apply the submission guard
    pub fn submit(&self) -> Result<ScenarioInput, InputError> {
        let input = self.parse()?;
        input.validate()?;
        Ok(input)
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::invalid_number(field, raw))?;
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(value)
}
