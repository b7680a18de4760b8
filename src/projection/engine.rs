//! Core projection engine for monthly compound-growth trajectories

use log::debug;

use super::points::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;

/// Compounding periods per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Project a fixed monthly-compounding annuity.
///
/// Each month interest accrues at `annual_rate_percent / 100 / 12` on the running
/// value and the contribution is added afterwards. The result holds one point per
/// elapsed month, starting with the untouched initial capital at month 0.
///
/// No validation or rounding happens here: negative rates decay the value, zero
/// years yield a single point, and non-finite inputs propagate to the output.
pub fn project(
    initial_capital: f64,
    monthly_contribution: f64,
    duration_years: u32,
    annual_rate_percent: f64,
) -> ProjectionResult {
    let months = duration_years.saturating_mul(MONTHS_PER_YEAR);
    let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64;

    let mut state = ProjectionState::new(initial_capital);
    let mut points: Vec<ProjectionPoint> = Vec::with_capacity(months as usize + 1);
    points.push(state.point());

    for _month in 1..=months {
        state.advance_month(monthly_rate, monthly_contribution);
        points.push(state.point());
    }

    debug!(
        "projected {} months at {}%: invested={:.2} value={:.2}",
        months, annual_rate_percent, state.invested, state.value
    );

    ProjectionResult {
        total_invested: state.invested,
        final_value: state.value,
        points,
    }
}
