//! CSV export of trajectories and scenario summaries

use serde::Serialize;
use std::io::Write;

use crate::scenario::ScenarioSet;

#[derive(Serialize)]
struct PointRow {
    month: usize,
    years: f64,
    pessimistic: f64,
    median: f64,
    optimistic: f64,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    id: &'a str,
    scenario: &'a str,
    rate: f64,
    invested: f64,
    value: f64,
    performance: f64,
}

/// Write one row per month with the three scenario values side by side
pub fn write_points_csv<W: Write>(writer: W, set: &ScenarioSet) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let rows = set
        .median
        .points
        .iter()
        .zip(&set.pessimistic.points)
        .zip(&set.optimistic.points)
        .enumerate();

    for (month, ((med, pess), opt)) in rows {
        wtr.serialize(PointRow {
            month,
            years: med.time_years,
            pessimistic: pess.value,
            median: med.value,
            optimistic: opt.value,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write one row per (submission, scenario)
pub fn write_summaries_csv<W: Write>(writer: W, sets: &[(String, ScenarioSet)]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (id, set) in sets {
        for (scenario, result) in set.iter() {
            wtr.serialize(SummaryRow {
                id: id.as_str(),
                scenario: scenario.key(),
                rate: set.rate(scenario),
                invested: result.total_invested,
                value: result.final_value,
                performance: result.performance(),
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
