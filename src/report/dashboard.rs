//! Caller-owned view of the latest submission
//!
//! The dashboard holds at most one rendered result. A successful submission
//! replaces it wholesale; a rejected one leaves it untouched.

use log::{info, warn};

use super::chart::ChartData;
use super::summary::SummaryBox;
use crate::input::{InputError, SimulationForm};
use crate::scenario::{ScenarioRunner, ScenarioSet};

/// Everything shown for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub scenarios: ScenarioSet,
    pub summaries: [SummaryBox; 3],
    pub chart: ChartData,
}

impl Rendered {
    pub fn from_scenarios(scenarios: ScenarioSet) -> Self {
        let summaries = SummaryBox::for_scenarios(&scenarios);
        let chart = ChartData::from_scenarios(&scenarios);
        Self {
            scenarios,
            summaries,
            chart,
        }
    }
}

#[derive(Debug, Default)]
pub struct Dashboard {
    runner: ScenarioRunner,
    current: Option<Rendered>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form, run the three scenarios and swap in the new view.
    ///
    /// Returns the view that was replaced, if any.
    pub fn submit(&mut self, form: &SimulationForm) -> Result<Option<Rendered>, InputError> {
        let input = form.submit().map_err(|e| {
            warn!("submission rejected: {e}");
            e
        })?;

        let rendered = Rendered::from_scenarios(self.runner.run(&input));
        info!(
            "chart replaced: {} points per series",
            rendered.chart.labels.len()
        );
        Ok(self.current.replace(rendered))
    }

    pub fn current(&self) -> Option<&Rendered> {
        self.current.as_ref()
    }

    pub fn chart(&self) -> Option<&ChartData> {
        self.current.as_ref().map(|r| &r.chart)
    }

    /// Drop the current view
    pub fn clear(&mut self) -> Option<Rendered> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::new();
        assert!(dashboard.current().is_none());
        assert!(dashboard.chart().is_none());
    }

    #[test]
    fn test_submit_replaces_chart() {
        let mut dashboard = Dashboard::new();

        let first = dashboard
            .submit(&SimulationForm::new("1000", "100", "5", "6"))
            .unwrap();
        assert!(first.is_none());
        assert_eq!(dashboard.chart().unwrap().labels.len(), 61);

        let replaced = dashboard
            .submit(&SimulationForm::new("1000", "100", "10", "6"))
            .unwrap()
            .unwrap();
        assert_eq!(replaced.chart.labels.len(), 61);
        assert_eq!(dashboard.chart().unwrap().labels.len(), 121);
    }

    #[test]
    fn test_rejected_submission_keeps_chart() {
        let mut dashboard = Dashboard::new();
        dashboard
            .submit(&SimulationForm::new("2000", "0", "3", "4"))
            .unwrap();
        let before = dashboard.current().cloned();

        let err = dashboard
            .submit(&SimulationForm::new("2000", "0", "", "4"))
            .unwrap_err();
        assert_eq!(err, InputError::MissingDuration);
        assert_eq!(dashboard.current().cloned(), before);
    }

    #[test]
    fn test_oversized_duration_never_projected() {
        let mut dashboard = Dashboard::new();
        let err = dashboard
            .submit(&SimulationForm::new("1000", "", "4000000000", "5"))
            .unwrap_err();
        assert!(matches!(err, InputError::DurationTooLong { .. }));
        assert!(dashboard.current().is_none());
    }

    #[test]
    fn test_clear() {
        let mut dashboard = Dashboard::new();
        dashboard
            .submit(&SimulationForm::new("1", "0", "1", "0"))
            .unwrap();
        assert!(dashboard.clear().is_some());
        assert!(dashboard.current().is_none());
    }
}
