//! Growth Projection - compound-interest projections under three rate scenarios
//!
//! This library provides:
//! - A pure monthly-compounding projection engine (interest, then contribution)
//! - Pessimistic / median / optimistic scenario orchestration (±2 points)
//! - Input parsing, guard validation and CSV batch loading
//! - Presentation helpers: fr-FR currency summaries, chart series, CSV export
//! - A keyword-matched FAQ assistant with delayed chat replies

pub mod input;
pub mod projection;
pub mod scenario;
pub mod report;
pub mod assistant;

// Re-export commonly used types
pub use input::{ScenarioInput, SimulationForm, InputError};
pub use projection::{project, ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use scenario::{Scenario, ScenarioRunner, ScenarioSet, SCENARIO_SPREAD_PCT};
pub use report::{ChartData, Dashboard, SummaryBox};
pub use assistant::{ChatSession, FaqBase};
