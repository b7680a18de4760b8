//! Projection engine for monthly compound-growth trajectories

mod state;
mod engine;
mod points;

pub use state::ProjectionState;
pub use engine::{project, MONTHS_PER_YEAR};
pub use points::{ProjectionPoint, ProjectionResult, ProjectionSummary};
