//! Scenario inputs, form parsing and batch loading

mod data;
mod error;
mod form;
pub mod loader;

pub use data::{ScenarioInput, Submission, MAX_DURATION_YEARS};
pub use error::{InputError, LoadError};
pub use form::SimulationForm;
pub use loader::{load_inputs, load_inputs_from_reader};
