//! Projection engine for monthly customer and revenue forecasts

mod state;
mod engine;
mod datapoints;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine};
pub use datapoints::{ProjectionDataPoint, ProjectionResult, ProjectionSummary, MONTHS_PER_YEAR};
