//! SaaS Projector - month-by-month customer and revenue forecasts
//!
//! This library provides:
//! - The projection engine: inputs in, ordered monthly data points out
//! - Slider bounds and scenario loading for the callers that collect inputs
//! - Summary, table, chart and CSV/JSON reporting over projection output
//! - A memoizing and parallel batch scenario runner

pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectorError, Result};
pub use inputs::{InputBounds, NamedScenario, ProjectionInputs};
pub use projection::{project, ProjectionDataPoint, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use scenario::ScenarioRunner;
