//! Projection inputs, their slider bounds and scenario loading

mod data;
mod bounds;
pub mod loader;

pub use data::{
    ProjectionInputs, DEFAULT_ARPU, DEFAULT_CHURN_RATE, DEFAULT_INITIAL_CUSTOMERS,
    DEFAULT_INITIAL_MRR, DEFAULT_MONTHLY_GROWTH_RATE, DEFAULT_PROJECTION_MONTHS,
};
pub use bounds::{InputBounds, InputField, SliderRange};
pub use loader::{load_scenarios, load_scenarios_from_reader, load_scenarios_json, NamedScenario};
