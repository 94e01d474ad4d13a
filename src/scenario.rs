//! Scenario runner for repeated and batch projections
//!
//! Holds the last projection so a caller that re-renders on every input
//! change only recomputes when the inputs actually differ, and fans
//! independent scenarios out across threads.

use crate::inputs::{NamedScenario, ProjectionInputs};
use crate::projection::{ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Memoizing projection runner
///
/// # Example
/// ```ignore
/// let mut runner = ScenarioRunner::new();
///
/// // Slider moved: recomputes
/// let result = runner.project(&inputs);
///
/// // Re-render with the same inputs: cached
/// let again = runner.project(&inputs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Last projection computed, keyed by its own inputs
    last: Option<ProjectionResult>,

    /// Number of projections actually computed
    computed: usize,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project `inputs`, reusing the previous result when inputs are unchanged
    pub fn project(&mut self, inputs: &ProjectionInputs) -> &ProjectionResult {
        if !matches!(&self.last, Some(result) if result.inputs == *inputs) {
            self.last = None;
        }

        let computed = &mut self.computed;
        self.last.get_or_insert_with(|| {
            *computed += 1;
            log::debug!("inputs changed, recomputing projection #{}", computed);
            ProjectionEngine::new(*inputs).run()
        })
    }

    /// Last computed projection, if any
    pub fn last(&self) -> Option<&ProjectionResult> {
        self.last.as_ref()
    }

    /// How many projections were computed rather than served from cache
    pub fn computed(&self) -> usize {
        self.computed
    }

    /// Run independent projections in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<(String, ProjectionResult)> {
        scenarios
            .par_iter()
            .map(|s| (s.name.clone(), ProjectionEngine::new(s.inputs).run()))
            .collect()
    }
}
