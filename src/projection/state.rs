//! Running state carried from one projected month to the next

use crate::inputs::ProjectionInputs;

/// Customer and revenue balances at a point in the projection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Last completed month (0 before the first month)
    pub month: u32,

    /// Customers at the end of the last completed month
    pub customers: f64,

    /// MRR at the end of the last completed month
    pub mrr: f64,
}

impl ProjectionState {
    /// Month-0 balances taken straight from the inputs
    pub fn from_inputs(inputs: &ProjectionInputs) -> Self {
        Self {
            month: 0,
            customers: inputs.initial_customers,
            mrr: inputs.initial_mrr,
        }
    }

    /// Roll the balances forward to the end of the next month
    pub fn advance_month(&mut self, ending_customers: f64, mrr: f64) {
        self.month += 1;
        self.customers = ending_customers;
        self.mrr = mrr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inputs() {
        let state = ProjectionState::from_inputs(&ProjectionInputs::default());
        assert_eq!(state.month, 0);
        assert_eq!(state.customers, 100.0);
        assert_eq!(state.mrr, 5000.0);
    }

    #[test]
    fn test_advance_month() {
        let mut state = ProjectionState::from_inputs(&ProjectionInputs::default());
        state.advance_month(103.0, 5150.0);
        assert_eq!(state.month, 1);
        assert_eq!(state.customers, 103.0);
        assert_eq!(state.mrr, 5150.0);
    }
}
