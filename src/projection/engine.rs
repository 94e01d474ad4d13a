//! Core projection engine for monthly customer and revenue roll-forward

use crate::inputs::ProjectionInputs;
use super::state::ProjectionState;
use super::datapoints::{ProjectionDataPoint, ProjectionResult, MONTHS_PER_YEAR};

/// Project `inputs` month by month
///
/// Shorthand for `ProjectionEngine::new(*inputs).run().data_points`.
pub fn project(inputs: &ProjectionInputs) -> Vec<ProjectionDataPoint> {
    ProjectionEngine::new(*inputs).run().data_points
}

/// Main projection engine
///
/// Each month the running customer count gains `round(customers * growth)`
/// and loses `round(customers * churn)`, rounding half away from zero on each
/// component separately. MRR is a running balance: it starts at
/// `initial_mrr` and moves by `net customer change * arpu`, so it is not the
/// same as `ending_customers * arpu` unless the starting MRR already was.
///
/// Nothing is clamped. Negative rates, negative ARPU and customer counts that
/// fall below zero are carried through literally.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    inputs: ProjectionInputs,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given inputs
    pub fn new(inputs: ProjectionInputs) -> Self {
        Self { inputs }
    }

    /// Run the full projection
    pub fn run(&self) -> ProjectionResult {
        let mut result = ProjectionResult::new(self.inputs);

        if self.inputs.projection_months <= 0 {
            log::debug!(
                "projection_months = {}, returning empty projection",
                self.inputs.projection_months
            );
            return result;
        }

        log::debug!(
            "projecting {} months from {} customers, mrr {:.2}",
            self.inputs.projection_months,
            self.inputs.initial_customers,
            self.inputs.initial_mrr
        );

        let mut state = ProjectionState::from_inputs(&self.inputs);

        for _month in 1..=self.inputs.projection_months {
            let row = self.calculate_month(&state);
            state.advance_month(row.ending_customers, row.mrr);
            result.add_row(row);
        }

        result
    }

    /// Calculate one month from the prior month's closing balances
    fn calculate_month(&self, state: &ProjectionState) -> ProjectionDataPoint {
        let starting_customers = state.customers;

        let new_customers = (starting_customers * self.inputs.growth_fraction()).round();
        let lost_customers = (starting_customers * self.inputs.churn_fraction()).round();
        let ending_customers = starting_customers + new_customers - lost_customers;

        let customer_change = ending_customers - starting_customers;
        let mrr = state.mrr + customer_change * self.inputs.arpu;

        ProjectionDataPoint {
            month: state.month + 1,
            starting_customers,
            new_customers,
            lost_customers,
            ending_customers,
            mrr,
            arr: mrr * MONTHS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(months: i32) -> ProjectionInputs {
        ProjectionInputs::new(100.0, 5000.0, 50.0, 5.0, 2.0, months)
    }

    #[test]
    fn test_first_month() {
        let rows = project(&inputs(1));
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.month, 1);
        assert_eq!(row.starting_customers, 100.0);
        assert_eq!(row.new_customers, 5.0);
        assert_eq!(row.lost_customers, 2.0);
        assert_eq!(row.ending_customers, 103.0);
        assert_eq!(row.mrr, 5150.0);
        assert_eq!(row.arr, 61800.0);
    }

    #[test]
    fn test_second_month() {
        let rows = project(&inputs(2));
        let row = &rows[1];

        assert_eq!(row.month, 2);
        assert_eq!(row.starting_customers, 103.0);
        assert_eq!(row.new_customers, 5.0);
        assert_eq!(row.lost_customers, 2.0);
        assert_eq!(row.ending_customers, 106.0);
        assert_eq!(row.mrr, 5300.0);
        assert_eq!(row.arr, 63600.0);
    }

    #[test]
    fn test_default_horizon_pinned() {
        // Per-component rounding drifts away from a compounded 3% net rate
        let result = ProjectionEngine::new(inputs(36)).run();
        assert_eq!(result.len(), 36);

        let month_9 = &result.data_points[8];
        assert_eq!(month_9.new_customers, 6.0);
        assert_eq!(month_9.lost_customers, 3.0);
        assert_eq!(month_9.ending_customers, 131.0);

        let last = result.final_row().unwrap();
        assert_eq!(last.starting_customers, 284.0);
        assert_eq!(last.new_customers, 14.0);
        assert_eq!(last.lost_customers, 6.0);
        assert_eq!(last.ending_customers, 292.0);
        assert_eq!(last.mrr, 14600.0);
        assert_eq!(last.arr, 175200.0);
        assert_eq!(result.total_revenue(), 327750.0);
    }

    #[test]
    fn test_deterministic() {
        let a = project(&inputs(36));
        let b = project(&inputs(36));
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_matches_months() {
        for months in [-5, 0, 1, 12, 60] {
            assert_eq!(project(&inputs(months)).len(), months.max(0) as usize);
        }
    }

    #[test]
    fn test_zero_months_empty() {
        assert!(project(&inputs(0)).is_empty());
        assert!(ProjectionEngine::new(inputs(-1)).run().is_empty());
    }

    #[test]
    fn test_rows_chain_and_balance() {
        let rows = project(&ProjectionInputs::new(437.0, 12_345.0, 37.5, 7.5, 3.3, 60));

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
            assert_eq!(
                row.ending_customers,
                row.starting_customers + row.new_customers - row.lost_customers
            );
            assert_eq!(row.arr, row.mrr * 12.0);
        }
        assert_eq!(rows[0].starting_customers, 437.0);
        for pair in rows.windows(2) {
            assert_eq!(pair[1].starting_customers, pair[0].ending_customers);
        }
    }

    #[test]
    fn test_zero_growth_zero_churn_is_flat() {
        let rows = project(&ProjectionInputs::new(250.0, 9_000.0, 40.0, 0.0, 0.0, 24));

        for row in &rows {
            assert_eq!(row.starting_customers, 250.0);
            assert_eq!(row.ending_customers, row.starting_customers);
            assert_eq!(row.mrr, 9_000.0);
        }
    }

    #[test]
    fn test_churn_above_growth_declines_every_month() {
        let rows = project(&ProjectionInputs::new(100.0, 5000.0, 50.0, 1.0, 10.0, 12));

        for row in &rows {
            assert!(
                row.ending_customers < row.starting_customers,
                "month {} did not decline",
                row.month
            );
        }

        let endings: Vec<f64> = rows.iter().map(|r| r.ending_customers).collect();
        assert_eq!(
            endings,
            vec![91.0, 83.0, 76.0, 69.0, 63.0, 58.0, 53.0, 49.0, 44.0, 40.0, 36.0, 32.0]
        );
        assert_eq!(rows[11].mrr, 1600.0);
    }

    #[test]
    fn test_no_floor_at_zero() {
        // 150% churn removes more customers than exist
        let rows = project(&ProjectionInputs::new(100.0, 5000.0, 50.0, 0.0, 150.0, 2));

        assert_eq!(rows[0].lost_customers, 150.0);
        assert_eq!(rows[0].ending_customers, -50.0);
        assert_eq!(rows[0].mrr, -2500.0);
        assert_eq!(rows[1].starting_customers, -50.0);
        assert_eq!(rows[1].lost_customers, -75.0);
        assert_eq!(rows[1].ending_customers, 25.0);
    }

    #[test]
    fn test_zero_customers() {
        let rows = project(&ProjectionInputs::new(0.0, 0.0, 50.0, 5.0, 2.0, 3));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.ending_customers == 0.0 && r.mrr == 0.0));
    }

    #[test]
    fn test_mrr_anchored_to_initial_mrr() {
        // Starting MRR below customers * ARPU stays offset by the same amount
        let rows = project(&ProjectionInputs::new(100.0, 2000.0, 50.0, 5.0, 2.0, 3));
        let mrrs: Vec<f64> = rows.iter().map(|r| r.mrr).collect();
        assert_eq!(mrrs, vec![2150.0, 2300.0, 2450.0]);
        assert_eq!(rows[2].mrr - rows[2].ending_customers * 50.0, 2000.0 - 100.0 * 50.0);
    }

    #[test]
    fn test_negative_arpu_passed_through() {
        let rows = project(&ProjectionInputs::new(100.0, 5000.0, -50.0, 5.0, 2.0, 1));
        assert_eq!(rows[0].mrr, 4850.0);
    }

    #[test]
    fn test_fractional_customers_keep_residual() {
        let rows = project(&ProjectionInputs::new(100.5, 5000.0, 10.0, 10.0, 0.0, 1));
        let row = &rows[0];

        assert_eq!(row.new_customers, 10.0);
        assert_relative_eq!(row.ending_customers, 110.5);
        assert_relative_eq!(row.mrr, 5100.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 10 * 5% = 0.5 rounds up; -10 * 5% = -0.5 rounds down
        let up = project(&ProjectionInputs::new(10.0, 0.0, 1.0, 5.0, 0.0, 1));
        assert_eq!(up[0].new_customers, 1.0);

        let down = project(&ProjectionInputs::new(-10.0, 0.0, 1.0, 5.0, 0.0, 1));
        assert_eq!(down[0].new_customers, -1.0);
    }
}
