//! Projection output structures

use crate::inputs::ProjectionInputs;
use serde::{Deserialize, Serialize};

/// Months per year, used to annualize MRR
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// One projected month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionDataPoint {
    /// 1-based month index
    pub month: u32,

    /// Customers at the start of the month (prior month's ending count)
    pub starting_customers: f64,

    /// Customers added this month
    pub new_customers: f64,

    /// Customers churned this month
    pub lost_customers: f64,

    /// Customers at month end
    pub ending_customers: f64,

    /// Recurring revenue at month end
    pub mrr: f64,

    /// Annualized recurring revenue at month end
    pub arr: f64,
}

impl ProjectionDataPoint {
    /// Net customers gained (negative when churn wins)
    pub fn customer_change(&self) -> f64 {
        self.ending_customers - self.starting_customers
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Inputs the rows were derived from
    pub inputs: ProjectionInputs,

    /// Monthly rows, ascending by month
    pub data_points: Vec<ProjectionDataPoint>,
}

impl ProjectionResult {
    pub fn new(inputs: ProjectionInputs) -> Self {
        Self {
            inputs,
            data_points: Vec::with_capacity(inputs.row_count()),
        }
    }

    /// Add a monthly row
    pub fn add_row(&mut self, row: ProjectionDataPoint) {
        self.data_points.push(row);
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    /// Last projected month, if any
    pub fn final_row(&self) -> Option<&ProjectionDataPoint> {
        self.data_points.last()
    }

    /// Sum of every month's MRR
    pub fn total_revenue(&self) -> f64 {
        self.data_points.iter().map(|r| r.mrr).sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let final_row = self.final_row();

        ProjectionSummary {
            total_months: self.data_points.len() as u32,
            final_mrr: final_row.map(|r| r.mrr).unwrap_or(0.0),
            final_arr: final_row.map(|r| r.arr).unwrap_or(0.0),
            final_customers: final_row.map(|r| r.ending_customers).unwrap_or(0.0),
            total_revenue: self.total_revenue(),
        }
    }
}

/// Headline numbers shown on the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_mrr: f64,
    pub final_arr: f64,
    pub final_customers: f64,
    pub total_revenue: f64,
}
