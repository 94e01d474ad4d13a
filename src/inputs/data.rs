//! Business inputs that drive a projection

use serde::{Deserialize, Serialize};

/// Default starting customer count
pub const DEFAULT_INITIAL_CUSTOMERS: f64 = 100.0;
/// Default starting MRR in dollars
pub const DEFAULT_INITIAL_MRR: f64 = 5_000.0;
/// Default average revenue per user per month
pub const DEFAULT_ARPU: f64 = 50.0;
/// Default monthly growth (percent)
pub const DEFAULT_MONTHLY_GROWTH_RATE: f64 = 5.0;
/// Default monthly churn (percent)
pub const DEFAULT_CHURN_RATE: f64 = 2.0;
/// Default horizon in months
pub const DEFAULT_PROJECTION_MONTHS: i32 = 36;

/// Starting parameters for a projection
///
/// Rates are percentages: `monthly_growth_rate = 5.0` means 5% of the current
/// customer base is added each month. Nothing here is range checked; see
/// [`super::InputBounds`] for the caller-side limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInputs {
    /// Customer count at month 0
    #[serde(default = "default_initial_customers")]
    pub initial_customers: f64,

    /// Recurring revenue at month 0, independent of `initial_customers * arpu`
    #[serde(default = "default_initial_mrr")]
    pub initial_mrr: f64,

    /// Average revenue per customer per month
    #[serde(default = "default_arpu")]
    pub arpu: f64,

    /// Share of the current base added each month, in percent
    #[serde(default = "default_monthly_growth_rate")]
    pub monthly_growth_rate: f64,

    /// Share of the current base lost each month, in percent
    #[serde(default = "default_churn_rate")]
    pub churn_rate: f64,

    /// Number of monthly rows to produce
    #[serde(default = "default_projection_months")]
    pub projection_months: i32,
}

fn default_initial_customers() -> f64 { DEFAULT_INITIAL_CUSTOMERS }
fn default_initial_mrr() -> f64 { DEFAULT_INITIAL_MRR }
fn default_arpu() -> f64 { DEFAULT_ARPU }
fn default_monthly_growth_rate() -> f64 { DEFAULT_MONTHLY_GROWTH_RATE }
fn default_churn_rate() -> f64 { DEFAULT_CHURN_RATE }
fn default_projection_months() -> i32 { DEFAULT_PROJECTION_MONTHS }

impl ProjectionInputs {
    pub fn new(
        initial_customers: f64,
        initial_mrr: f64,
        arpu: f64,
        monthly_growth_rate: f64,
        churn_rate: f64,
        projection_months: i32,
    ) -> Self {
        Self {
            initial_customers,
            initial_mrr,
            arpu,
            monthly_growth_rate,
            churn_rate,
            projection_months,
        }
    }

    /// Growth rate as a fraction
    pub fn growth_fraction(&self) -> f64 {
        self.monthly_growth_rate / 100.0
    }

    /// Churn rate as a fraction
    pub fn churn_fraction(&self) -> f64 {
        self.churn_rate / 100.0
    }

    /// Number of rows a projection of these inputs yields
    pub fn row_count(&self) -> usize {
        self.projection_months.max(0) as usize
    }

    /// Copy with a different horizon
    pub fn with_months(self, projection_months: i32) -> Self {
        Self { projection_months, ..self }
    }
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            initial_customers: DEFAULT_INITIAL_CUSTOMERS,
            initial_mrr: DEFAULT_INITIAL_MRR,
            arpu: DEFAULT_ARPU,
            monthly_growth_rate: DEFAULT_MONTHLY_GROWTH_RATE,
            churn_rate: DEFAULT_CHURN_RATE,
            projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}
