//! Slider limits for each input
//!
//! The engine accepts any numbers. These bounds belong to whoever collects
//! the inputs (CLI, HTTP handler) and mirror the ranges the sliders enforce.

use super::ProjectionInputs;
use crate::error::{ProjectorError, Result};

/// Tolerance used when checking that a value sits on a step
const STEP_TOLERANCE: f64 = 1e-9;

/// Identifies one of the six input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    InitialCustomers,
    InitialMrr,
    Arpu,
    MonthlyGrowthRate,
    ChurnRate,
    ProjectionMonths,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::InitialCustomers,
        InputField::InitialMrr,
        InputField::Arpu,
        InputField::MonthlyGrowthRate,
        InputField::ChurnRate,
        InputField::ProjectionMonths,
    ];

    /// Serialized field name
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::InitialCustomers => "initialCustomers",
            InputField::InitialMrr => "initialMrr",
            InputField::Arpu => "arpu",
            InputField::MonthlyGrowthRate => "monthlyGrowthRate",
            InputField::ChurnRate => "churnRate",
            InputField::ProjectionMonths => "projectionMonths",
        }
    }

    fn get(&self, inputs: &ProjectionInputs) -> f64 {
        match self {
            InputField::InitialCustomers => inputs.initial_customers,
            InputField::InitialMrr => inputs.initial_mrr,
            InputField::Arpu => inputs.arpu,
            InputField::MonthlyGrowthRate => inputs.monthly_growth_rate,
            InputField::ChurnRate => inputs.churn_rate,
            InputField::ProjectionMonths => inputs.projection_months as f64,
        }
    }

    fn set(&self, inputs: &mut ProjectionInputs, value: f64) {
        match self {
            InputField::InitialCustomers => inputs.initial_customers = value,
            InputField::InitialMrr => inputs.initial_mrr = value,
            InputField::Arpu => inputs.arpu = value,
            InputField::MonthlyGrowthRate => inputs.monthly_growth_rate = value,
            InputField::ChurnRate => inputs.churn_rate = value,
            InputField::ProjectionMonths => inputs.projection_months = value.round() as i32,
        }
    }
}

/// Range and step for a single slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether `value` is `min + k * step` for some whole `k`
    pub fn on_step(&self, value: f64) -> bool {
        if self.step <= 0.0 {
            return true;
        }
        let k = (value - self.min) / self.step;
        (k - k.round()).abs() < STEP_TOLERANCE * k.abs().max(1.0)
    }

    /// Clamp into range, then snap to the nearest step
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.max(self.min).min(self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let k = ((clamped - self.min) / self.step).round();
        // Strip float noise such as 2.0000000000000004 from a 0.1 step
        let snapped = ((self.min + k * self.step) * 1e6).round() / 1e6;
        snapped.min(self.max)
    }
}

/// Slider limits for all six inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub initial_customers: SliderRange,
    pub initial_mrr: SliderRange,
    pub arpu: SliderRange,
    pub monthly_growth_rate: SliderRange,
    pub churn_rate: SliderRange,
    pub projection_months: SliderRange,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            initial_customers: SliderRange::new(0.0, 1_000.0, 10.0),
            initial_mrr: SliderRange::new(0.0, 50_000.0, 500.0),
            arpu: SliderRange::new(5.0, 500.0, 5.0),
            monthly_growth_rate: SliderRange::new(0.0, 25.0, 0.5),
            churn_rate: SliderRange::new(0.0, 15.0, 0.1),
            projection_months: SliderRange::new(12.0, 60.0, 1.0),
        }
    }
}

impl InputBounds {
    pub fn range(&self, field: InputField) -> &SliderRange {
        match field {
            InputField::InitialCustomers => &self.initial_customers,
            InputField::InitialMrr => &self.initial_mrr,
            InputField::Arpu => &self.arpu,
            InputField::MonthlyGrowthRate => &self.monthly_growth_rate,
            InputField::ChurnRate => &self.churn_rate,
            InputField::ProjectionMonths => &self.projection_months,
        }
    }

    /// Reject the first field that falls outside its range or off its step
    pub fn validate(&self, inputs: &ProjectionInputs) -> Result<()> {
        for field in InputField::ALL {
            let range = self.range(field);
            let value = field.get(inputs);

            if !range.contains(value) {
                return Err(ProjectorError::OutOfRange {
                    field: field.as_str(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
            if !range.on_step(value) {
                return Err(ProjectorError::OffStep {
                    field: field.as_str(),
                    value,
                    step: range.step,
                });
            }
        }
        Ok(())
    }

    /// Pull every field into its slider range and onto a step
    pub fn clamp(&self, inputs: &ProjectionInputs) -> ProjectionInputs {
        let mut clamped = *inputs;
        for field in InputField::ALL {
            let value = field.get(inputs);
            let adjusted = self.range(field).clamp(value);
            if adjusted != value {
                log::warn!("{} clamped from {} to {}", field.as_str(), value, adjusted);
            }
            field.set(&mut clamped, adjusted);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let bounds = InputBounds::default();
        assert!(bounds.validate(&ProjectionInputs::default()).is_ok());
    }

    #[test]
    fn test_out_of_range_reports_field() {
        let bounds = InputBounds::default();
        let inputs = ProjectionInputs { churn_rate: 20.0, ..Default::default() };

        match bounds.validate(&inputs) {
            Err(ProjectorError::OutOfRange { field, value, max, .. }) => {
                assert_eq!(field, "churnRate");
                assert_eq!(value, 20.0);
                assert_eq!(max, 15.0);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_off_step_rejected() {
        let bounds = InputBounds::default();
        let inputs = ProjectionInputs { initial_customers: 105.0, ..Default::default() };
        assert!(matches!(
            bounds.validate(&inputs),
            Err(ProjectorError::OffStep { field: "initialCustomers", .. })
        ));
    }

    #[test]
    fn test_fractional_steps_accepted() {
        let bounds = InputBounds::default();
        let inputs = ProjectionInputs {
            monthly_growth_rate: 7.5,
            churn_rate: 2.3,
            ..Default::default()
        };
        assert!(bounds.validate(&inputs).is_ok());
    }

    #[test]
    fn test_clamp_pulls_into_range() {
        let bounds = InputBounds::default();
        let inputs = ProjectionInputs {
            initial_customers: 1_234.0,
            arpu: 1.0,
            churn_rate: 2.04,
            projection_months: 0,
            ..Default::default()
        };

        let clamped = bounds.clamp(&inputs);
        assert_eq!(clamped.initial_customers, 1_000.0);
        assert_eq!(clamped.arpu, 5.0);
        assert_eq!(clamped.churn_rate, 2.0);
        assert_eq!(clamped.projection_months, 12);
        assert!(bounds.validate(&clamped).is_ok());
    }

    #[test]
    fn test_clamp_nan_goes_to_min() {
        let range = SliderRange::new(0.0, 25.0, 0.5);
        assert_eq!(range.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(InputField::ChurnRate.as_str(), "churnRate");
        assert_eq!(InputField::ProjectionMonths.as_str(), "projectionMonths");
    }
}
