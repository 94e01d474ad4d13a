//! Load named input scenarios from CSV or JSON

use super::ProjectionInputs;
use crate::error::{ProjectorError, Result};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// A set of inputs with a label, used for batch runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    #[serde(flatten)]
    pub inputs: ProjectionInputs,
}

impl NamedScenario {
    pub fn new(name: impl Into<String>, inputs: ProjectionInputs) -> Self {
        Self { name: name.into(), inputs }
    }
}

/// Raw CSV row; every numeric column is optional and falls back to the default
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    name: String,
    initial_customers: Option<f64>,
    initial_mrr: Option<f64>,
    arpu: Option<f64>,
    monthly_growth_rate: Option<f64>,
    churn_rate: Option<f64>,
    projection_months: Option<i32>,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedScenario> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProjectorError::invalid_scenario("scenario name is empty"));
        }

        let defaults = ProjectionInputs::default();
        let inputs = ProjectionInputs {
            initial_customers: self.initial_customers.unwrap_or(defaults.initial_customers),
            initial_mrr: self.initial_mrr.unwrap_or(defaults.initial_mrr),
            arpu: self.arpu.unwrap_or(defaults.arpu),
            monthly_growth_rate: self.monthly_growth_rate.unwrap_or(defaults.monthly_growth_rate),
            churn_rate: self.churn_rate.unwrap_or(defaults.churn_rate),
            projection_months: self.projection_months.unwrap_or(defaults.projection_months),
        };

        Ok(NamedScenario::new(name, inputs))
    }
}

/// Load scenarios from a CSV file with a `name` column and the camelCase input columns
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

/// Load scenarios from a JSON array of `{ "name": .., <inputs> }` objects
pub fn load_scenarios_json<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = File::open(path)?;
    let scenarios: Vec<NamedScenario> = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(scenarios)
}
