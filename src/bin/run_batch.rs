//! Run projections for every scenario in a CSV file
//!
//! Usage: run_batch <scenarios.csv> [output.csv]
//!
//! Writes one summary row per scenario, in input order.

use anyhow::{Context, Result};
use saas_projector::{inputs::load_scenarios, ScenarioRunner};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input_path = args.next().context("usage: run_batch <scenarios.csv> [output.csv]")?;
    let output_path = args.next().unwrap_or_else(|| "batch_projection_output.csv".to_string());

    let start = Instant::now();
    let scenarios = load_scenarios(&input_path)
        .with_context(|| format!("loading scenarios from {}", input_path))?;
    log::info!("loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    log::info!("projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path))?;
    writer.write_record([
        "Scenario",
        "Months",
        "FinalCustomers",
        "FinalMRR",
        "FinalARR",
        "TotalRevenue",
    ])?;

    for (name, result) in &results {
        let summary = result.summary();
        writer.write_record([
            name.clone(),
            summary.total_months.to_string(),
            summary.final_customers.to_string(),
            format!("{:.2}", summary.final_mrr),
            format!("{:.2}", summary.final_arr),
            format!("{:.2}", summary.total_revenue),
        ])?;
    }
    writer.flush()?;

    println!("{} scenarios written to {}", results.len(), output_path);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
