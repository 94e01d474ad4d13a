//! SaaS Projector CLI
//!
//! Command-line interface for running a single revenue projection

use anyhow::{Context, Result};
use clap::Parser;
use saas_projector::{
    inputs::{
        DEFAULT_ARPU, DEFAULT_CHURN_RATE, DEFAULT_INITIAL_CUSTOMERS, DEFAULT_INITIAL_MRR,
        DEFAULT_MONTHLY_GROWTH_RATE, DEFAULT_PROJECTION_MONTHS,
    },
    report, InputBounds, ProjectionEngine, ProjectionInputs,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "saas_projector")]
#[command(about = "Project customers and recurring revenue month by month", long_about = None)]
struct Cli {
    /// Customer count at month 0
    #[arg(long, default_value_t = DEFAULT_INITIAL_CUSTOMERS)]
    initial_customers: f64,

    /// Monthly recurring revenue at month 0
    #[arg(long, default_value_t = DEFAULT_INITIAL_MRR)]
    initial_mrr: f64,

    /// Average revenue per user per month
    #[arg(long, default_value_t = DEFAULT_ARPU, allow_negative_numbers = true)]
    arpu: f64,

    /// Monthly growth rate in percent
    #[arg(long, default_value_t = DEFAULT_MONTHLY_GROWTH_RATE, allow_negative_numbers = true)]
    growth: f64,

    /// Monthly churn rate in percent
    #[arg(long, default_value_t = DEFAULT_CHURN_RATE, allow_negative_numbers = true)]
    churn: f64,

    /// Number of months to project
    #[arg(long, default_value_t = DEFAULT_PROJECTION_MONTHS, allow_negative_numbers = true)]
    months: i32,

    /// Reject inputs outside the slider ranges
    #[arg(long, conflicts_with = "clamp")]
    strict: bool,

    /// Pull inputs into the slider ranges instead of rejecting them
    #[arg(long)]
    clamp: bool,

    /// Write the CSV export (defaults to saas-projection-<date>.csv)
    #[arg(long, num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,

    /// Print the full projection as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn inputs(&self) -> ProjectionInputs {
        ProjectionInputs::new(
            self.initial_customers,
            self.initial_mrr,
            self.arpu,
            self.growth,
            self.churn,
            self.months,
        )
    }
}

fn default_csv_path() -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("saas-projection-{}.csv", today))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let bounds = InputBounds::default();

    let mut inputs = cli.inputs();
    if cli.strict {
        bounds.validate(&inputs).context("inputs rejected by --strict")?;
    } else if cli.clamp {
        inputs = bounds.clamp(&inputs);
    }

    log::info!("running projection with {:?}", inputs);
    let result = ProjectionEngine::new(inputs).run();

    if cli.json {
        println!("{}", report::to_json(&result)?);
    } else {
        println!("SaaS Revenue Projector");
        println!("======================\n");
        print!("{}", report::render_summary(&result.summary()));
        println!();
        println!("Month-by-Month Breakdown ({} months):", result.len());
        print!("{}", report::render_table(&result.data_points));
    }

    if let Some(path) = cli.csv {
        let path = path.unwrap_or_else(default_csv_path);
        report::write_csv_file(&path, &result.data_points)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("csv export written to {}", path.display());
        if !cli.json {
            println!("\nFull results written to: {}", path.display());
        }
    }

    Ok(())
}
