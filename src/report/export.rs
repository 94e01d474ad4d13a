//! CSV and JSON export of projection rows

use crate::error::Result;
use crate::projection::{ProjectionDataPoint, ProjectionResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 7] = [
    "Month",
    "Starting Customers",
    "New Customers",
    "Lost Customers",
    "Ending Customers",
    "MRR",
    "ARR",
];

/// Adding zero turns `-0.0` into `0.0` so a rounded-away decline prints as `0`
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

/// Write one record per month; MRR and ARR carry two decimals
pub fn write_csv<W: Write>(writer: W, rows: &[ProjectionDataPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for row in rows {
        csv_writer.write_record([
            row.month.to_string(),
            unsigned_zero(row.starting_customers).to_string(),
            unsigned_zero(row.new_customers).to_string(),
            unsigned_zero(row.lost_customers).to_string(),
            unsigned_zero(row.ending_customers).to_string(),
            format!("{:.2}", unsigned_zero(row.mrr)),
            format!("{:.2}", unsigned_zero(row.arr)),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// CSV export as a string
pub fn to_csv_string(rows: &[ProjectionDataPoint]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the CSV export to a file
pub fn write_csv_file<P: AsRef<Path>>(path: P, rows: &[ProjectionDataPoint]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, rows)
}

/// Pretty JSON of the full result (inputs plus rows)
pub fn to_json(result: &ProjectionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInputs;
    use crate::projection::{project, ProjectionEngine};

    #[test]
    fn test_csv_layout() {
        let rows = project(&ProjectionInputs::default().with_months(2));
        let csv = to_csv_string(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Month,Starting Customers,New Customers,Lost Customers,Ending Customers,MRR,ARR"
        );
        assert_eq!(lines[1], "1,100,5,2,103,5150.00,61800.00");
        assert_eq!(lines[2], "2,103,5,2,106,5300.00,63600.00");
    }

    #[test]
    fn test_csv_rounded_away_decline_prints_zero() {
        // 10 * -1% rounds to -0.0 new customers
        let rows = project(&ProjectionInputs::new(10.0, 500.0, 50.0, -1.0, 0.0, 1));
        assert!(rows[0].new_customers.is_sign_negative());

        let csv = to_csv_string(&rows).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1,10,0,0,10,500.00,6000.00"));
        assert!(!csv.contains("-0"));
    }

    #[test]
    fn test_csv_empty_projection_has_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_csv_file_written() {
        let path = std::env::temp_dir().join("saas_projector_export_test.csv");
        let rows = project(&ProjectionInputs::default().with_months(12));

        write_csv_file(&path, &rows).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(written.lines().count(), 13);
    }

    #[test]
    fn test_json_contains_inputs_and_rows() {
        let result = ProjectionEngine::new(ProjectionInputs::default().with_months(1)).run();
        let json: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();

        assert_eq!(json["inputs"]["initialCustomers"], 100.0);
        assert_eq!(json["dataPoints"][0]["mrr"], 5150.0);
    }
}
