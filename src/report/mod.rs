//! Presentation helpers consuming projection output

pub mod chart;
pub mod export;
pub mod format;
pub mod table;

pub use chart::{ChartAxis, ChartPoint, ChartSeries};
pub use export::{to_csv_string, to_json, write_csv, write_csv_file, CSV_HEADER};
pub use table::{render_summary, render_table};
