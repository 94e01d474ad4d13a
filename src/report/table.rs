//! Fixed-width month-by-month breakdown for terminals

use super::format::{format_currency, format_currency_compact, format_number};
use crate::projection::{ProjectionDataPoint, ProjectionSummary};
use std::fmt::Write;

const HEADER: [&str; 7] = [
    "Month",
    "Starting Customers",
    "New",
    "Lost",
    "Ending Customers",
    "MRR",
    "ARR",
];

/// Render every row; `+`/`-` mark new and lost customers
pub fn render_table(rows: &[ProjectionDataPoint]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.month.to_string(),
                format_number(r.starting_customers),
                format!("+{}", format_number(r.new_customers)),
                format!("-{}", format_number(r.lost_customers)),
                format_number(r.ending_customers),
                format_currency(r.mrr),
                format_currency(r.arr),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = HEADER.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADER.map(String::from), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", line.join("  "));
}

/// Four summary cards as label/value lines
pub fn render_summary(summary: &ProjectionSummary) -> String {
    format!(
        "Final MRR:       {}\nFinal ARR:       {}\nFinal Customers: {}\nTotal Revenue:   {}\n",
        format_currency_compact(summary.final_mrr),
        format_currency_compact(summary.final_arr),
        format_number(summary.final_customers),
        format_currency_compact(summary.total_revenue),
    )
}
