//! Series for a dual-axis growth chart: MRR on the left, customers on the right

use super::format::{format_axis_currency, format_axis_number};
use crate::projection::ProjectionDataPoint;
use serde::Serialize;

/// A single `(month, value)` point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub month: u32,
    pub value: f64,
}

/// Value range of one axis with its tick labels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAxis {
    pub min: f64,
    pub max: f64,
    pub min_label: String,
    pub max_label: String,
}

impl ChartAxis {
    fn new((min, max): (f64, f64), label: fn(f64) -> String) -> Self {
        Self { min, max, min_label: label(min), max_label: label(max) }
    }
}

/// MRR and ending customers plotted against month
///
/// Axes are `None` for an empty projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub mrr: Vec<ChartPoint>,
    pub customers: Vec<ChartPoint>,
    pub mrr_axis: Option<ChartAxis>,
    pub customer_axis: Option<ChartAxis>,
}

impl ChartSeries {
    pub fn from_rows(rows: &[ProjectionDataPoint]) -> Self {
        let mrr: Vec<ChartPoint> =
            rows.iter().map(|r| ChartPoint { month: r.month, value: r.mrr }).collect();
        let customers: Vec<ChartPoint> = rows
            .iter()
            .map(|r| ChartPoint { month: r.month, value: r.ending_customers })
            .collect();

        Self {
            mrr_axis: extent(&mrr).map(|e| ChartAxis::new(e, format_axis_currency)),
            customer_axis: extent(&customers).map(|e| ChartAxis::new(e, format_axis_number)),
            mrr,
            customers,
        }
    }
}

fn extent(points: &[ChartPoint]) -> Option<(f64, f64)> {
    points.iter().map(|p| p.value).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
