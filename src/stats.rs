use crate::models::Series;
use serde::{Deserialize, Serialize};

/// Summary statistics for one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub label: String,
    pub count: usize,
    pub total: u64,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-series statistics, in series order.
pub fn series_summary(series: &[Series]) -> Vec<Summary> {
    series.iter().map(summarize).collect()
}

fn summarize(series: &Series) -> Summary {
    let mut vals: Vec<u64> = series.points.iter().map(|p| p.y).collect();
    vals.sort_unstable();
    let count = vals.len();
    let total = vals.iter().fold(0u64, |acc, v| acc.saturating_add(*v));
    let mean = if count > 0 {
        Some(vals.iter().map(|v| *v as f64).sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2] as f64)
    } else {
        Some((vals[count / 2 - 1] as f64 + vals[count / 2] as f64) / 2.0)
    };
    Summary {
        label: series.label.clone(),
        count,
        total,
        min: vals.first().copied(),
        max: vals.last().copied(),
        mean,
        median,
    }
}
