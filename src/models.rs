use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Field name the renderer reads a point's x value from.
pub const X_AXIS_KEY: &str = "week";
/// Field name the renderer reads a point's y value from.
pub const Y_AXIS_KEY: &str = "count";

/// Download counts keyed by time bucket (e.g. `"2023-W07"`), in insertion order.
pub type TimeSeries = IndexMap<String, u64>;

/// Time series keyed by version string, in insertion order.
pub type VersionMap = IndexMap<String, TimeSeries>;

/// Full input: package name -> version -> bucket -> count.
///
/// Deserializing from a JSON object keeps document order at every level, which
/// is the order series are emitted in.
pub type HistoricalDataset = IndexMap<String, VersionMap>;

/// One (bucket, count) observation of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "week")]
    pub x: String,
    #[serde(rename = "count")]
    pub y: u64,
}

impl Point {
    pub fn new(x: impl Into<String>, y: u64) -> Self {
        Self { x: x.into(), y }
    }
}

/// One plotted line: a (package, version) pair with its color and points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub points: Vec<Point>,
}

/// Number of (package, version) pairs, i.e. how many series a dataset yields.
pub fn series_count(dataset: &HistoricalDataset) -> usize {
    dataset.values().map(|versions| versions.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_order_is_preserved() {
        let ds: HistoricalDataset = serde_json::from_str(
            r#"{ "zeta": { "2": { "b": 1, "a": 2 }, "1": {} }, "alpha": { "0": {} } }"#,
        )
        .unwrap();
        let packages: Vec<&str> = ds.keys().map(String::as_str).collect();
        assert_eq!(packages, ["zeta", "alpha"]);
        let versions: Vec<&str> = ds["zeta"].keys().map(String::as_str).collect();
        assert_eq!(versions, ["2", "1"]);
        let weeks: Vec<&str> = ds["zeta"]["2"].keys().map(String::as_str).collect();
        assert_eq!(weeks, ["b", "a"]);
        assert_eq!(series_count(&ds), 3);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let res: Result<HistoricalDataset, _> =
            serde_json::from_str(r#"{ "p": { "1": { "2023-W01": -3 } } }"#);
        assert!(res.is_err());
    }

    #[test]
    fn point_uses_axis_keys() {
        let v = serde_json::to_value(Point::new("2023-W01", 5)).unwrap();
        assert_eq!(v[X_AXIS_KEY], "2023-W01");
        assert_eq!(v[Y_AXIS_KEY], 5);
    }
}
