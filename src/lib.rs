//! pkgtrend
//!
//! Reshapes package download history (package → version → week → count) into
//! the labels and datasets a line-chart renderer consumes, and picks a color for
//! every plotted line. Pairs with the `pkgtrend` CLI.
//!
//! ### Features
//! - Sorted, deduplicated x-axis labels across all series
//! - One series per (package, version), labelled `"<package> @ <version>.x"`
//! - Stable palette colors for a single package; per-package hues with a random
//!   shade jitter when several packages share a chart
//! - Typed renderer options and a JSON chart document
//!
//! ### Example
//! ```
//! use pkgtrend::{ChartConfig, HistoricalDataset, Palette, RngDraws, chart_data};
//!
//! let dataset: HistoricalDataset = serde_json::from_str(
//!     r#"{ "pkg-a": { "1": { "2023-W01": 5, "2023-W02": 7 } } }"#,
//! )?;
//! let chart = chart_data(&dataset, &Palette::default(), RngDraws::thread());
//! assert_eq!(chart.labels, ["2023-W01", "2023-W02"]);
//! assert_eq!(chart.datasets[0].label, "pkg-a @ 1.x");
//! assert_eq!(chart.datasets[0].color, Palette::default().pick(0));
//!
//! let doc = serde_json::to_value(chart.document(&ChartConfig::default()))?;
//! assert_eq!(doc["data"]["datasets"][0]["data"][1]["count"], 7);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assign;
pub mod chart;
pub mod color;
pub mod labels;
pub mod models;
pub mod series;
pub mod stats;
pub mod storage;

pub use assign::{ColorAssigner, ColorMode, DrawSource, FixedDraws, RngDraws};
pub use chart::{ChartConfig, ChartData, ChartDocument, chart_data};
pub use color::{Color, ColorError, Palette};
pub use labels::collect_labels;
pub use models::{HistoricalDataset, Point, Series, TimeSeries, VersionMap};
pub use series::build_series;
