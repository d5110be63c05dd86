//! Chart assembly: labels, colored series, and the document a renderer consumes.
//!
//! Drawing is left to an external line-chart renderer. This module produces
//! what it needs:
//! - `labels`: sorted, deduplicated x-axis buckets
//! - `datasets`: one series per (package, version) with its color and points
//! - `options`: a typed [`ChartConfig`]

pub mod types;
pub mod util;

pub use types::{
    ChartConfig, DatasetStyle, DatasetsConfig, ElementsConfig, FontConfig, InteractionConfig,
    InteractionMode, LegendConfig, LegendLabels, LineElementConfig, NumberAnimation,
    ParsingConfig, PluginsConfig, ShowAnimations, ShowTransition, TooltipCallbacks,
    TooltipConfig, TooltipFooter, TooltipPosition, TransitionsConfig,
};
pub use util::{map_locale, tooltip_footer};

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

use crate::assign::{ColorAssigner, DrawSource};
use crate::color::{Color, Palette};
use crate::labels::collect_labels;
use crate::models::{HistoricalDataset, Point, Series};
use crate::series::build_series;

/// Labels and datasets for one render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

/// Build labels and colored series. `draws` feeds the multi-package jitter and
/// is not consulted for single-package or empty datasets.
pub fn chart_data<D: DrawSource>(
    dataset: &HistoricalDataset,
    palette: &Palette,
    draws: D,
) -> ChartData {
    let labels = collect_labels(dataset);
    let mut assigner = ColorAssigner::new(dataset, palette, draws);
    let datasets = build_series(dataset, &mut assigner);
    ChartData { labels, datasets }
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Full line-chart document for the renderer. Points are keyed by the
    /// field names in `config.parsing`.
    pub fn document<'a>(&'a self, config: &'a ChartConfig) -> ChartDocument<'a> {
        let style = &config.datasets.line;
        let datasets = self
            .datasets
            .iter()
            .map(|s| RenderDataset {
                label: &s.label,
                background_color: s.color,
                border_color: s.color,
                point_hover_border_width: style.point_hover_border_width,
                hover_border_width: style.hover_border_width,
                data: KeyedPoints {
                    points: &s.points,
                    x_key: &config.parsing.x_axis_key,
                    y_key: &config.parsing.y_axis_key,
                },
            })
            .collect();
        ChartDocument {
            kind: "line",
            data: DocumentData {
                labels: &self.labels,
                datasets,
            },
            options: config,
        }
    }
}

/// Serializable `{ type, data: { labels, datasets }, options }` document.
#[derive(Debug, Serialize)]
pub struct ChartDocument<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: DocumentData<'a>,
    options: &'a ChartConfig,
}

impl ChartDocument<'_> {
    pub fn dataset_count(&self) -> usize {
        self.data.datasets.len()
    }
}

#[derive(Debug, Serialize)]
struct DocumentData<'a> {
    labels: &'a [String],
    datasets: Vec<RenderDataset<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderDataset<'a> {
    label: &'a str,
    background_color: Color,
    border_color: Color,
    point_hover_border_width: u32,
    hover_border_width: u32,
    data: KeyedPoints<'a>,
}

/// Points written as `{ <x_key>: bucket, <y_key>: count }` objects.
#[derive(Debug)]
struct KeyedPoints<'a> {
    points: &'a [Point],
    x_key: &'a str,
    y_key: &'a str,
}

impl Serialize for KeyedPoints<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.points.len()))?;
        for p in self.points {
            seq.serialize_element(&KeyedPoint {
                point: p,
                x_key: self.x_key,
                y_key: self.y_key,
            })?;
        }
        seq.end()
    }
}

struct KeyedPoint<'a> {
    point: &'a Point,
    x_key: &'a str,
    y_key: &'a str,
}

impl Serialize for KeyedPoint<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.x_key, &self.point.x)?;
        map.serialize_entry(self.y_key, &self.point.y)?;
        map.end()
    }
}
