//! Display configuration handed to the renderer alongside labels and datasets.
//!
//! Every recognized option is a named field; defaults reproduce the download
//! history view (external tooltip with a total footer, dataset-wide hover,
//! thick lines). Deserialization accepts partial documents: missing fields
//! keep their defaults.

use serde::{Deserialize, Serialize};

use super::util::tooltip_footer;
use crate::models::{X_AXIS_KEY, Y_AXIS_KEY};

/// Which elements a hover or tooltip targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Point,
    Nearest,
    Index,
    /// The whole line under the cursor.
    Dataset,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPosition {
    Average,
    Nearest,
}

/// Footer line under the tooltip body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipFooter {
    None,
    /// `Total: <sum of hovered values>`, thousands-separated per `locale`.
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionConfig {
    pub intersect: bool,
    pub mode: InteractionMode,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            intersect: false,
            mode: InteractionMode::Dataset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineElementConfig {
    pub border_width: u32,
    pub hover_border_width: u32,
}

impl Default for LineElementConfig {
    fn default() -> Self {
        Self {
            border_width: 3,
            hover_border_width: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementsConfig {
    pub line: LineElementConfig,
}

/// Per-dataset styling copied onto every series in the chart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetStyle {
    pub point_hover_border_width: u32,
    pub hover_border_width: u32,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            point_hover_border_width: 5,
            hover_border_width: 7,
        }
    }
}

/// Dataset defaults per chart type (`options.datasets.line`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetsConfig {
    pub line: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 16 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipCallbacks {
    pub footer: TooltipFooter,
}

impl Default for TooltipCallbacks {
    fn default() -> Self {
        Self {
            footer: TooltipFooter::Total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipConfig {
    /// Built-in canvas tooltip. Off when `external` is set.
    pub enabled: bool,
    /// Tooltip state is forwarded to a host-provided handler.
    pub external: bool,
    pub mode: InteractionMode,
    pub intersect: bool,
    pub position: TooltipPosition,
    pub padding: u32,
    pub body_font: FontConfig,
    pub callbacks: TooltipCallbacks,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            external: true,
            mode: InteractionMode::Index,
            intersect: false,
            position: TooltipPosition::Nearest,
            padding: 8,
            body_font: FontConfig::default(),
            callbacks: TooltipCallbacks::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLabels {
    pub font: FontConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub tooltip: TooltipConfig,
    pub legend: LegendConfig,
}

/// Point field names the renderer reads x and y from. Points in the chart
/// document are keyed by these names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsingConfig {
    pub x_axis_key: String,
    pub y_axis_key: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            x_axis_key: X_AXIS_KEY.to_string(),
            y_axis_key: Y_AXIS_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberAnimation {
    pub from: f64,
}

impl Default for NumberAnimation {
    fn default() -> Self {
        Self { from: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowAnimations {
    pub y: NumberAnimation,
}

/// Entry animation: lines grow from `animations.y.from` when first shown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowTransition {
    pub animations: ShowAnimations,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionsConfig {
    pub show: ShowTransition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// Pixels lines may extend past the chart area.
    pub clip: u32,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionConfig,
    pub elements: ElementsConfig,
    pub datasets: DatasetsConfig,
    pub plugins: PluginsConfig,
    pub parsing: ParsingConfig,
    pub transitions: TransitionsConfig,
    /// Locale tag for number formatting (`en`, `de`, `fr`, ...).
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            clip: 8,
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: InteractionConfig::default(),
            elements: ElementsConfig::default(),
            datasets: DatasetsConfig::default(),
            plugins: PluginsConfig::default(),
            parsing: ParsingConfig::default(),
            transitions: TransitionsConfig::default(),
            locale: "en".to_string(),
        }
    }
}

impl ChartConfig {
    /// Tooltip footer text for the hovered values, if a footer is configured.
    pub fn footer_text(&self, hovered: &[u64]) -> Option<String> {
        match self.plugins.tooltip.callbacks.footer {
            TooltipFooter::None => None,
            TooltipFooter::Total => Some(tooltip_footer(hovered, &self.locale)),
        }
    }
}
