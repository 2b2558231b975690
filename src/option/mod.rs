//! Typed model of the declarative option document consumed by the charting
//! engine.
//!
//! Every component accepts either a single object or an array on input and is
//! always written back as an array, matching what the engine reports from
//! `getOption`. Fields this crate does not model, and modeled fields holding
//! shapes it does not model, are kept in `extra` maps so an imported document
//! is re-exported unchanged.

mod axis;
mod component;
mod lenient;
mod merge;
pub mod presets;
mod series;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

pub use axis::{AxisBound, AxisPosition, AxisType, XAxisOption, YAxisOption};
pub use component::{
    DataZoomOption, DataZoomType, DatasetOption, GridOption, LegendOption, Orient, PositionValue,
    ToolboxFeature, ToolboxOption, TooltipOption, TooltipTrigger,
};
pub use lenient::{ComponentId, ExtraFields};
pub use merge::{SetOptionMode, merge_chart_option, upsert_components};
pub use series::{
    Encode, ItemStyle, LineStyle, LineType, SeriesOption, SeriesType, SymbolKind,
};

/// Top-level option component names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKey {
    XAxis,
    YAxis,
    Series,
    Dataset,
    Legend,
    Grid,
    Tooltip,
    Toolbox,
    DataZoom,
}

impl ComponentKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XAxis => "xAxis",
            Self::YAxis => "yAxis",
            Self::Series => "series",
            Self::Dataset => "dataset",
            Self::Legend => "legend",
            Self::Grid => "grid",
            Self::Tooltip => "tooltip",
            Self::Toolbox => "toolbox",
            Self::DataZoom => "dataZoom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub x_axis: Vec<XAxisOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<YAxisOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub dataset: Vec<DatasetOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub legend: Vec<LegendOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub grid: Vec<GridOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<TooltipOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub toolbox: Vec<ToolboxOption>,
    #[serde(default, deserialize_with = "lenient::components", skip_serializing_if = "Vec::is_empty")]
    pub data_zoom: Vec<DataZoomOption>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOption {
    /// The first legend component, which is the one the settings form edits.
    #[must_use]
    pub fn primary_legend(&self) -> Option<&LegendOption> {
        self.legend.first()
    }

    /// Copy of the document without runtime data (dataset sources).
    #[must_use]
    pub fn without_dataset(&self) -> Self {
        Self {
            dataset: Vec::new(),
            ..self.clone()
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart option: {e}"))
        })
    }

    /// Parses an engine document. Only malformed JSON or a non-object root
    /// is an error; every other shape is kept.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse json: {e}")))?;
        let Value::Object(object) = value else {
            return Err(ChartError::InvalidConfig(
                "chart option json must be an object".to_owned(),
            ));
        };
        lenient::from_object(object)
            .map_err(|e| ChartError::InvalidConfig(format!("invalid chart option: {e}")))
    }
}
