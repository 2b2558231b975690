use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Point;

/// Record set bound to one series through `datasetId`.
///
/// Sources the engine accepts but [`Point`] cannot hold (null values, array
/// rows) are kept raw in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<Point>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Placement value accepted by the engine: pixels, `"10%"` or a keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionValue {
    Pixels(f64),
    Text(String),
}

impl PositionValue {
    #[must_use]
    pub fn percent(value: f64) -> Self {
        Self::Text(crate::core::format_number_to_percent(value))
    }

    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Pixels(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orient: Option<Orient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<PositionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<PositionValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<PositionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<PositionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<PositionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<PositionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contain_label: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Item,
    #[default]
    Axis,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TooltipTrigger>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Custom toolbox button. Click handling lives in the host, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolboxFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolboxOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(
        default,
        deserialize_with = "super::lenient::object_map",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub feature: IndexMap<String, ToolboxFeature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataZoomType {
    Slider,
    Inside,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataZoomOption {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub zoom_type: Option<DataZoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
