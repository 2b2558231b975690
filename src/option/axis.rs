use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ComponentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    #[default]
    Value,
    Log,
    Time,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    #[default]
    Left,
    Right,
}

/// Axis extent: a fixed number or an engine keyword such as `"dataMin"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisBound {
    Number(f64),
    Keyword(String),
}

impl AxisBound {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Keyword(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XAxisOption {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One value axis; the crate derives one per distinct series unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOption {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<AxisBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<AxisBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComponentId for YAxisOption {
    fn component_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
