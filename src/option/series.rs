use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{POINT_DATE_FIELD, POINT_VALUE_FIELD};

use super::{ComponentId, ExtraFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    #[default]
    Line,
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    #[default]
    EmptyCircle,
    Circle,
    Rect,
    RoundRect,
    Triangle,
    Diamond,
    Pin,
    Arrow,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<LineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineStyle {
    #[must_use]
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemStyle {
    #[must_use]
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

/// Dimension binding from dataset records to the x/y axes.
///
/// Other engine dimensions (`tooltip`, `seriesName`, ...) and array bindings
/// stay in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Encode {
    /// Binds `x` to the point date and `y` to the point value.
    #[must_use]
    pub fn point_fields() -> Self {
        Self {
            x: Some(POINT_DATE_FIELD.to_owned()),
            y: Some(POINT_VALUE_FIELD.to_owned()),
            extra: Map::new(),
        }
    }
}

/// Display option for one rendered series.
///
/// Unknown engine fields survive a round trip through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::nested",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_style: Option<LineStyle>,
    #[serde(
        default,
        deserialize_with = "super::lenient::nested",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(
        default,
        deserialize_with = "super::lenient::nested",
        skip_serializing_if = "Option::is_none"
    )]
    pub encode: Option<Encode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeriesOption {
    /// Line color, falling back to the item color.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.line_style
            .as_ref()
            .and_then(|style| style.color.as_deref())
            .or_else(|| self.item_style.as_ref().and_then(|s| s.color.as_deref()))
    }

    /// Sets both line and item color, keeping the rest of either style.
    pub fn set_color(&mut self, color: &str) {
        let line_style = self.line_style.get_or_insert_with(LineStyle::default);
        line_style.color = Some(color.to_owned());
        line_style.drop_shadowed_extra();
        let item_style = self.item_style.get_or_insert_with(ItemStyle::default);
        item_style.color = Some(color.to_owned());
        item_style.drop_shadowed_extra();
        self.drop_shadowed_extra();
    }
}

impl ComponentId for SeriesOption {
    fn component_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
