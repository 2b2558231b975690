use serde::{Deserialize, Serialize};

use crate::core::primitives::DEFAULT_PERCENT;
use crate::core::{HexColor, color_by_index, parse_percent_to_number};
use crate::error::{ChartError, ChartResult};
use crate::option::{
    AxisBound, AxisPosition, AxisType, ChartOption, ComponentId, ExtraFields, LegendOption,
    LineStyle, LineType, Orient, PositionValue, SeriesOption, SymbolKind, YAxisOption,
};

const DEFAULT_LINE_WIDTH: f64 = 2.0;
const DEFAULT_SYMBOL_SIZE: f64 = 4.0;
const DEFAULT_LOG_BASE: f64 = 10.0;

/// Editable fields of one series row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSettings {
    id: Option<String>,
    pub label: String,
    pub color: String,
    pub line_type: LineType,
    pub line_width: f64,
    pub symbol: SymbolKind,
    pub symbol_size: f64,
    pub show_symbol: bool,
    pub smooth: bool,
}

impl SeriesSettings {
    fn from_option(index: usize, option: &SeriesOption) -> Self {
        let line_style = option.line_style.as_ref();
        Self {
            id: option.id.clone(),
            label: option
                .name
                .clone()
                .or_else(|| option.id.clone())
                .unwrap_or_else(|| format!("series {}", index + 1)),
            color: option
                .color()
                .map_or_else(|| color_by_index(index).to_owned(), str::to_owned),
            line_type: line_style.and_then(|s| s.line_type).unwrap_or_default(),
            line_width: line_style
                .and_then(|s| s.width)
                .unwrap_or(DEFAULT_LINE_WIDTH),
            symbol: option.symbol.unwrap_or_default(),
            symbol_size: option.symbol_size.unwrap_or(DEFAULT_SYMBOL_SIZE),
            show_symbol: option.show_symbol.unwrap_or(true),
            smooth: option.smooth.unwrap_or(false),
        }
    }

    /// Series id the row was read from; it binds the row and is not editable.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Writes the fields that differ from what `option` currently shows, so
    /// untouched engine values keep their exact shape.
    fn apply_to(&self, index: usize, option: &mut SeriesOption) {
        let current = Self::from_option(index, option);
        if self.label != current.label {
            option.name = Some(self.label.clone());
        }
        if self.color != current.color {
            option.set_color(&self.color);
        }
        if self.line_type != current.line_type || self.line_width != current.line_width {
            let style = option.line_style.get_or_insert_with(LineStyle::default);
            if self.line_type != current.line_type {
                style.line_type = Some(self.line_type);
            }
            if self.line_width != current.line_width {
                style.width = Some(self.line_width);
            }
            style.drop_shadowed_extra();
        }
        if self.symbol != current.symbol {
            option.symbol = Some(self.symbol);
        }
        if self.symbol_size != current.symbol_size {
            option.symbol_size = Some(self.symbol_size);
        }
        if self.show_symbol != current.show_symbol {
            option.show_symbol = Some(self.show_symbol);
        }
        if self.smooth != current.smooth {
            option.smooth = Some(self.smooth);
        }
        option.drop_shadowed_extra();
    }
}

impl ComponentId for SeriesSettings {
    fn component_id(&self) -> Option<&str> {
        self.id()
    }
}

/// Legend offset as a percent of the chart box.
///
/// Only an offset set through [`PercentField::set`] is written back, so a
/// keyword such as `"center"` survives a submit even though it reads as the
/// default percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentField {
    value: f64,
    edited: bool,
}

impl PercentField {
    fn read(value: Option<&PositionValue>) -> Self {
        Self {
            value: value.map_or(DEFAULT_PERCENT, |v| parse_percent_to_number(&v.as_text())),
            edited: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn set(&mut self, percent: f64) {
        self.value = percent;
        self.edited = true;
    }

    fn write(&self, target: &mut Option<PositionValue>) {
        if self.edited {
            *target = Some(PositionValue::percent(self.value));
        }
    }
}

/// Legend visibility and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSettings {
    pub show: bool,
    pub orient: Orient,
    pub top: PercentField,
    pub left: PercentField,
}

impl LegendSettings {
    fn from_option(option: Option<&LegendOption>) -> Self {
        Self {
            show: option.and_then(|o| o.show).unwrap_or(true),
            orient: option.and_then(|o| o.orient).unwrap_or_default(),
            top: PercentField::read(option.and_then(|o| o.top.as_ref())),
            left: PercentField::read(option.and_then(|o| o.left.as_ref())),
        }
    }

    fn apply_to(&self, option: &mut LegendOption) {
        let current = Self::from_option(Some(&*option));
        if self.show != current.show {
            option.show = Some(self.show);
        }
        if self.orient != current.orient {
            option.orient = Some(self.orient);
        }
        self.top.write(&mut option.top);
        self.left.write(&mut option.left);
        option.drop_shadowed_extra();
    }
}

/// Scaling controls for one Y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisSettings {
    id: Option<String>,
    pub name: String,
    pub axis_type: AxisType,
    pub log_base: f64,
    pub min: Option<AxisBound>,
    pub max: Option<AxisBound>,
    pub scale: bool,
    pub position: AxisPosition,
    pub show: bool,
}

impl YAxisSettings {
    fn from_option(option: &YAxisOption) -> Self {
        Self {
            id: option.id.clone(),
            name: option
                .name
                .clone()
                .or_else(|| option.id.clone())
                .unwrap_or_default(),
            axis_type: option.axis_type.unwrap_or_default(),
            log_base: option.log_base.unwrap_or(DEFAULT_LOG_BASE),
            min: option.min.clone(),
            max: option.max.clone(),
            scale: option.scale.unwrap_or(false),
            position: option.position.unwrap_or_default(),
            show: option.show.unwrap_or(true),
        }
    }

    /// Axis id the row was read from; series bind to it, so it is not editable.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn apply_to(&self, option: &mut YAxisOption) {
        let current = Self::from_option(option);
        if self.name != current.name {
            option.name = Some(self.name.clone());
        }
        if self.axis_type != current.axis_type {
            option.axis_type = Some(self.axis_type);
        }
        if self.axis_type != current.axis_type || self.log_base != current.log_base {
            option.log_base = (self.axis_type == AxisType::Log).then_some(self.log_base);
        }
        if self.min != current.min {
            option.min = self.min.clone();
        }
        if self.max != current.max {
            option.max = self.max.clone();
        }
        if self.scale != current.scale {
            option.scale = Some(self.scale);
        }
        if self.position != current.position {
            option.position = Some(self.position);
        }
        if self.show != current.show {
            option.show = Some(self.show);
        }
        option.drop_shadowed_extra();
    }
}

impl ComponentId for YAxisSettings {
    fn component_id(&self) -> Option<&str> {
        self.id()
    }
}

/// Row edited for the entry at `index` of the live document: same id, or
/// same position when neither side has one.
fn row_for<'a, R: ComponentId>(rows: &'a [R], index: usize, id: Option<&str>) -> Option<&'a R> {
    match id {
        Some(id) => rows.iter().find(|row| row.component_id() == Some(id)),
        None => rows.get(index).filter(|row| row.component_id().is_none()),
    }
}

/// Form state mirroring the editable parts of a live option snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsForm {
    pub series: Vec<SeriesSettings>,
    pub legend: LegendSettings,
    pub y_axis: Vec<YAxisSettings>,
}

/// Option components emitted when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub series: Vec<SeriesOption>,
    pub legend: Option<LegendOption>,
    pub y_axis: Vec<YAxisOption>,
}

impl SettingsPatch {
    #[must_use]
    pub fn into_option(self) -> ChartOption {
        ChartOption {
            series: self.series,
            legend: self.legend.into_iter().collect(),
            y_axis: self.y_axis,
            ..ChartOption::default()
        }
    }
}

impl SettingsForm {
    #[must_use]
    pub fn from_option(option: &ChartOption) -> Self {
        Self {
            series: option
                .series
                .iter()
                .enumerate()
                .map(|(index, s)| SeriesSettings::from_option(index, s))
                .collect(),
            legend: LegendSettings::from_option(option.primary_legend()),
            y_axis: option.y_axis.iter().map(YAxisSettings::from_option).collect(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for row in &self.series {
            row.color.parse::<HexColor>().map_err(|_| {
                ChartError::InvalidForm(format!(
                    "series `{}` color `{}` must be #rrggbb",
                    row.label, row.color
                ))
            })?;
            for (name, value) in [
                ("line_width", row.line_width),
                ("symbol_size", row.symbol_size),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ChartError::InvalidForm(format!(
                        "series `{}` {name} must be finite and > 0",
                        row.label
                    )));
                }
            }
        }

        for (name, value) in [
            ("top", self.legend.top.value()),
            ("left", self.legend.left.value()),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ChartError::InvalidForm(format!(
                    "legend {name} must be a percent in [0, 100]"
                )));
            }
        }

        for axis in &self.y_axis {
            if axis.axis_type == AxisType::Log && (!axis.log_base.is_finite() || axis.log_base <= 1.0)
            {
                return Err(ChartError::InvalidForm(format!(
                    "axis `{}` log base must be finite and > 1",
                    axis.name
                )));
            }
            let min = axis.min.as_ref().and_then(AxisBound::as_number);
            let max = axis.max.as_ref().and_then(AxisBound::as_number);
            for bound in [min, max].into_iter().flatten() {
                if !bound.is_finite() {
                    return Err(ChartError::InvalidForm(format!(
                        "axis `{}` bounds must be finite",
                        axis.name
                    )));
                }
            }
            if let (Some(min), Some(max)) = (min, max) {
                if min >= max {
                    return Err(ChartError::InvalidForm(format!(
                        "axis `{}` min must be < max",
                        axis.name
                    )));
                }
            }
            if axis.axis_type == AxisType::Log && min.is_some_and(|m| m <= 0.0) {
                return Err(ChartError::InvalidForm(format!(
                    "axis `{}` min must be > 0 on a log axis",
                    axis.name
                )));
            }
        }
        Ok(())
    }

    /// Applies the form onto the live document's entries and returns them
    /// whole; only fields the user changed are written.
    ///
    /// Rows pair with entries by id, so entries added after the form was
    /// built pass through untouched and rows whose entry is gone are dropped.
    #[must_use]
    pub fn to_patch(&self, live: &ChartOption) -> SettingsPatch {
        let series = live
            .series
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut entry = entry.clone();
                if let Some(row) = row_for(&self.series, index, entry.id.as_deref()) {
                    row.apply_to(index, &mut entry);
                }
                entry
            })
            .collect();

        let mut legend = live.primary_legend().cloned().unwrap_or_default();
        self.legend.apply_to(&mut legend);

        let y_axis = live
            .y_axis
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut entry = entry.clone();
                if let Some(row) = row_for(&self.y_axis, index, entry.id.as_deref()) {
                    row.apply_to(&mut entry);
                }
                entry
            })
            .collect();

        SettingsPatch {
            series,
            legend: Some(legend),
            y_axis,
        }
    }
}
