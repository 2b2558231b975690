use serde::{Deserialize, Serialize};

use crate::core::ColorScheme;
use crate::error::{ChartError, ChartResult};
use crate::mapping::AxisMergePolicy;
use crate::option::presets::Y_AXIS_BASIC_GAP;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "echarts-config.json";

/// What an exported configuration file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// The full option snapshot, dataset sources included.
    #[default]
    Full,
    /// Appearance only: dataset sources are dropped.
    SettingsOnly,
}

/// Host configuration.
///
/// Serializable so embedders can keep it next to their own settings; every
/// field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateChartConfig {
    #[serde(default = "default_y_axis_gap_px")]
    pub y_axis_gap_px: f64,
    #[serde(default)]
    pub axis_merge_policy: AxisMergePolicy,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    #[serde(default)]
    pub export_mode: ExportMode,
}

impl Default for DateChartConfig {
    fn default() -> Self {
        Self {
            y_axis_gap_px: default_y_axis_gap_px(),
            axis_merge_policy: AxisMergePolicy::default(),
            color_scheme: ColorScheme::default(),
            export_file_name: default_export_file_name(),
            export_mode: ExportMode::default(),
        }
    }
}

impl DateChartConfig {
    #[must_use]
    pub fn with_y_axis_gap_px(mut self, gap_px: f64) -> Self {
        self.y_axis_gap_px = gap_px;
        self
    }

    #[must_use]
    pub fn with_axis_merge_policy(mut self, policy: AxisMergePolicy) -> Self {
        self.axis_merge_policy = policy;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    #[must_use]
    pub fn with_export_mode(mut self, mode: ExportMode) -> Self {
        self.export_mode = mode;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.y_axis_gap_px.is_finite() || self.y_axis_gap_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "y_axis_gap_px must be finite and >= 0".to_owned(),
            ));
        }
        if self.export_file_name.is_empty()
            || self.export_file_name.contains(['/', '\\'])
        {
            return Err(ChartError::InvalidConfig(
                "export_file_name must be a plain, non-empty file name".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}

fn default_y_axis_gap_px() -> f64 {
    Y_AXIS_BASIC_GAP
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_owned()
}
