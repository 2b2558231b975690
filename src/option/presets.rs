//! Base configuration pieces the chart host starts from.

use indexmap::IndexMap;

use super::{
    AxisType, ChartOption, DataZoomOption, DataZoomType, GridOption, LegendOption,
    PositionValue, ToolboxFeature, ToolboxOption, TooltipOption, TooltipTrigger, XAxisOption,
    YAxisOption,
};

/// Horizontal gap between consecutive Y axes, in pixels.
pub const Y_AXIS_BASIC_GAP: f64 = 60.0;

pub const ICON_EXPORT_FILE: &str = "M12 16l-5-5h3V5h4v6h3l-5 5z";
pub const ICON_IMPORT_FILE: &str = "M12 8 L17 13 L14 13 L14 19 L10 19 L10 13 L7 13 L12 8 Z";
pub const ICON_SETTINGS: &str = "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6Zm7.4-3a1.85 1.85 0 0 0 .16.76l1.48 3.57a1.9 1.9 0 0 1-.5 2.17l-2.76 2.4a1.9 1.9 0 0 1-2.18.2l-3.58-1.48a1.9 1.9 0 0 0-1.52 0l-3.58 1.48a1.9 1.9 0 0 1-2.18-.2l-2.76-2.4a1.9 1.9 0 0 1-.5-2.17l1.48-3.57a1.9 1.9 0 0 0 0-1.52L2.2 7.91a1.9 1.9 0 0 1 .5-2.17l2.76-2.4a1.9 1.9 0 0 1 2.18-.2l3.58 1.48a1.9 1.9 0 0 0 1.52 0l3.58-1.48a1.9 1.9 0 0 1 2.18.2l2.76 2.4a1.9 1.9 0 0 1 .5 2.17l-1.48 3.57a1.9 1.9 0 0 0-.16.76Z";

pub const FEATURE_SETTINGS: &str = "mySettingsPopup";
pub const FEATURE_EXPORT_CONFIG: &str = "myExportConfig";
pub const FEATURE_IMPORT_CONFIG: &str = "myImportConfig";

#[must_use]
pub fn x_axis() -> Vec<XAxisOption> {
    vec![XAxisOption {
        axis_type: Some(AxisType::Time),
        ..XAxisOption::default()
    }]
}

/// Template every synthesized Y axis starts from.
#[must_use]
pub fn y_axis_template() -> YAxisOption {
    YAxisOption {
        axis_type: Some(AxisType::Value),
        ..YAxisOption::default()
    }
}

#[must_use]
pub fn data_zoom() -> Vec<DataZoomOption> {
    [DataZoomType::Slider, DataZoomType::Inside]
        .into_iter()
        .map(|zoom_type| DataZoomOption {
            zoom_type: Some(zoom_type),
            ..DataZoomOption::default()
        })
        .collect()
}

#[must_use]
pub fn legend() -> LegendOption {
    LegendOption {
        show: Some(true),
        top: Some(PositionValue::percent(2.0)),
        left: Some(PositionValue::Text("center".to_owned())),
        ..LegendOption::default()
    }
}

#[must_use]
pub fn grid() -> GridOption {
    GridOption {
        left: Some(PositionValue::percent(5.0)),
        right: Some(PositionValue::percent(5.0)),
        top: Some(PositionValue::percent(12.0)),
        bottom: Some(PositionValue::percent(15.0)),
        contain_label: Some(true),
        ..GridOption::default()
    }
}

#[must_use]
pub fn tooltip() -> TooltipOption {
    TooltipOption {
        trigger: Some(TooltipTrigger::Axis),
        ..TooltipOption::default()
    }
}

#[must_use]
pub fn toolbox() -> ToolboxOption {
    let mut feature = IndexMap::new();
    for (key, icon, title) in [
        (FEATURE_SETTINGS, ICON_SETTINGS, "Settings"),
        (FEATURE_EXPORT_CONFIG, ICON_EXPORT_FILE, "Export Chart Settings"),
        (FEATURE_IMPORT_CONFIG, ICON_IMPORT_FILE, "Import Chart Settings"),
    ] {
        feature.insert(
            key.to_owned(),
            ToolboxFeature {
                show: Some(true),
                icon: Some(format!("path://{icon}")),
                title: Some(title.to_owned()),
                ..ToolboxFeature::default()
            },
        );
    }
    ToolboxOption {
        show: Some(true),
        feature,
        ..ToolboxOption::default()
    }
}

impl ChartOption {
    /// Option the host applies before any series arrive.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            x_axis: x_axis(),
            legend: vec![legend()],
            grid: vec![grid()],
            tooltip: vec![tooltip()],
            toolbox: vec![toolbox()],
            data_zoom: data_zoom(),
            ..Self::default()
        }
    }
}
