use date_chart::api::{DEFAULT_EXPORT_FILE_NAME, DateChart, DateChartConfig, ExportMode};
use date_chart::core::ColorScheme;
use date_chart::mapping::AxisMergePolicy;
use date_chart::option::presets::Y_AXIS_BASIC_GAP;
use date_chart::{ChartError, MemoryChartInstance};

#[test]
fn partial_json_config_falls_back_to_defaults() {
    let config =
        DateChartConfig::from_json_str(r#"{ "color_scheme": "blended" }"#).expect("config");
    assert_eq!(config.color_scheme, ColorScheme::Blended);
    assert_eq!(config.y_axis_gap_px, Y_AXIS_BASIC_GAP);
    assert_eq!(config.axis_merge_policy, AxisMergePolicy::Reuse);
    assert_eq!(config.export_file_name, DEFAULT_EXPORT_FILE_NAME);
    assert_eq!(config.export_mode, ExportMode::Full);
}

#[test]
fn config_json_round_trip() {
    let config = DateChartConfig::default()
        .with_y_axis_gap_px(48.0)
        .with_axis_merge_policy(AxisMergePolicy::LegacyDuplicate)
        .with_export_file_name("chart.json")
        .with_export_mode(ExportMode::SettingsOnly);
    let json = config.to_json_pretty().expect("json");
    assert!(json.contains("legacy_duplicate"));
    assert_eq!(DateChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn invalid_config_is_rejected() {
    for config in [
        DateChartConfig::default().with_y_axis_gap_px(-1.0),
        DateChartConfig::default().with_y_axis_gap_px(f64::INFINITY),
        DateChartConfig::default().with_export_file_name(""),
        DateChartConfig::default().with_export_file_name("../escape.json"),
    ] {
        assert!(matches!(
            DateChart::<MemoryChartInstance>::new(config),
            Err(ChartError::InvalidConfig(_))
        ));
    }
    assert!(DateChartConfig::from_json_str(r#"{ "y_axis_gap_px": "wide" }"#).is_err());
}
