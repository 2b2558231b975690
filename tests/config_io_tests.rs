use std::fs;

use date_chart::api::{
    DEFAULT_EXPORT_FILE_NAME, DateChart, DateChartConfig, ExportMode, MemoryChartInstance,
    ToolboxAction,
};
use date_chart::core::DateSeries;
use date_chart::option::{ChartOption, LineType};
use date_chart::ChartError;
use serde_json::Value;
use tempfile::TempDir;

fn batch() -> Vec<DateSeries> {
    vec![
        DateSeries::new("Revenue", "USD")
            .with_point("2024-01-01", 10.0)
            .with_point("2024-01-08", 11.0),
        DateSeries::new("Sales EU", "EUR").with_point("2024-01-01", 7.0),
    ]
}

fn chart_with(config: DateChartConfig) -> DateChart<MemoryChartInstance> {
    let mut chart = DateChart::new(config).expect("chart");
    chart
        .on_chart_init(MemoryChartInstance::new())
        .expect("init");
    chart.on_change_series(batch()).expect("series");
    chart
}

#[test]
fn export_then_import_yields_same_configuration() {
    let mut source = chart_with(DateChartConfig::default());
    source.show_settings().expect("open");
    source
        .settings_dialog_mut()
        .form_mut()
        .expect("form")
        .series[1]
        .line_type = LineType::Dashed;
    source.submit_settings().expect("submit");

    let exported = source.export_config().expect("export");
    assert!(exported.contains('\n'), "export is pretty-printed");

    let mut target: DateChart<MemoryChartInstance> =
        DateChart::new(DateChartConfig::default()).expect("chart");
    target
        .on_chart_init(MemoryChartInstance::new())
        .expect("init");
    target.import_config_str(&exported).expect("import");

    assert_eq!(
        target.current_option().expect("target"),
        source.current_option().expect("source")
    );
}

#[test]
fn malformed_import_leaves_configuration_unchanged() {
    let mut chart = chart_with(DateChartConfig::default());
    let before = chart.current_option().expect("option");

    for text in ["{ \"series\": [", "42", "[{ \"id\": \"Revenue\" }]", "null"] {
        let err = chart.import_config_str(text).expect_err("malformed");
        assert!(matches!(err, ChartError::InvalidConfig(_)), "{text}: {err}");
        assert_eq!(chart.current_option().expect("option"), before);
    }
}

#[test]
fn import_applies_document_verbatim_including_unknown_fields() {
    let mut chart = chart_with(DateChartConfig::default());
    chart
        .import_config_str(
            r##"{
                "backgroundColor": "#fafafa",
                "legend": { "show": false },
                "series": [{ "id": "Revenue", "smooth": true, "markLine": { "silent": true } }]
            }"##,
        )
        .expect("import");

    let option = chart.current_option().expect("option");
    assert_eq!(option.extra["backgroundColor"], "#fafafa");
    assert_eq!(option.legend[0].show, Some(false));
    assert_eq!(option.series.len(), 2);
    assert_eq!(option.series[0].smooth, Some(true));
    assert_eq!(option.series[0].extra["markLine"]["silent"], true);
    assert_eq!(option.series[0].dataset_id.as_deref(), Some("Revenue"));
}

#[test]
fn engine_documents_outside_the_typed_model_are_applied() {
    let documents = [
        r#"{ "series": [{ "id": "Revenue", "smooth": 0.4 }] }"#,
        r#"{ "series": [{ "id": "Revenue", "symbol": "image://x.png" }] }"#,
        r#"{ "series": [{ "id": "Revenue", "symbolSize": [6, 8] }] }"#,
        r#"{ "series": [{ "id": "Revenue", "lineStyle": { "type": [5, 10] } }] }"#,
        r#"{ "series": [{ "id": "Revenue", "type": "candlestick" }] }"#,
        r#"{ "series": [{ "id": "Revenue", "encode": { "x": "d", "y": "v", "tooltip": ["v"] } }] }"#,
        r#"{ "dataset": [{ "id": "Revenue", "source": [{ "d": "2024-01-01", "v": null }] }] }"#,
    ];

    for text in documents {
        let mut chart = chart_with(DateChartConfig::default());
        chart.import_config_str(text).expect(text);

        // every imported value is present verbatim in the export
        let imported: Value = serde_json::from_str(text).expect("json");
        let exported: Value =
            serde_json::from_str(&chart.export_config().expect("export")).expect("json");
        for (component, entries) in imported.as_object().expect("object") {
            let patch = &entries[0];
            let live = &exported[component][0];
            for (key, value) in patch.as_object().expect("entry") {
                if key == "lineStyle" {
                    assert_eq!(live[key]["type"], value["type"], "{text}");
                } else if key == "encode" {
                    assert_eq!(live[key]["tooltip"], value["tooltip"], "{text}");
                } else {
                    assert_eq!(&live[key], value, "{text}");
                }
            }
        }
    }
}

#[test]
fn raw_values_survive_refresh_and_settings_submit() {
    let mut chart = chart_with(DateChartConfig::default());
    chart
        .import_config_str(
            r#"{ "series": [{ "id": "Revenue", "smooth": 0.4, "lineStyle": { "type": [5, 10] } }] }"#,
        )
        .expect("import");

    chart.on_change_series(batch()).expect("refresh");
    chart.show_settings().expect("open");
    chart.settings_dialog_mut().form_mut().expect("form").series[1].smooth = true;
    chart.submit_settings().expect("submit");

    let exported: Value =
        serde_json::from_str(&chart.export_config().expect("export")).expect("json");
    let revenue = &exported["series"][0];
    assert_eq!(revenue["smooth"], 0.4);
    assert_eq!(revenue["lineStyle"]["type"], serde_json::json!([5, 10]));
    assert_eq!(exported["series"][1]["smooth"], true);

    // a user edit of a raw field replaces it
    chart.show_settings().expect("open");
    chart.settings_dialog_mut().form_mut().expect("form").series[0].line_type = LineType::Dotted;
    chart.submit_settings().expect("submit");
    let exported: Value =
        serde_json::from_str(&chart.export_config().expect("export")).expect("json");
    assert_eq!(exported["series"][0]["lineStyle"]["type"], "dotted");
    assert_eq!(exported["series"][0]["smooth"], 0.4);
}

#[test]
fn export_to_directory_uses_configured_file_name() {
    let dir = TempDir::new().expect("temp dir");
    let mut chart = chart_with(DateChartConfig::default());

    let path = chart
        .export_config_to_path(dir.path())
        .expect("export to dir");
    assert_eq!(path, dir.path().join(DEFAULT_EXPORT_FILE_NAME));

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(
        ChartOption::from_json_str(&written).expect("parse"),
        chart.current_option().expect("option")
    );
}

#[test]
fn toolbox_import_reads_selected_file() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("custom.json");
    fs::write(&file, r#"{ "yAxis": [{ "id": "USD", "min": 0, "max": "dataMax" }] }"#)
        .expect("write");

    let mut chart = chart_with(DateChartConfig::default());
    chart
        .handle_toolbox(ToolboxAction::ImportConfig {
            file: Some(file.clone()),
        })
        .expect("import");

    let option = chart.current_option().expect("option");
    let usd = &option.y_axis[0];
    assert_eq!(usd.min.as_ref().and_then(|b| b.as_number()), Some(0.0));
    assert_eq!(
        usd.max,
        Some(date_chart::option::AxisBound::Keyword("dataMax".to_owned()))
    );
}

#[test]
fn empty_selection_and_empty_file_are_ignored() {
    let dir = TempDir::new().expect("temp dir");
    let empty = dir.path().join("empty.json");
    fs::write(&empty, "  \n").expect("write");

    let mut chart = chart_with(DateChartConfig::default());
    let before = chart.current_option().expect("option");

    assert!(matches!(
        chart.handle_toolbox(ToolboxAction::ImportConfig { file: None }),
        Err(ChartError::EmptySelection)
    ));
    assert!(matches!(
        chart.import_config_from_path(Some(empty.as_path())),
        Err(ChartError::EmptyFile(_))
    ));
    assert!(matches!(
        chart.import_config_from_path(Some(dir.path().join("missing.json").as_path())),
        Err(ChartError::Io { .. })
    ));
    assert_eq!(chart.current_option().expect("option"), before);
}

#[test]
fn settings_only_export_drops_dataset_sources() {
    let chart = chart_with(DateChartConfig::default().with_export_mode(ExportMode::SettingsOnly));
    let exported = ChartOption::from_json_str(&chart.export_config().expect("export"))
        .expect("parse");

    assert!(exported.dataset.is_empty());
    assert_eq!(exported.series.len(), 2);
    assert_eq!(exported.y_axis.len(), 2);
}
