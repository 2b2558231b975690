use date_chart::core::{COLOR_PALETTE, ColorScheme, DateSeries, Point};
use date_chart::mapping::{
    AxisMergePolicy, create_dataset_sources, create_series_options, create_y_axis_options,
    distinct_units, validate_series_batch,
};
use date_chart::option::presets::Y_AXIS_BASIC_GAP;
use date_chart::option::{
    AxisBound, AxisType, Encode, LineStyle, LineType, SeriesOption, SeriesType, YAxisOption,
};

fn batch() -> Vec<DateSeries> {
    vec![
        DateSeries::new("Revenue", "USD")
            .with_point("2024-01-01", 10.0)
            .with_point("2024-01-08", 12.5),
        DateSeries::new("Costs", "USD").with_point("2024-01-01", 4.0),
        DateSeries::new("Sales EU", "EUR").with_point("2024-01-01", 7.0),
    ]
}

#[test]
fn dataset_sources_are_keyed_by_series_name() {
    let datasets = create_dataset_sources(&batch());
    assert_eq!(datasets.len(), 3);
    assert_eq!(datasets[0].id.as_deref(), Some("Revenue"));
    assert_eq!(
        datasets[0].source,
        vec![Point::new("2024-01-01", 10.0), Point::new("2024-01-08", 12.5)]
    );
    assert_eq!(datasets[2].id.as_deref(), Some("Sales EU"));
}

#[test]
fn new_series_get_positional_defaults() {
    let options = create_series_options(&batch(), &[], ColorScheme::Cyclic);
    assert_eq!(options.len(), 3);

    let costs = &options[1];
    assert_eq!(costs.series_type, Some(SeriesType::Line));
    assert_eq!(costs.id.as_deref(), Some("Costs"));
    assert_eq!(costs.name.as_deref(), Some("Costs, USD"));
    assert_eq!(costs.dataset_id.as_deref(), Some("Costs"));
    assert_eq!(costs.y_axis_id.as_deref(), Some("USD"));
    assert_eq!(costs.color(), Some(COLOR_PALETTE[1]));
    assert_eq!(
        costs.item_style.as_ref().and_then(|s| s.color.as_deref()),
        Some(COLOR_PALETTE[1])
    );
    assert_eq!(costs.encode, Some(Encode::point_fields()));
    assert_eq!(costs.encode.as_ref().and_then(|e| e.x.as_deref()), Some("d"));
    assert_eq!(costs.encode.as_ref().and_then(|e| e.y.as_deref()), Some("v"));
}

#[test]
fn prior_edits_survive_refresh_and_label_is_restamped() {
    let mut edited = create_series_options(&batch(), &[], ColorScheme::Cyclic);
    edited[0].set_color("#000000");
    edited[0].line_style.as_mut().expect("style").line_type = Some(LineType::Dashed);
    edited[0].name = Some("stale label".to_owned());
    edited[0].series_type = None;

    let mut next = batch();
    next[0].unit = "CAD".to_owned();
    next.swap(0, 2);

    let remapped = create_series_options(&next, &edited, ColorScheme::Cyclic);
    assert_eq!(remapped.len(), 3);

    let revenue = &remapped[2];
    assert_eq!(revenue.id.as_deref(), Some("Revenue"));
    assert_eq!(revenue.color(), Some("#000000"));
    assert_eq!(
        revenue.line_style.as_ref().and_then(|s| s.line_type),
        Some(LineType::Dashed)
    );
    assert_eq!(revenue.name.as_deref(), Some("Revenue, CAD"));
    assert_eq!(revenue.series_type, Some(SeriesType::Line));
}

#[test]
fn unmatched_series_get_default_even_when_others_match() {
    let previous = vec![SeriesOption {
        id: Some("Costs".to_owned()),
        line_style: Some(LineStyle::with_color("#123456")),
        ..SeriesOption::default()
    }];
    let options = create_series_options(&batch(), &previous, ColorScheme::Cyclic);

    assert_eq!(options[0].color(), Some(COLOR_PALETTE[0]));
    assert_eq!(options[1].color(), Some("#123456"));
    assert_eq!(options[2].color(), Some(COLOR_PALETTE[2]));
}

#[test]
fn two_usd_and_one_eur_series_give_two_offset_axes() {
    let axes = create_y_axis_options(&batch(), &[], Y_AXIS_BASIC_GAP, AxisMergePolicy::Reuse);

    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].id.as_deref(), Some("USD"));
    assert_eq!(axes[0].name.as_deref(), Some("USD"));
    assert_eq!(axes[0].axis_type, Some(AxisType::Value));
    assert_eq!(axes[0].offset, Some(0.0));
    assert_eq!(axes[1].id.as_deref(), Some("EUR"));
    assert_eq!(axes[1].offset, Some(Y_AXIS_BASIC_GAP));
}

#[test]
fn reuse_policy_keeps_prior_axis_object_once() {
    let prior = YAxisOption {
        id: Some("USD".to_owned()),
        name: Some("Dollars".to_owned()),
        min: Some(AxisBound::Number(0.0)),
        offset: Some(0.0),
        ..YAxisOption::default()
    };

    let axes = create_y_axis_options(
        &batch(),
        std::slice::from_ref(&prior),
        40.0,
        AxisMergePolicy::Reuse,
    );
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0], prior);
    assert_eq!(axes[1].id.as_deref(), Some("EUR"));
    assert_eq!(axes[1].offset, Some(40.0));
}

#[test]
fn legacy_policy_reproduces_duplicate_axis_for_matched_unit() {
    let prior = YAxisOption {
        id: Some("USD".to_owned()),
        name: Some("Dollars".to_owned()),
        ..YAxisOption::default()
    };

    let axes = create_y_axis_options(
        &batch(),
        std::slice::from_ref(&prior),
        Y_AXIS_BASIC_GAP,
        AxisMergePolicy::LegacyDuplicate,
    );

    let ids: Vec<_> = axes.iter().map(|a| a.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("USD"), Some("USD"), Some("EUR")]);
    assert_eq!(axes[0], prior);
    assert_eq!(axes[1].name.as_deref(), Some("USD"));
    assert_eq!(axes[1].offset, Some(Y_AXIS_BASIC_GAP));
    assert_eq!(axes[2].offset, Some(2.0 * Y_AXIS_BASIC_GAP));
}

#[test]
fn axis_deriver_ignores_priors_for_absent_units() {
    let prior = YAxisOption {
        id: Some("JPY".to_owned()),
        ..YAxisOption::default()
    };
    let axes = create_y_axis_options(&batch(), &[prior], 10.0, AxisMergePolicy::Reuse);
    assert_eq!(distinct_units(&batch()), vec!["USD", "EUR"]);
    assert_eq!(axes.len(), 2);
    assert!(axes.iter().all(|a| a.id.as_deref() != Some("JPY")));
}

#[test]
fn empty_batch_maps_to_nothing() {
    assert!(create_dataset_sources(&[]).is_empty());
    assert!(create_series_options(&[], &[], ColorScheme::Blended).is_empty());
    assert!(create_y_axis_options(&[], &[], 60.0, AxisMergePolicy::Reuse).is_empty());
}

#[test]
fn batch_validation_rejects_broken_invariants() {
    assert!(validate_series_batch(&batch()).is_ok());

    let mut duplicate = batch();
    duplicate.push(DateSeries::new("Revenue", "EUR"));
    assert!(validate_series_batch(&duplicate).is_err());

    let empty_unit = vec![DateSeries::new("A", "")];
    assert!(validate_series_batch(&empty_unit).is_err());

    let nan = vec![DateSeries::new("A", "kg").with_point("2024-01-01", f64::NAN)];
    assert!(validate_series_batch(&nan).is_err());
}
