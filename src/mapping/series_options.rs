use indexmap::IndexMap;
use tracing::trace;

use crate::core::{ColorScheme, DateSeries};
use crate::option::{Encode, ExtraFields, ItemStyle, LineStyle, SeriesOption, SeriesType};

/// Maps a series batch to display options, carrying prior edits forward.
///
/// A prior option belongs to a series when its `id` equals the series name;
/// options without an id are matched on `name`. Matched options are kept
/// whole with the label re-stamped as `"<name>, <unit>"`. Unmatched series get
/// defaults colored by their position in the batch.
#[must_use]
pub fn create_series_options(
    series: &[DateSeries],
    previous: &[SeriesOption],
    scheme: ColorScheme,
) -> Vec<SeriesOption> {
    let mut by_id: IndexMap<&str, &SeriesOption> = IndexMap::new();
    let mut by_name: IndexMap<&str, &SeriesOption> = IndexMap::new();
    for option in previous {
        if let Some(id) = option.id.as_deref() {
            by_id.entry(id).or_insert(option);
        } else if let Some(name) = option.name.as_deref() {
            by_name.entry(name).or_insert(option);
        }
    }

    series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let prior = by_id
                .get(s.name.as_str())
                .or_else(|| by_name.get(s.name.as_str()));
            match prior {
                Some(prior) => {
                    trace!(series = %s.name, "reusing prior series option");
                    let mut option = (*prior).clone();
                    // a raw engine type the model does not name is kept
                    if option.series_type.is_none() && !option.extra.contains_key("type") {
                        option.series_type = Some(SeriesType::Line);
                    }
                    option.name = Some(s.display_label());
                    option.drop_shadowed_extra();
                    option
                }
                None => default_series_option(s, index, scheme),
            }
        })
        .collect()
}

/// Display option for a series with no prior settings.
#[must_use]
pub fn default_series_option(
    series: &DateSeries,
    index: usize,
    scheme: ColorScheme,
) -> SeriesOption {
    let color = scheme.color_for_index(index);
    SeriesOption {
        series_type: Some(SeriesType::Line),
        id: Some(series.name.clone()),
        name: Some(series.display_label()),
        dataset_id: Some(series.name.clone()),
        y_axis_id: Some(series.unit.clone()),
        line_style: Some(LineStyle::with_color(color.clone())),
        item_style: Some(ItemStyle::with_color(color)),
        encode: Some(Encode::point_fields()),
        ..SeriesOption::default()
    }
}
