use crate::core::DateSeries;
use crate::option::DatasetOption;

/// One dataset per series, keyed by series name, in input order.
#[must_use]
pub fn create_dataset_sources(series: &[DateSeries]) -> Vec<DatasetOption> {
    series
        .iter()
        .map(|s| DatasetOption {
            id: Some(s.name.clone()),
            source: s.points.clone(),
            ..DatasetOption::default()
        })
        .collect()
}
