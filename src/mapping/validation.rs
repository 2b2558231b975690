use indexmap::IndexSet;

use crate::core::DateSeries;
use crate::error::{ChartError, ChartResult};

/// Checks the invariants a batch must hold before it is mapped.
///
/// Names must be non-empty and unique, units non-empty, and every value
/// finite (the engine receives JSON, which has no NaN).
pub fn validate_series_batch(series: &[DateSeries]) -> ChartResult<()> {
    let mut names = IndexSet::with_capacity(series.len());
    for s in series {
        if s.name.is_empty() {
            return Err(ChartError::InvalidData(
                "series name must not be empty".to_owned(),
            ));
        }
        if s.unit.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has an empty unit",
                s.name
            )));
        }
        if !names.insert(s.name.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series name `{}`",
                s.name
            )));
        }
        if let Some(point) = s.points.iter().find(|p| !p.v.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has a non-finite value at `{}`",
                s.name, point.d
            )));
        }
    }
    Ok(())
}

/// Distinct units in first-seen order.
#[must_use]
pub fn distinct_units(series: &[DateSeries]) -> Vec<&str> {
    series
        .iter()
        .map(|s| s.unit.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
