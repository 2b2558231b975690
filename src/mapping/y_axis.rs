use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::DateSeries;
use crate::option::YAxisOption;
use crate::option::presets::y_axis_template;

/// What the axis deriver does when a prior axis exists for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMergePolicy {
    /// Keep the prior axis option and emit nothing else for that unit.
    #[default]
    Reuse,
    /// Emit the prior axis and then a freshly synthesized one for the same
    /// unit, as earlier releases of the widget did.
    LegacyDuplicate,
}

/// Derives one Y axis per distinct unit, in first-seen order.
///
/// A synthesized axis is offset by `gap_px` times the number of axes already
/// emitted.
#[must_use]
pub fn create_y_axis_options(
    series: &[DateSeries],
    previous: &[YAxisOption],
    gap_px: f64,
    policy: AxisMergePolicy,
) -> Vec<YAxisOption> {
    let mut prior_by_unit: IndexMap<&str, &YAxisOption> = IndexMap::new();
    for axis in previous {
        if let Some(id) = axis.id.as_deref() {
            prior_by_unit.entry(id).or_insert(axis);
        }
    }

    let mut axes: Vec<YAxisOption> = Vec::new();
    for s in series {
        let unit = s.unit.as_str();
        if axes.iter().any(|axis| axis.id.as_deref() == Some(unit)) {
            continue;
        }

        if let Some(prior) = prior_by_unit.get(unit) {
            trace!(unit, ?policy, "reusing prior y axis");
            axes.push((*prior).clone());
            if policy == AxisMergePolicy::Reuse {
                continue;
            }
        }

        let offset = axes.len() as f64 * gap_px;
        axes.push(synthesize_axis(unit, offset));
    }
    axes
}

fn synthesize_axis(unit: &str, offset: f64) -> YAxisOption {
    YAxisOption {
        id: Some(unit.to_owned()),
        name: Some(unit.to_owned()),
        offset: Some(offset),
        ..y_axis_template()
    }
}
