//! Pure functions that reshape caller series into option components.

mod dataset;
mod series_options;
mod validation;
mod y_axis;

pub use dataset::create_dataset_sources;
pub use series_options::{create_series_options, default_series_option};
pub use validation::{distinct_units, validate_series_batch};
pub use y_axis::{AxisMergePolicy, create_y_axis_options};
