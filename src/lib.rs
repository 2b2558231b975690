//! date-chart: typed option model and host logic for a date/time-series line
//! chart rendered by an external declarative charting engine.
//!
//! The crate maps caller series onto datasets, per-series display options and
//! one Y axis per unit, keeps user edits across data refreshes, and models the
//! settings dialog and JSON config import/export around the engine handle.

pub mod api;
pub mod core;
pub mod error;
pub mod mapping;
pub mod option;
pub mod settings;
pub mod telemetry;

pub use api::{ChartInstance, DateChart, DateChartConfig, MemoryChartInstance};
pub use error::{ChartError, ChartResult};
