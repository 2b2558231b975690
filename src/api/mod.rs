mod chart_config;
mod chart_instance;
mod config_io;
mod date_chart;
mod observer;
mod settings_controller;
mod toolbox;

pub use chart_config::{DEFAULT_EXPORT_FILE_NAME, DateChartConfig, ExportMode};
pub use chart_instance::{ChartInstance, MemoryChartInstance};
pub use date_chart::DateChart;
pub use observer::{ChartEvent, ChartObserver};
pub use toolbox::{ToolboxAction, ToolboxFeatureKind};
