use std::path::PathBuf;

use crate::settings::SettingsPatch;

/// Notifications emitted by the chart host.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Initialized,
    SeriesMapped { series: usize, y_axes: usize },
    SettingsOpened { series: usize },
    SettingsClosed,
    /// The option patch produced by a valid settings submit.
    SettingsSubmitted(SettingsPatch),
    ConfigExported { path: Option<PathBuf>, bytes: usize },
    ConfigImported { path: Option<PathBuf> },
}

/// Receives host events; the embedding application's output channel.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent);
}
