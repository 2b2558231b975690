//! Settings dialog model: an editable view over the live option snapshot.

mod dialog;
mod form;

pub use dialog::SettingsDialog;
pub use form::{
    LegendSettings, PercentField, SeriesSettings, SettingsForm, SettingsPatch, YAxisSettings,
};
