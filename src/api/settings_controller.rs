use tracing::debug;

use crate::error::ChartResult;
use crate::option::{ChartOption, ComponentKey, SetOptionMode, upsert_components};
use crate::settings::{SettingsDialog, SettingsForm, SettingsPatch};

use super::{ChartEvent, ChartInstance, DateChart};

impl<I: ChartInstance> DateChart<I> {
    /// Opens the settings dialog on the live option snapshot.
    pub fn show_settings(&mut self) -> ChartResult<&SettingsForm> {
        let snapshot = self.current_option()?;
        self.emit(ChartEvent::SettingsOpened {
            series: snapshot.series.len(),
        });
        Ok(self.dialog.open(&snapshot))
    }

    #[must_use]
    pub fn settings_dialog(&self) -> &SettingsDialog {
        &self.dialog
    }

    pub fn settings_dialog_mut(&mut self) -> &mut SettingsDialog {
        &mut self.dialog
    }

    pub fn close_settings(&mut self) {
        self.dialog.close();
        self.emit(ChartEvent::SettingsClosed);
    }

    /// Submits the open form against the live option. An invalid form is
    /// rejected with the dialog left open; a valid one closes it and is
    /// pushed to the engine.
    pub fn submit_settings(&mut self) -> ChartResult<SettingsPatch> {
        let live = self.current_option()?;
        let patch = self.dialog.submit(&live)?;
        self.emit(ChartEvent::SettingsClosed);
        self.on_changes_submit(patch.clone())?;
        Ok(patch)
    }

    /// Applies a settings patch and reports it to observers.
    ///
    /// Series and axis entries replace the live entry with the same id and
    /// live entries the patch does not list are kept. The legend merges into
    /// the first legend.
    pub fn on_changes_submit(&mut self, patch: SettingsPatch) -> ChartResult<()> {
        let live = self.current_option()?;
        let changes = ChartOption {
            series: upsert_components(&live.series, patch.series.clone()),
            y_axis: upsert_components(&live.y_axis, patch.y_axis.clone()),
            legend: patch.legend.iter().cloned().collect(),
            ..ChartOption::default()
        };
        debug!(
            series = changes.series.len(),
            y_axes = changes.y_axis.len(),
            "apply settings patch"
        );
        self.push_option_changes(
            &changes,
            &SetOptionMode::replace([ComponentKey::Series, ComponentKey::YAxis]),
        )?;
        self.emit(ChartEvent::SettingsSubmitted(patch));
        Ok(())
    }
}
