use std::fmt;

use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::option::ChartOption;

use super::{SettingsForm, SettingsPatch};

/// Open/closed state of the settings dialog and the form it edits.
#[derive(Default)]
pub struct SettingsDialog {
    visible: bool,
    form: Option<SettingsForm>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for SettingsDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsDialog")
            .field("visible", &self.visible)
            .field("form", &self.form)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

impl SettingsDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback run every time the dialog closes.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    pub fn open(&mut self, snapshot: &ChartOption) -> &SettingsForm {
        let form = SettingsForm::from_option(snapshot);
        debug!(
            series = form.series.len(),
            y_axes = form.y_axis.len(),
            "open settings dialog"
        );
        self.visible = true;
        self.form.insert(form)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn form(&self) -> Option<&SettingsForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut SettingsForm> {
        self.form.as_mut()
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.form = None;
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    /// Validates the form and, when valid, closes the dialog and returns the
    /// form applied onto `live`. An invalid form leaves the dialog open and
    /// untouched.
    pub fn submit(&mut self, live: &ChartOption) -> ChartResult<SettingsPatch> {
        let Some(form) = self.form.as_ref() else {
            warn!("settings submitted while dialog is closed");
            return Err(ChartError::InvalidForm(
                "settings dialog is not open".to_owned(),
            ));
        };

        if let Err(err) = form.validate() {
            warn!(error = %err, "invalid settings form");
            return Err(err);
        }

        let patch = form.to_patch(live);
        self.close();
        Ok(patch)
    }
}
