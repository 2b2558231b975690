use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::option::{ChartOption, SetOptionMode};

use super::{ChartEvent, ChartInstance, DateChart, ExportMode};

impl<I: ChartInstance> DateChart<I> {
    /// Pretty-printed JSON of the live option, shaped by the export mode.
    pub fn export_config(&self) -> ChartResult<String> {
        let snapshot = self.current_option()?;
        let exported = match self.config.export_mode {
            ExportMode::Full => snapshot,
            ExportMode::SettingsOnly => snapshot.without_dataset(),
        };
        exported.to_json_pretty()
    }

    /// Writes the exported config and returns the file written.
    ///
    /// A directory destination receives the configured export file name.
    pub fn export_config_to_path(&mut self, destination: &Path) -> ChartResult<PathBuf> {
        let json = self.export_config()?;
        let path = if destination.is_dir() {
            destination.join(&self.config.export_file_name)
        } else {
            destination.to_path_buf()
        };
        fs::write(&path, &json).map_err(|source| {
            warn!(path = %path.display(), error = %source, "failed to write chart config");
            ChartError::Io {
                path: path.clone(),
                source,
            }
        })?;
        debug!(path = %path.display(), bytes = json.len(), "exported chart config");
        self.emit(ChartEvent::ConfigExported {
            path: Some(path.clone()),
            bytes: json.len(),
        });
        Ok(path)
    }

    /// Applies JSON text as the new chart configuration.
    ///
    /// The document is merged as-is; malformed input is logged and the live
    /// option stays unchanged.
    pub fn import_config_str(&mut self, text: &str) -> ChartResult<()> {
        self.apply_imported_config(text, None)
    }

    /// Reads a user-selected file and applies it as the chart configuration.
    pub fn import_config_from_path(&mut self, file: Option<&Path>) -> ChartResult<()> {
        let Some(path) = file else {
            warn!("empty file selection");
            return Err(ChartError::EmptySelection);
        };
        let text = fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "invalid file");
            ChartError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        if text.trim().is_empty() {
            warn!(path = %path.display(), "empty file");
            return Err(ChartError::EmptyFile(path.to_path_buf()));
        }
        self.apply_imported_config(&text, Some(path))
    }

    fn apply_imported_config(&mut self, text: &str, path: Option<&Path>) -> ChartResult<()> {
        if !self.is_initialized() {
            warn!("chart isn't initialized");
            return Err(ChartError::NotInitialized);
        }
        let config = ChartOption::from_json_str(text).inspect_err(|err| {
            warn!(error = %err, "invalid file");
        })?;
        self.push_option_changes(&config, &SetOptionMode::Merge)?;
        debug!(
            series = config.series.len(),
            y_axes = config.y_axis.len(),
            "imported chart config"
        );
        self.emit(ChartEvent::ConfigImported {
            path: path.map(Path::to_path_buf),
        });
        Ok(())
    }
}
