use std::path::PathBuf;

use crate::option::presets::{FEATURE_EXPORT_CONFIG, FEATURE_IMPORT_CONFIG, FEATURE_SETTINGS};

/// Custom toolbox buttons the host registers with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolboxFeatureKind {
    Settings,
    ExportConfig,
    ImportConfig,
}

impl ToolboxFeatureKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Settings => FEATURE_SETTINGS,
            Self::ExportConfig => FEATURE_EXPORT_CONFIG,
            Self::ImportConfig => FEATURE_IMPORT_CONFIG,
        }
    }

    /// Maps the feature key reported by an engine click back to its kind.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        [Self::Settings, Self::ExportConfig, Self::ImportConfig]
            .into_iter()
            .find(|kind| kind.key() == key)
    }
}

/// A toolbox click together with what the embedder resolved for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolboxAction {
    OpenSettings,
    /// `destination` is a directory (the configured file name is appended)
    /// or a file path.
    ExportConfig { destination: PathBuf },
    /// `None` when the user dismissed the file picker.
    ImportConfig { file: Option<PathBuf> },
}

impl ToolboxAction {
    #[must_use]
    pub fn kind(&self) -> ToolboxFeatureKind {
        match self {
            Self::OpenSettings => ToolboxFeatureKind::Settings,
            Self::ExportConfig { .. } => ToolboxFeatureKind::ExportConfig,
            Self::ImportConfig { .. } => ToolboxFeatureKind::ImportConfig,
        }
    }
}
