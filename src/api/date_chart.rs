use tracing::{debug, warn};

use crate::core::DateSeries;
use crate::error::{ChartError, ChartResult};
use crate::mapping::{
    create_dataset_sources, create_series_options, create_y_axis_options, validate_series_batch,
};
use crate::option::{ChartOption, ComponentKey, SetOptionMode};
use crate::settings::SettingsDialog;

use super::{ChartEvent, ChartInstance, ChartObserver, DateChartConfig, ToolboxAction};

/// Chart host: owns the engine handle, the caller's series and the settings
/// dialog, and pushes option updates to the engine.
pub struct DateChart<I: ChartInstance> {
    pub(super) config: DateChartConfig,
    pub(super) series: Vec<DateSeries>,
    pub(super) instance: Option<I>,
    pub(super) dialog: SettingsDialog,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<I: ChartInstance> DateChart<I> {
    pub fn new(config: DateChartConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            series: Vec::new(),
            instance: None,
            dialog: SettingsDialog::new(),
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DateChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &[DateSeries] {
        &self.series
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.instance.is_some()
    }

    #[must_use]
    pub fn instance(&self) -> Option<&I> {
        self.instance.as_ref()
    }

    pub fn add_observer(&mut self, observer: Box<dyn ChartObserver>) {
        debug!(observer = observer.id(), "register chart observer");
        self.observers.push(observer);
    }

    /// Adopts the engine handle, applies the base option and replays the
    /// current series.
    pub fn on_chart_init(&mut self, mut instance: I) -> ChartResult<()> {
        instance.set_option(&ChartOption::initial(), &SetOptionMode::NotMerge)?;
        self.instance = Some(instance);
        self.emit(ChartEvent::Initialized);
        self.refresh_series()
    }

    /// Live option snapshot from the engine.
    pub fn current_option(&self) -> ChartResult<ChartOption> {
        match self.instance.as_ref() {
            Some(instance) => Ok(instance.get_option()),
            None => {
                warn!("chart isn't initialized");
                Err(ChartError::NotInitialized)
            }
        }
    }

    /// Replaces the caller series and re-maps them onto the engine.
    ///
    /// The batch is stored even before the engine exists; it is applied on
    /// `on_chart_init`. An invalid batch is rejected and the previous one kept.
    pub fn on_change_series(&mut self, series: Vec<DateSeries>) -> ChartResult<()> {
        if let Err(err) = validate_series_batch(&series) {
            warn!(error = %err, "rejecting series batch");
            return Err(err);
        }
        self.series = series;
        self.refresh_series()
    }

    /// Maps the stored series against the live snapshot and pushes
    /// `{ dataset, series, yAxis }`.
    pub fn refresh_series(&mut self) -> ChartResult<()> {
        let snapshot = self.current_option()?;

        let patch = ChartOption {
            dataset: create_dataset_sources(&self.series),
            series: create_series_options(
                &self.series,
                &snapshot.series,
                self.config.color_scheme,
            ),
            y_axis: create_y_axis_options(
                &self.series,
                &snapshot.y_axis,
                self.config.y_axis_gap_px,
                self.config.axis_merge_policy,
            ),
            ..ChartOption::default()
        };
        let series = patch.series.len();
        let y_axes = patch.y_axis.len();
        debug!(series, y_axes, "mapped series batch");

        self.push_option_changes(
            &patch,
            &SetOptionMode::replace([
                ComponentKey::Dataset,
                ComponentKey::Series,
                ComponentKey::YAxis,
            ]),
        )?;
        self.emit(ChartEvent::SeriesMapped { series, y_axes });
        Ok(())
    }

    /// Runs a toolbox button.
    pub fn handle_toolbox(&mut self, action: ToolboxAction) -> ChartResult<()> {
        debug!(feature = action.kind().key(), "toolbox action");
        match action {
            ToolboxAction::OpenSettings => self.show_settings().map(|_| ()),
            ToolboxAction::ExportConfig { destination } => {
                self.export_config_to_path(&destination).map(|_| ())
            }
            ToolboxAction::ImportConfig { file } => self.import_config_from_path(file.as_deref()),
        }
    }

    pub(super) fn push_option_changes(
        &mut self,
        patch: &ChartOption,
        mode: &SetOptionMode,
    ) -> ChartResult<()> {
        let Some(instance) = self.instance.as_mut() else {
            warn!("chart isn't initialized");
            return Err(ChartError::NotInitialized);
        };
        instance.set_option(patch, mode).inspect_err(|err| {
            warn!(error = %err, "engine rejected option update");
        })
    }

    pub(super) fn emit(&mut self, event: ChartEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
