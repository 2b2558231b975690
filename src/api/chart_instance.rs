use tracing::trace;

use crate::error::ChartResult;
use crate::option::{ChartOption, SetOptionMode, merge_chart_option};

/// Handle to the external charting engine.
///
/// The engine owns rendering; the host only reads and writes its declarative
/// option document through this contract.
pub trait ChartInstance {
    /// Snapshot of the option document currently applied.
    fn get_option(&self) -> ChartOption;

    fn set_option(&mut self, patch: &ChartOption, mode: &SetOptionMode) -> ChartResult<()>;
}

/// Headless engine that keeps the option document in memory.
///
/// Used by tests and by embedders that drive a renderer from snapshots.
#[derive(Debug, Default, Clone)]
pub struct MemoryChartInstance {
    option: ChartOption,
    pub applied_updates: usize,
}

impl MemoryChartInstance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_option(option: ChartOption) -> Self {
        Self {
            option,
            applied_updates: 0,
        }
    }

    #[must_use]
    pub fn option(&self) -> &ChartOption {
        &self.option
    }
}

impl ChartInstance for MemoryChartInstance {
    fn get_option(&self) -> ChartOption {
        self.option.clone()
    }

    fn set_option(&mut self, patch: &ChartOption, mode: &SetOptionMode) -> ChartResult<()> {
        self.option = merge_chart_option(&self.option, patch, mode)?;
        self.applied_updates += 1;
        trace!(updates = self.applied_updates, ?mode, "memory instance option applied");
        Ok(())
    }
}
