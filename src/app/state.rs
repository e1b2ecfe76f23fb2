// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::{
    domain::{DatasetId, DateRange},
    engine::PipelineOutput,
};

pub(crate) enum AppState {
    Opening(OpeningState),
    Running(RunningState),
    Unavailable(UnavailableState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Opening(OpeningState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct OpeningState {
    /// One frame of "opening" message is drawn before the stores are touched.
    pub(crate) message_shown: bool,
}

#[derive(Clone)]
pub(crate) struct RunningState;

#[derive(Clone)]
pub(crate) struct UnavailableState {
    pub(crate) title: &'static str,
    pub(crate) message: String,
}

/// What survives a restart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum PersistedSelection {
    #[default]
    None,
    Dataset(String),
}

/// Widget state owned by the shell. `range: None` means the full available range.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    pub(crate) dataset: Option<DatasetId>,
    pub(crate) range: Option<DateRange>,
    /// Slider position while dragging, committed into `range` on release
    pub(crate) draft_range: Option<DateRange>,
}

impl Selection {
    /// Switching dataset throws away any range chosen for the previous one.
    pub(crate) fn select_dataset(&mut self, dataset: DatasetId) {
        self.dataset = Some(dataset);
        self.range = None;
        self.draft_range = None;
    }
}

/// Result of the most recent pipeline run
#[derive(Default)]
pub(crate) enum RenderOutcome {
    #[default]
    Idle,
    Ready(Box<PipelineOutput>),
    Failed {
        title: &'static str,
        message: String,
    },
}
