mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{
    AppState, OpeningState, PersistedSelection, RenderOutcome, RunningState, Selection,
    UnavailableState,
};

pub use root::App;
