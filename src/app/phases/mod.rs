pub(super) mod opening;
pub(super) mod phase_view;
pub(super) mod running;
pub(super) mod unavailable;

pub(crate) use phase_view::PhaseView;
