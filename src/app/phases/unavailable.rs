use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::UnavailableState};

// Terminal: the stores could not be opened, nothing to retry from inside the UI.
impl PhaseView for UnavailableState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_unavailable_state(ctx, self);
        AppState::Unavailable(self.clone())
    }
}
