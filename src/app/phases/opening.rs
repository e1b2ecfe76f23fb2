// app/phases/opening.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::OpeningState};

impl PhaseView for OpeningState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_opening_state(ctx, self)
    }
}
