use eframe::egui::Context;

use crate::app::{App, PhaseView, state::AppState, state::BootstrapState};

impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_bootstrap_state(ctx, self)
    }
}
