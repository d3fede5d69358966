use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{mpsc, mpsc::Receiver},
    },
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, PhaseView, RunningState},
    config::DF,
    data::{self, LoadStatus, ProgressEvent},
    engine::{FilterSelection, visible_parlays},
    models::{Parlay, ParlaySheet},
    ui::{UI_CONFIG, render_bootstrap},
    utils::AppInstant,
};

#[cfg(not(target_arch = "wasm32"))]
use std::thread;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Cosmetic toggles persist across sessions.
    pub(crate) show_leg_details: bool,

    // The filter state is deliberately session-local: a relaunch starts from
    // a clean slate (or from the CLI flags), never from yesterday's filters.
    #[serde(skip)]
    pub(crate) selection: FilterSelection,
    #[serde(skip)]
    pub(crate) show_help: bool,
    #[serde(skip)]
    pub(crate) sheet: Option<ParlaySheet>,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<anyhow::Result<ParlaySheet>>>,
    #[serde(skip)]
    pub(crate) progress_rx: Option<Receiver<ProgressEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            show_leg_details: true,
            selection: FilterSelection::default(),
            show_help: false,
            sheet: None,
            state: AppState::default(),
            data_rx: None,
            progress_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.state = AppState::Bootstrapping(BootstrapState::default());
        app.selection = FilterSelection {
            sport: args.sport,
            risk: args.risk,
            search: args.search,
        };

        let (data_tx, data_rx) = mpsc::channel();
        let (prog_tx, prog_rx) = mpsc::channel();

        app.data_rx = Some(data_rx);
        app.progress_rx = Some(prog_rx);

        #[cfg(not(target_arch = "wasm32"))]
        thread::spawn(move || {
            let _ = data_tx.send(data::fetch_sheet(Some(prog_tx)));
        });

        // The sheet is embedded, so on wasm we just decode inline.
        #[cfg(target_arch = "wasm32")]
        let _ = data_tx.send(data::fetch_sheet(Some(prog_tx)));

        app
    }

    /// The ordered subset of cards matching the current selection.
    pub(crate) fn visible(&self) -> Vec<&Parlay> {
        self.sheet
            .as_ref()
            .map(|sheet| visible_parlays(&sheet.parlays, &self.selection))
            .unwrap_or_default()
    }

    /// (visible, total) for the "Showing X of Y" readout.
    pub(crate) fn visible_count(&self) -> (usize, usize) {
        let total = self.sheet.as_ref().map_or(0, |sheet| sheet.len());
        (self.visible().len(), total)
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in the search box, don't trigger global hotkeys.
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.selection.clear();
                }
            }
            if i.key_pressed(Key::L) {
                self.show_leg_details = !self.show_leg_details;
            }
            if i.key_pressed(Key::K) || i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
        });
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        self.update_loading_progress(state);

        if state.fatal.is_none() {
            if let Some(next_state) = self.finalize_bootstrap_if_ready(state) {
                return next_state;
            }
            ctx.request_repaint();
        }

        render_bootstrap(ctx, state);
        AppState::Bootstrapping(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let start = AppInstant::now();

        self.handle_global_shortcuts(ctx);
        self.render_header_panel(ctx);
        self.render_status_panel(ctx);
        self.render_cards_panel(ctx); // Central panel must come last
        self.render_help_panel(ctx);

        let frame_time = start.elapsed().as_micros();
        if frame_time > 100_000 {
            if DF.log_performance {
                log::warn!("🐢 SLOW FRAME: {}us", frame_time);
            }
        }
    }

    fn finalize_bootstrap_if_ready(&mut self, state: &mut BootstrapState) -> Option<AppState> {
        if let Some(rx) = &self.data_rx {
            match rx.try_recv() {
                Ok(Ok(sheet)) => {
                    #[cfg(debug_assertions)]
                    if DF.log_fixture_load {
                        log::info!("Parlay sheet ready: {} cards", sheet.len());
                    }
                    self.sheet = Some(sheet);
                    return Some(AppState::Running(RunningState));
                }
                Ok(Err(err)) => {
                    log::error!("Failed to decode parlay sheet: {err:#}");
                    state.fatal = Some(format!("{err:#}"));
                }
                Err(_) => {} // still decoding
            }
        }
        None
    }

    fn update_loading_progress(&mut self, state: &mut BootstrapState) {
        if let Some(rx) = &self.progress_rx {
            while let Ok(event) = rx.try_recv() {
                state.cards.insert(event.index, (event.title, event.status));
            }
            state.total_cards = state.cards.len();
            state.completed = state
                .cards
                .values()
                .filter(|(_, s)| matches!(s, LoadStatus::Completed(_)))
                .count();
            state.failed = state
                .cards
                .values()
                .filter(|(_, s)| matches!(s, LoadStatus::Failed(_)))
                .count();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_ui_state {
            log::info!("💾 SAVE [App]: show_leg_details = {}", self.show_leg_details);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
