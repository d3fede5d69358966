use eframe::egui::{
    Align, CentralPanel, Context, Grid, Layout, ProgressBar, RichText, ScrollArea, Ui,
};

use crate::{
    app::BootstrapState,
    data::LoadStatus,
    ui::{UI_CONFIG, UI_TEXT},
};

/// Splash shown while the sheet decodes. Lists each card with its status.
pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new(&UI_TEXT.bs_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(
                RichText::new(&UI_TEXT.bs_subtitle)
                    .italics()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(20.0);

            if let Some(message) = &state.fatal {
                ui.label(
                    RichText::new(format!("{} {message}", UI_TEXT.bs_failed))
                        .color(UI_CONFIG.colors.loss),
                );
                return;
            }

            let total = state.total_cards;
            let done = state.completed + state.failed;
            let progress = if total > 0 {
                done as f32 / total as f32
            } else {
                0.0
            };
            ui.add(
                ProgressBar::new(progress)
                    .animate(true)
                    .text(format!("{} {done}/{total}", UI_TEXT.bs_progress)),
            );
            ui.add_space(20.0);
        });

        if state.fatal.is_none() {
            render_loading_grid(ui, state);
        }
    });
}

fn render_loading_grid(ui: &mut Ui, state: &BootstrapState) {
    ScrollArea::vertical().show(ui, |ui| {
        Grid::new("loading_grid")
            .striped(true)
            .spacing([20.0, 10.0])
            .min_col_width(250.0)
            .show(ui, |ui| {
                for (title, status) in state.cards.values() {
                    let (status_text, status_color) = match status {
                        LoadStatus::Pending => ("-".to_string(), UI_CONFIG.colors.text_subdued),
                        LoadStatus::Completed(legs) => {
                            (format!("{legs} legs"), UI_CONFIG.colors.profit)
                        }
                        LoadStatus::Failed(reason) => (reason.clone(), UI_CONFIG.colors.loss),
                    };

                    ui.horizontal(|ui| {
                        ui.set_min_width(240.0);
                        ui.label(RichText::new(title).strong().color(UI_CONFIG.colors.label));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(RichText::new(status_text).color(status_color));
                        });
                    });
                    ui.end_row();
                }
            });
    });
}
