use eframe::egui::{
    Align, CentralPanel, Context, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel, Ui,
    Window,
};
use strum::IntoEnumIterator;

use crate::{
    app::App,
    models::{RiskLevel, Sport},
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt, render_parlay_card},
};

#[cfg(debug_assertions)]
use crate::config::DF;

impl App {
    /// Top panel: date line, title, blurb, and the filter row.
    pub(crate) fn render_header_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("header_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.add_space(4.0);
                if let Some(sheet) = &self.sheet {
                    ui.label_subdued(sheet.header_date());
                }
                ui.heading(
                    RichText::new(&UI_TEXT.header_title)
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(
                    RichText::new(&UI_TEXT.header_blurb)
                        .small()
                        .color(UI_CONFIG.colors.label),
                );
                ui.add_space(8.0);
                self.render_filter_row(ui);
                ui.add_space(4.0);
            });
    }

    fn render_filter_row(&mut self, ui: &mut Ui) {
        let before = self.selection.clone();

        ui.horizontal_wrapped(|ui| {
            if ui
                .filter_chip(&UI_TEXT.chip_all_sports, self.selection.sport.is_none())
                .clicked()
            {
                self.selection.sport = None;
            }
            for sport in Sport::iter() {
                let is_selected = self.selection.sport == Some(sport);
                if ui.filter_chip(&sport.to_string(), is_selected).clicked() {
                    // Re-clicking the active chip falls back to "all".
                    self.selection.sport = if is_selected { None } else { Some(sport) };
                }
            }

            ui.separator();

            if ui
                .filter_chip(&UI_TEXT.chip_all_risk, self.selection.risk.is_none())
                .clicked()
            {
                self.selection.risk = None;
            }
            for risk in RiskLevel::iter() {
                let is_selected = self.selection.risk == Some(risk);
                if ui.filter_chip(&risk.to_string(), is_selected).clicked() {
                    self.selection.risk = if is_selected { None } else { Some(risk) };
                }
            }

            ui.separator();

            ui.add(
                TextEdit::singleline(&mut self.selection.search)
                    .hint_text(UI_TEXT.search_hint.as_str())
                    .desired_width(240.0),
            );
            if !self.selection.search.is_empty()
                && ui.small_button(UI_TEXT.label_clear.as_str()).clicked()
            {
                self.selection.search.clear();
            }
        });

        if self.selection != before {
            #[cfg(debug_assertions)]
            if DF.log_filter_changes {
                let (visible, total) = self.visible_count();
                log::info!(
                    "FILTER CHANGED: {:?} -> {visible}/{total} visible",
                    self.selection
                );
            }
        }
    }

    /// Bottom panel: responsible-wagering footer.
    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&UI_TEXT.footer)
                        .small()
                        .color(UI_CONFIG.colors.text_subdued),
                );
            });
    }

    /// Central panel: the "Showing X of Y" readout and the card list.
    pub(crate) fn render_cards_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let (visible_count, total) = self.visible_count();

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label_subheader(UI_TEXT.section_featured.as_str());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label_subdued(format!(
                        "{} {visible_count} {} {total} {}",
                        UI_TEXT.count_showing, UI_TEXT.count_of, UI_TEXT.count_cards
                    ));
                });
            });
            ui.add_space(4.0);

            if visible_count == 0 {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.empty_state)
                            .italics()
                            .color(UI_CONFIG.colors.text_subdued),
                    );
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for parlay in self.visible() {
                        render_parlay_card(ui, parlay, self.show_leg_details);
                    }
                    ui.add_space(12.0);
                });
        });
    }

    pub(crate) fn render_help_panel(&mut self, ctx: &Context) {
        if !self.show_help {
            return;
        }

        Window::new(UI_TEXT.help_title.as_str())
            .collapsible(false)
            .resizable(false)
            .open(&mut self.show_help)
            .show(ctx, |ui| {
                for (key, action) in UI_TEXT.help_rows {
                    ui.metric(key, action, UI_CONFIG.colors.label);
                }
            });
    }
}
