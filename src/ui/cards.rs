use eframe::egui::{Align, Layout, ProgressBar, RichText, Ui};

use crate::{
    models::{Parlay, ParlayLeg},
    ui::{RiskColor, SportColor, UI_CONFIG, UI_TEXT, UiStyleExt},
};

/// One parlay card: badge row, title, metrics, and (optionally) the legs.
pub(crate) fn render_parlay_card(ui: &mut Ui, parlay: &Parlay, show_legs: bool) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.badge(&parlay.sport.to_string(), parlay.sport.color());
            ui.badge(
                &format!("{} {}", UI_TEXT.label_slate, parlay.slate),
                UI_CONFIG.colors.badge_neutral,
            );
            ui.badge(&parlay.risk_level.to_string(), parlay.risk_level.color());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(&parlay.total_odds)
                        .size(18.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(UI_TEXT.label_total_odds.as_str());
            });
        });

        ui.add_space(4.0);
        ui.label(
            RichText::new(&parlay.title)
                .size(16.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label(RichText::new(&parlay.notes).small().color(UI_CONFIG.colors.label));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label_subdued(format!("{}:", UI_TEXT.label_confidence));
            ui.add(
                ProgressBar::new(f32::from(parlay.confidence) / 100.0)
                    .desired_width(120.0)
                    .text(format!("{}%", parlay.confidence)),
            );
            ui.add_space(8.0);
            ui.metric(
                &UI_TEXT.label_implied,
                &format!("{:.1}%", parlay.implied_probability),
                UI_CONFIG.colors.heading,
            );
            ui.metric(
                &UI_TEXT.label_stake,
                &parlay.stake_recommendation,
                UI_CONFIG.colors.profit,
            );
            ui.metric(&UI_TEXT.label_book, &parlay.book, UI_CONFIG.colors.label);
        });

        if show_legs {
            ui.add_space(6.0);
            ui.label_subheader(format!("{} ({})", UI_TEXT.label_legs, parlay.legs.len()));
            for (index, leg) in parlay.legs.iter().enumerate() {
                render_leg(ui, index, leg);
            }
        }
    });
}

fn render_leg(ui: &mut Ui, index: usize, leg: &ParlayLeg) {
    UI_CONFIG.leg_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label_subdued(format!("{} {}", UI_TEXT.label_leg, index + 1));
            ui.label(
                RichText::new(&leg.player)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label_subdued(format!("{} · {}", leg.market, leg.line));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(&leg.kickoff);
                ui.label(
                    RichText::new(&leg.opponent)
                        .small()
                        .color(UI_CONFIG.colors.label),
                );
                ui.label_subdued(format!("{}:", UI_TEXT.label_matchup));
            });
        });

        ui.horizontal(|ui| {
            ui.metric(&UI_TEXT.label_trend, &leg.trend, UI_CONFIG.colors.label);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add(
                    ProgressBar::new(f32::from(leg.confidence) / 100.0)
                        .desired_width(80.0)
                        .text(format!("{}%", leg.confidence)),
                );
                ui.label_subdued(format!("{}:", UI_TEXT.label_leg_confidence));
            });
        });

        ui.label(
            RichText::new(&leg.rationale)
                .small()
                .italics()
                .color(UI_CONFIG.colors.text_subdued),
        );
    });
}
