mod cards;
mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use cards::render_parlay_card;
pub(crate) use screens::render_bootstrap;
pub(crate) use styles::{RiskColor, SportColor, UiStyleExt};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
