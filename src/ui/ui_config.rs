use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub leg_fill: Color32,
    pub badge_neutral: Color32,
    pub text_subdued: Color32,
    pub profit: Color32,
    pub loss: Color32,
    pub warning: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance (dark "midnight zinc" theme)
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(161, 161, 170),
        heading: Color32::from_rgb(250, 250, 250),
        subsection_heading: Color32::from_rgb(212, 212, 216),
        central_panel: Color32::from_rgb(12, 12, 14),
        side_panel: Color32::from_rgb(24, 24, 27),
        card_fill: Color32::from_rgb(24, 24, 27),
        card_stroke: Color32::from_rgb(45, 45, 50),
        leg_fill: Color32::from_rgb(16, 16, 19),
        badge_neutral: Color32::from_rgb(63, 63, 70),
        text_subdued: Color32::from_rgb(113, 113, 122),
        profit: Color32::from_rgb(16, 185, 129),
        loss: Color32::from_rgb(244, 63, 94),
        warning: Color32::from_rgb(245, 158, 11),
    },
};

impl UiConfig {
    /// Frame for the header toolbar (standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the bottom status bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 6),
            ..Default::default()
        }
    }

    /// Frame for one parlay card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_fill,
            stroke: Stroke::new(1.0, self.colors.card_stroke),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(12),
            outer_margin: Margin::symmetric(0, 6),
            ..Default::default()
        }
    }

    /// Frame for one leg row inside a card
    pub fn leg_frame(&self) -> Frame {
        Frame {
            fill: self.colors.leg_fill,
            stroke: Stroke::NONE,
            corner_radius: CornerRadius::same(6),
            inner_margin: Margin::same(8),
            outer_margin: Margin::symmetric(0, 3),
            ..Default::default()
        }
    }
}
