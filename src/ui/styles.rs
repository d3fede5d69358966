use eframe::egui::{
    Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
    WidgetInfo, WidgetType,
};

use crate::{
    models::{RiskLevel, Sport},
    ui::ui_config::UI_CONFIG,
};

/// Accent color per league, used for sport badges and chips.
pub trait SportColor {
    fn color(&self) -> Color32;
}

impl SportColor for Sport {
    fn color(&self) -> Color32 {
        match self {
            Sport::Nba => Color32::from_rgb(129, 140, 248),
            Sport::Nfl => Color32::from_rgb(251, 146, 60),
            Sport::Nhl => Color32::from_rgb(56, 189, 248),
        }
    }
}

/// Conservative reads green, aggressive reads red.
pub trait RiskColor {
    fn color(&self) -> Color32;
}

impl RiskColor for RiskLevel {
    fn color(&self) -> Color32 {
        match self {
            RiskLevel::Conservative => UI_CONFIG.colors.profit,
            RiskLevel::Balanced => Color32::from_rgb(59, 130, 246),
            RiskLevel::Aggressive => UI_CONFIG.colors.loss,
        }
    }
}

/// Extension trait for common widget recipes.
pub trait UiStyleExt {
    /// Pill-shaped toggle used for the sport and risk filter rows.
    fn filter_chip(&mut self, text: &str, is_selected: bool) -> Response;

    /// Small colored tag (league, slate, risk band).
    fn badge(&mut self, text: &str, color: Color32);

    /// "LABEL: value" pair with a subdued label and a colored value.
    fn metric(&mut self, label: &str, value: &str, value_color: Color32);

    fn label_subdued(&mut self, text: impl Into<String>);

    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn filter_chip(&mut self, text: &str, is_selected: bool) -> Response {
        let padding = Vec2::new(8.0, 4.0);
        let font_id = FontId::proportional(12.0);
        let idle_color = UI_CONFIG.colors.label;

        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (visuals.selection.bg_fill, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, UI_CONFIG.colors.heading)
            } else {
                (
                    UI_CONFIG.colors.badge_neutral.linear_multiply(0.4),
                    idle_color,
                )
            };

            self.painter().rect(
                rect,
                CornerRadius::same(10),
                bg_fill,
                Stroke::NONE,
                StrokeKind::Inside,
            );
            self.painter().galley(rect.left_top() + padding, galley, text_color);
        }

        response
    }

    fn badge(&mut self, text: &str, color: Color32) {
        self.label(
            RichText::new(format!(" {text} "))
                .small()
                .strong()
                .color(Color32::BLACK)
                .background_color(color),
        );
    }

    fn metric(&mut self, label: &str, value: &str, value_color: Color32) {
        self.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{label}:"))
                    .small()
                    .color(UI_CONFIG.colors.text_subdued),
            );
            ui.label(RichText::new(value).small().strong().color(value_color));
        });
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .small()
                .color(UI_CONFIG.colors.text_subdued),
        );
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .size(14.0)
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }
}
