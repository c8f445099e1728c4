use {
    crate::{
        config::FLASH,
        models::TokenRecord,
        ui::{Pulse, UI_CONFIG},
        utils::lerp,
    },
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType,
    },
};

/// Colour keyed on the sign of the 24h change.
pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TokenRecord {
    fn color(&self) -> Color32 {
        direction_color(self.is_positive())
    }
}

impl DirectionColor for Pulse {
    fn color(&self) -> Color32 {
        direction_color(self.positive)
    }
}

pub fn direction_color(positive: bool) -> Color32 {
    if positive {
        FLASH.color_positive
    } else {
        FLASH.color_negative
    }
}

pub fn price_color(positive: bool) -> Color32 {
    if positive {
        FLASH.color_price_up
    } else {
        FLASH.color_price_down
    }
}

/// Straight per-channel blend in sRGB space.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| lerp(x as f32, y as f32, t).round() as u8;
    Color32::from_rgba_unmultiplied(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, blue bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(6.0, 4.0);
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
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().color(color));
        });
    }
}
