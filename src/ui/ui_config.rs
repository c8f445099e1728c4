use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub row_idle: Color32,
    pub row_alt: Color32,
    pub card_fill: Color32,
    pub card_border: Color32,
    pub banner_fill: Color32,
    pub banner_text: Color32,
}

/// Row and card geometry.
#[derive(Clone, Copy, Default)]
pub struct UiLayout {
    pub row_height: f32,
    pub row_font_size: f32,
    pub header_font_size: f32,
    /// Fractions of the row width, one per column.
    pub column_weights: [f32; 6],
    pub card_width: f32,
    pub card_height: f32,
    pub card_spacing: f32,
    pub stat_height: f32,
    pub banner_duration_ms: u64,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub layout: UiLayout,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subdued: Color32::from_rgb(120, 120, 120),
        central_panel: Color32::from_rgb(10, 10, 10),
        side_panel: Color32::from_rgb(25, 25, 25),
        row_idle: Color32::from_rgb(18, 18, 18),
        row_alt: Color32::from_rgb(24, 24, 24),
        card_fill: Color32::from_rgb(20, 20, 20),
        card_border: Color32::from_rgb(60, 60, 60),
        banner_fill: Color32::from_rgb(200, 0, 0),
        banner_text: Color32::WHITE,
    },
    layout: UiLayout {
        row_height: 34.0,
        row_font_size: 14.0,
        header_font_size: 12.0,
        column_weights: [0.14, 0.26, 0.15, 0.13, 0.16, 0.16],
        card_width: 260.0,
        card_height: 170.0,
        card_spacing: 12.0,
        stat_height: 44.0,
        banner_duration_ms: 3000,
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn banner_frame(&self) -> Frame {
        Frame {
            fill: self.colors.banner_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 6),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}
