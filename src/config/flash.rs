//! Change-highlight (flash) configuration.

use eframe::egui::Color32;
use std::time::Duration;

/// A keyframed animation channel. `times` may be empty for evenly spaced frames.
pub struct PulseTrack {
    pub values: &'static [f32],
    pub times: &'static [f32],
}

impl PulseTrack {
    pub fn times(&self) -> Option<&'static [f32]> {
        if self.times.is_empty() { None } else { Some(self.times) }
    }
}

pub struct FlashConfig {
    /// Row: how long the pulse animation runs.
    pub row_pulse: Duration,
    /// Row: how long the record stays in `Flashing` (the "has changed" marker).
    pub row_hold: Duration,
    /// Card: pulse and hold share one duration.
    pub card_hold: Duration,

    /// Row background alpha (0..1) over the pulse.
    pub row_background: PulseTrack,
    /// Row scale factor over the pulse.
    pub row_scale: PulseTrack,
    /// Per-value scale bumps (list view).
    pub price_scale: PulseTrack,
    pub volume_scale: PulseTrack,
    pub market_cap_scale: PulseTrack,
    /// Card wobble (pixels on x) and stat box scale.
    pub card_offset_x: PulseTrack,
    pub stat_scale: PulseTrack,
    /// Glyph spin in turns.
    pub glyph_spin_turns: f32,

    // Colors
    pub color_positive: Color32,
    pub color_negative: Color32,
    pub color_price_up: Color32,
    pub color_price_down: Color32,
    pub color_volume: Color32,
    pub color_market_cap: Color32,
    pub color_text: Color32,
    pub color_stat_idle: Color32,
    pub color_stat_up: Color32,
    pub color_stat_down: Color32,
}

pub const FLASH: FlashConfig = FlashConfig {
    row_pulse: Duration::from_millis(500),
    row_hold: Duration::from_millis(700),
    card_hold: Duration::from_millis(800),

    row_background: PulseTrack {
        values: &[0.0, 0.8, 0.4, 0.0],
        times: &[0.0, 0.2, 0.5, 1.0],
    },
    row_scale: PulseTrack {
        values: &[1.0, 1.06, 0.96, 1.06, 0.98, 1.0],
        times: &[],
    },
    price_scale: PulseTrack {
        values: &[1.0, 1.5, 1.0, 1.5, 1.0, 1.5, 1.0],
        times: &[],
    },
    volume_scale: PulseTrack {
        values: &[1.0, 1.3, 1.0],
        times: &[],
    },
    market_cap_scale: PulseTrack {
        values: &[1.0, 1.2, 1.0],
        times: &[],
    },
    card_offset_x: PulseTrack {
        values: &[0.0, -3.0, 5.0, -2.0, 0.0],
        times: &[],
    },
    stat_scale: PulseTrack {
        values: &[1.0, 1.15, 0.9, 1.05, 1.0],
        times: &[0.0, 0.2, 0.4, 0.6, 1.0],
    },
    glyph_spin_turns: 2.0,

    color_positive: Color32::from_rgb(255, 255, 0),
    color_negative: Color32::from_rgb(255, 0, 0),
    color_price_up: Color32::from_rgb(34, 197, 94),
    color_price_down: Color32::from_rgb(239, 68, 68),
    color_volume: Color32::from_rgb(255, 255, 0),
    color_market_cap: Color32::from_rgb(168, 85, 247),
    color_text: Color32::WHITE,
    color_stat_idle: Color32::from_rgb(30, 30, 30),
    color_stat_up: Color32::from_rgb(0, 100, 0),
    color_stat_down: Color32::from_rgb(100, 0, 0),
};
