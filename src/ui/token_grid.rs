use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, ScrollArea, Sense, Stroke, StrokeKind, Ui,
    Vec2,
};

use crate::{
    config::FLASH,
    engine::TickerEngine,
    models::TokenRecord,
    ui::{
        DirectionColor, HighlightTracker, Pulse, UI_CONFIG, UI_TEXT,
        styles::lerp_color,
        token_list::paint_glyph,
    },
    utils::{AppInstant, format_change, format_money, format_price, sample_keyframes},
};

/// Wrapped card grid. Returns the id of a clicked card.
pub(crate) fn render_token_grid(
    ui: &mut Ui,
    engine: &TickerEngine,
    highlights: &HighlightTracker,
    now: AppInstant,
) -> Option<String> {
    let layout = &UI_CONFIG.layout;
    let per_row = (((ui.available_width() + layout.card_spacing)
        / (layout.card_width + layout.card_spacing))
        .floor() as usize)
        .max(1);
    let tokens: Vec<&TokenRecord> = engine.tokens().collect();

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in tokens.chunks(per_row) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = layout.card_spacing;
                    for token in row {
                        let (rect, response) = ui.allocate_exact_size(
                            Vec2::new(layout.card_width, layout.card_height),
                            Sense::click(),
                        );
                        if response.clicked() {
                            clicked = Some(token.id.clone());
                        }
                        if ui.is_rect_visible(rect) {
                            let pulse = highlights.pulse(&token.id, now);
                            paint_card(ui.painter(), rect, token, pulse.as_ref());
                        }
                    }
                });
                ui.add_space(layout.card_spacing);
            }
        });
    clicked
}

fn paint_card(painter: &Painter, rect: Rect, token: &TokenRecord, pulse: Option<&Pulse>) {
    let layout = &UI_CONFIG.layout;
    let wobble = pulse.map_or(0.0, |p| {
        sample_keyframes(FLASH.card_offset_x.values, FLASH.card_offset_x.times(), p.progress)
    });
    let card = rect.translate(Vec2::new(wobble, 0.0));

    let border = match pulse {
        Some(p) => p.color(),
        None => UI_CONFIG.colors.card_border,
    };
    painter.rect_filled(card, 8.0, UI_CONFIG.colors.card_fill);
    painter.rect_stroke(card, 8.0, Stroke::new(1.5, border), StrokeKind::Inside);

    let inner = card.shrink(10.0);
    let header_height = 28.0;
    let spin = pulse.map_or(0.0, |p| p.progress * FLASH.glyph_spin_turns * std::f32::consts::TAU);
    paint_glyph(
        painter,
        Pos2::new(inner.left() + 10.0, inner.top() + header_height / 2.0),
        18.0,
        spin,
    );
    painter.text(
        Pos2::new(inner.left() + 26.0, inner.top() + header_height / 2.0),
        Align2::LEFT_CENTER,
        &token.symbol,
        FontId::monospace(16.0),
        FLASH.color_text,
    );
    painter.text(
        Pos2::new(inner.right(), inner.top() + header_height / 2.0),
        Align2::RIGHT_CENTER,
        &token.name,
        FontId::proportional(11.0),
        UI_CONFIG.colors.label,
    );

    let fields = pulse.map(|p| p.fields).unwrap_or_default();
    let stats = [
        (&UI_TEXT.col_price, format_price(token.price), fields.price),
        (&UI_TEXT.col_change, format_change(token.change_24h), fields.any()),
        (&UI_TEXT.col_volume, format_money(token.volume_24h), fields.volume),
        (&UI_TEXT.col_market_cap, format_money(token.market_cap), fields.market_cap),
    ];

    let gap = 6.0;
    let box_size = Vec2::new((inner.width() - gap) / 2.0, layout.stat_height);
    let top = inner.top() + header_height + gap;
    for (i, (label, value, changed)) in stats.into_iter().enumerate() {
        let min = Pos2::new(
            inner.left() + (i % 2) as f32 * (box_size.x + gap),
            top + (i / 2) as f32 * (box_size.y + gap),
        );
        let value_color = if i == 1 { token.color() } else { FLASH.color_text };
        paint_stat(
            painter,
            Rect::from_min_size(min, box_size),
            label,
            &value,
            value_color,
            pulse.filter(|_| changed),
        );
    }
}

fn paint_stat(
    painter: &Painter,
    rect: Rect,
    label: &str,
    value: &str,
    value_color: Color32,
    pulse: Option<&Pulse>,
) {
    let (fill, scale) = match pulse {
        Some(p) => {
            let target = if p.positive {
                FLASH.color_stat_up
            } else {
                FLASH.color_stat_down
            };
            // full colour at the start, fading back as the pulse completes
            let fill = lerp_color(target, FLASH.color_stat_idle, p.progress);
            let scale =
                sample_keyframes(FLASH.stat_scale.values, FLASH.stat_scale.times(), p.progress);
            (fill, scale)
        }
        None => (FLASH.color_stat_idle, 1.0),
    };

    let rect = Rect::from_center_size(rect.center(), rect.size() * scale);
    painter.rect_filled(rect, 4.0, fill);
    painter.text(
        Pos2::new(rect.left() + 6.0, rect.top() + 10.0),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(10.0 * scale),
        UI_CONFIG.colors.label,
    );
    painter.text(
        Pos2::new(rect.left() + 6.0, rect.bottom() - 12.0),
        Align2::LEFT_CENTER,
        value,
        FontId::monospace(13.0 * scale),
        value_color,
    );
}
