use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, ScrollArea, Sense, Shape, Ui, Vec2, emath::Rot2,
    epaint::TextShape,
};

use crate::{
    config::FLASH,
    engine::TickerEngine,
    models::TokenRecord,
    ui::{
        DirectionColor, HighlightTracker, Pulse, UI_CONFIG, UI_TEXT,
        styles::{lerp_color, price_color},
    },
    utils::{AppInstant, format_change, format_money, format_price, sample_keyframes},
};

/// Draws the header and one painted row per token. Returns the id of a clicked row.
pub(crate) fn render_token_list(
    ui: &mut Ui,
    engine: &TickerEngine,
    highlights: &HighlightTracker,
    now: AppInstant,
) -> Option<String> {
    let layout = &UI_CONFIG.layout;
    let width = ui.available_width();

    let (header_rect, _) = ui.allocate_exact_size(
        Vec2::new(width, layout.row_height * 0.8),
        Sense::hover(),
    );
    let headers = [
        &UI_TEXT.col_token,
        &UI_TEXT.col_name,
        &UI_TEXT.col_price,
        &UI_TEXT.col_change,
        &UI_TEXT.col_volume,
        &UI_TEXT.col_market_cap,
    ];
    let painter = ui.painter();
    for (cell, title) in columns(header_rect).into_iter().zip(headers) {
        painter.text(
            cell.left_center(),
            Align2::LEFT_CENTER,
            title,
            FontId::proportional(layout.header_font_size),
            UI_CONFIG.colors.label,
        );
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, token) in engine.tokens().enumerate() {
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(width, layout.row_height), Sense::click());
                if response.clicked() {
                    clicked = Some(token.id.clone());
                }
                if ui.is_rect_visible(rect) {
                    let pulse = highlights.pulse(&token.id, now);
                    paint_row(ui.painter(), rect, index, token, pulse.as_ref());
                }
            }
        });
    clicked
}

fn columns(row: Rect) -> [Rect; 6] {
    let weights = UI_CONFIG.layout.column_weights;
    let total: f32 = weights.iter().sum();
    let mut x = row.left() + 8.0;
    let usable = row.width() - 16.0;
    weights.map(|w| {
        let cell_width = usable * w / total;
        let cell = Rect::from_min_size(Pos2::new(x, row.top()), Vec2::new(cell_width, row.height()));
        x += cell_width;
        cell
    })
}

fn paint_row(painter: &Painter, rect: Rect, index: usize, token: &TokenRecord, pulse: Option<&Pulse>) {
    let layout = &UI_CONFIG.layout;
    let base_fill = if index % 2 == 0 {
        UI_CONFIG.colors.row_idle
    } else {
        UI_CONFIG.colors.row_alt
    };

    let (fill, scale) = match pulse {
        Some(p) => {
            let alpha = sample_keyframes(
                FLASH.row_background.values,
                FLASH.row_background.times(),
                p.progress,
            );
            let scale = sample_keyframes(FLASH.row_scale.values, FLASH.row_scale.times(), p.progress);
            (lerp_color(base_fill, p.color(), alpha), scale)
        }
        None => (base_fill, 1.0),
    };
    let row_rect = Rect::from_center_size(rect.center(), rect.size() * scale);
    painter.rect_filled(row_rect.shrink(1.0), 4.0, fill);

    let [symbol, name, price, change, volume, mcap] = columns(row_rect);
    let font = layout.row_font_size * scale;
    let text = FLASH.color_text;

    let spin = pulse.map_or(0.0, |p| p.progress * FLASH.glyph_spin_turns * std::f32::consts::TAU);
    let glyph_center = Pos2::new(symbol.left() + font * 0.6, symbol.center().y);
    paint_glyph(painter, glyph_center, font, spin);
    painter.text(
        Pos2::new(symbol.left() + font * 1.5, symbol.center().y),
        Align2::LEFT_CENTER,
        &token.symbol,
        FontId::monospace(font),
        text,
    );
    painter.text(name.left_center(), Align2::LEFT_CENTER, &token.name, FontId::proportional(font), text);

    let fields = pulse.map(|p| p.fields).unwrap_or_default();
    let positive = token.is_positive();

    let (price_font, price_col) = match pulse {
        Some(p) if fields.price => (
            font * sample_keyframes(FLASH.price_scale.values, FLASH.price_scale.times(), p.progress),
            price_color(positive),
        ),
        _ => (font, text),
    };
    painter.text(
        price.left_center(),
        Align2::LEFT_CENTER,
        format_price(token.price),
        FontId::monospace(price_font),
        price_col,
    );

    painter.text(
        change.left_center(),
        Align2::LEFT_CENTER,
        format_change(token.change_24h),
        FontId::monospace(font),
        token.color(),
    );

    let (volume_font, volume_col) = match pulse {
        Some(p) if fields.volume => (
            font * sample_keyframes(FLASH.volume_scale.values, FLASH.volume_scale.times(), p.progress),
            FLASH.color_volume,
        ),
        _ => (font, text),
    };
    painter.text(
        volume.left_center(),
        Align2::LEFT_CENTER,
        format_money(token.volume_24h),
        FontId::monospace(volume_font),
        volume_col,
    );

    let (mcap_font, mcap_col) = match pulse {
        Some(p) if fields.market_cap => (
            font * sample_keyframes(
                FLASH.market_cap_scale.values,
                FLASH.market_cap_scale.times(),
                p.progress,
            ),
            FLASH.color_market_cap,
        ),
        _ => (font, text),
    };
    painter.text(
        mcap.left_center(),
        Align2::LEFT_CENTER,
        format_money(token.market_cap),
        FontId::monospace(mcap_font),
        mcap_col,
    );
}

/// The rocket, rotated `angle` radians about `center`.
pub(crate) fn paint_glyph(painter: &Painter, center: Pos2, size: f32, angle: f32) {
    let galley = painter.layout_no_wrap(
        UI_TEXT.icon_rocket.clone(),
        FontId::proportional(size),
        Color32::WHITE,
    );
    let half = galley.size() / 2.0;
    let pos = center - Rot2::from_angle(angle) * half;
    painter.add(Shape::Text(
        TextShape::new(pos, galley, Color32::WHITE).with_angle(angle),
    ));
}
