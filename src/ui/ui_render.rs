use {
    eframe::egui::{
        Align, CentralPanel, Context, FontId, Layout, RichText, TopBottomPanel, Window,
    },
    strum::IntoEnumIterator,
};

use crate::{
    app::App,
    config::{FLASH, SimulationMode, ViewMode},
    ui::{
        DirectionColor, UI_CONFIG, UI_TEXT, UiStyleExt, render_token_grid, render_token_list,
    },
    utils::{
        AppInstant, format_change, format_duration, format_money, format_price, now_timestamp_ms,
        with_thousands,
    },
};

const DETAIL_PREVIEW_CHARS: usize = 160;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context, now: AppInstant) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} {}", UI_TEXT.icon_rocket, UI_TEXT.app_title))
                            .strong()
                            .size(18.0)
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    ui.label(&UI_TEXT.label_view);
                    for view in ViewMode::iter() {
                        let selected = self.view_mode == view;
                        if ui
                            .interactive_label(
                                &view.to_string(),
                                selected,
                                UI_CONFIG.colors.label,
                                FontId::proportional(13.0),
                            )
                            .clicked()
                        {
                            self.set_view_mode(view, now);
                        }
                    }
                    ui.separator();

                    ui.label(&UI_TEXT.label_mode);
                    for mode in SimulationMode::iter() {
                        let selected = self.sim_mode == mode;
                        if ui
                            .interactive_label(
                                &mode.to_string(),
                                selected,
                                UI_CONFIG.colors.label,
                                FontId::proportional(13.0),
                            )
                            .clicked()
                        {
                            self.set_sim_mode(mode, now);
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let text = if self.is_paused() {
                            &UI_TEXT.button_resume
                        } else {
                            &UI_TEXT.button_pause
                        };
                        if ui.button(text.as_str()).clicked() {
                            self.toggle_pause(now);
                        }
                    });
                });
            });
    }

    pub(crate) fn render_warning_banner(&self, ctx: &Context) {
        TopBottomPanel::top("warning_banner")
            .frame(UI_CONFIG.banner_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.banner_flashing)
                            .strong()
                            .size(16.0)
                            .color(UI_CONFIG.colors.banner_text),
                    );
                });
            });
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let source = if self.source_name.is_empty() {
                        self.source_kind.to_string()
                    } else {
                        self.source_name.to_string()
                    };
                    ui.metric(&UI_TEXT.status_source, &source, FLASH.color_text);
                    ui.separator();

                    let live = self.engine.as_ref().map_or(0, |e| e.len());
                    ui.label(
                        RichText::new(format!(
                            "{} {} {}",
                            UI_TEXT.icon_live, live, UI_TEXT.status_tokens_live
                        ))
                            .color(FLASH.color_price_up),
                    );
                    ui.separator();

                    let mutations = self.engine.as_ref().map_or(0, |e| e.mutation_count());
                    ui.metric(
                        &UI_TEXT.status_mutations,
                        &with_thousands(mutations as i64),
                        FLASH.color_text,
                    );
                    ui.separator();
                    ui.label_subdued(format!("{} / {}", self.view_mode, self.sim_mode));

                    if self.is_paused() {
                        ui.separator();
                        ui.label(
                            RichText::new(&UI_TEXT.status_paused)
                                .strong()
                                .color(FLASH.color_negative),
                        );
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context, now: AppInstant) {
        let clicked = CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let engine = self.engine.as_ref()?;
                if engine.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(&UI_TEXT.label_no_tokens)
                                .size(20.0)
                                .color(UI_CONFIG.colors.subdued),
                        );
                    });
                    return None;
                }
                match self.view_mode {
                    ViewMode::List => render_token_list(ui, engine, &self.highlights, now),
                    ViewMode::Grid => render_token_grid(ui, engine, &self.highlights, now),
                }
            })
            .inner;

        if let Some(id) = clicked {
            self.open_details(id);
        }
    }

    pub(crate) fn render_details_window(&mut self, ctx: &Context) {
        let Some(details) = &self.details else {
            return;
        };
        let token = self
            .engine
            .as_ref()
            .and_then(|e| e.get(&details.id))
            .cloned();

        let mut open = true;
        Window::new(&UI_TEXT.details_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                match &token {
                    Some(t) => {
                        ui.heading(
                            RichText::new(format!("{} {}  {}", UI_TEXT.icon_rocket, t.symbol, t.name))
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.add_space(4.0);
                        ui.metric(&UI_TEXT.details_id, &t.id, UI_CONFIG.colors.label);
                        ui.metric(&UI_TEXT.col_price, &format_price(t.price), FLASH.color_text);
                        ui.metric(&UI_TEXT.col_change, &format_change(t.change_24h), t.color());
                        ui.metric(&UI_TEXT.col_volume, &format_money(t.volume_24h), FLASH.color_volume);
                        ui.metric(
                            &UI_TEXT.col_market_cap,
                            &format_money(t.market_cap),
                            FLASH.color_market_cap,
                        );
                        if let Some(supply) = t.supply {
                            ui.metric(
                                &UI_TEXT.details_supply,
                                &with_thousands(supply.min(i64::MAX as u64) as i64),
                                FLASH.color_text,
                            );
                        }
                        let age = (now_timestamp_ms() - t.last_update).max(0);
                        ui.metric(
                            &UI_TEXT.details_last_update,
                            &format!("{} ago", format_duration(age)),
                            UI_CONFIG.colors.label,
                        );
                    }
                    None => {
                        ui.label_subdued(&UI_TEXT.label_no_tokens);
                    }
                }

                ui.separator();
                match &details.request {
                    None => ui.label_subdued(&UI_TEXT.details_synthetic),
                    Some(promise) => match promise.ready() {
                        None => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(&UI_TEXT.details_fetching);
                            });
                        }
                        Some(Ok(fetched)) => {
                            let leaves = match fetched.leaf_count() {
                                Some(n) => with_thousands(n.min(i64::MAX as u64) as i64),
                                None => fetched
                                    .leaves
                                    .to_string()
                                    .chars()
                                    .take(DETAIL_PREVIEW_CHARS)
                                    .collect(),
                            };
                            ui.metric(&UI_TEXT.details_leaves, &leaves, FLASH.color_text);
                        }
                        Some(Err(_)) => {
                            ui.label(
                                RichText::new(&UI_TEXT.details_unavailable)
                                    .color(FLASH.color_negative),
                            );
                        }
                    },
                }
            });

        if !open {
            self.details = None;
        }
    }
}
