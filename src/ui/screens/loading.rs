use {
    crate::{
        app::LoadingState,
        config::{FLASH, SourceKind},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
        utils::format_duration,
    },
    eframe::egui::{CentralPanel, Context, RichText, Spinner},
};

pub(crate) fn render_loading(ctx: &Context, state: &LoadingState, source: SourceKind) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading(
                    RichText::new(format!("{} {}", UI_TEXT.icon_rocket, UI_TEXT.ls_title))
                        .size(28.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(20.0);
                ui.add(Spinner::new().size(32.0).color(FLASH.color_positive));
                ui.add_space(10.0);
                ui.label(RichText::new(&UI_TEXT.ls_loading).italics().color(FLASH.color_text));
                let waited = state.started.elapsed().as_millis() as i64;
                ui.label_subdued(format!("{} source · {}", source, format_duration(waited)));
            });
        });
}
