mod highlight;
mod screens;
mod styles;
mod token_grid;
mod token_list;
mod ui_config;
mod ui_render;
mod ui_text;

pub use highlight::{ChangedFields, FlashPhase, FlashTiming, HighlightTracker, Pulse};

pub(crate) use screens::render_loading;
pub(crate) use styles::{DirectionColor, UiStyleExt};
pub(crate) use token_grid::render_token_grid;
pub(crate) use token_list::render_token_list;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
