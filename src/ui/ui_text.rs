use std::sync::LazyLock;

pub const ICON_ROCKET: &str = "🚀";
pub const ICON_PAUSE: &str = "⏸";
pub const ICON_PLAY: &str = "▶";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_LIVE: &str = "●";

pub struct UiText {
    pub app_title: String,
    pub icon_rocket: String,

    // --- Top bar ---
    pub label_view: String,
    pub label_mode: String,
    pub button_pause: String,
    pub button_resume: String,

    // --- Banner ---
    pub banner_flashing: String,

    // --- List header ---
    pub col_token: String,
    pub col_name: String,
    pub col_price: String,
    pub col_change: String,
    pub col_volume: String,
    pub col_market_cap: String,

    // --- Status bar ---
    pub status_source: String,
    pub icon_live: String,
    pub status_tokens_live: String,
    pub status_mutations: String,
    pub status_paused: String,

    // --- Loading / empty ---
    pub ls_title: String,
    pub ls_loading: String,
    pub label_no_tokens: String,

    // --- Details window ---
    pub details_title: String,
    pub details_id: String,
    pub details_supply: String,
    pub details_last_update: String,
    pub details_leaves: String,
    pub details_fetching: String,
    pub details_unavailable: String,
    pub details_synthetic: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Pump Ticker".to_string(),
    icon_rocket: ICON_ROCKET.to_string(),

    label_view: "View:".to_string(),
    label_mode: "Market:".to_string(),
    button_pause: format!("{} Pause", ICON_PAUSE),
    button_resume: format!("{} Resume", ICON_PLAY),

    banner_flashing: format!("{} CONTAINS FLASHING LIGHTS AND ANIMATIONS {}", ICON_WARNING, ICON_WARNING),

    col_token: "Token".to_string(),
    col_name: "Name".to_string(),
    col_price: "Price".to_string(),
    col_change: "24h Change".to_string(),
    col_volume: "24h Volume".to_string(),
    col_market_cap: "Market Cap".to_string(),

    status_source: "Source:".to_string(),
    icon_live: ICON_LIVE.to_string(),
    status_tokens_live: "Tokens Live".to_string(),
    status_mutations: "Mutations:".to_string(),
    status_paused: "PAUSED".to_string(),

    ls_title: "Pump Ticker".to_string(),
    ls_loading: "Loading tokens...".to_string(),
    label_no_tokens: "No tokens".to_string(),

    details_title: "Token Details".to_string(),
    details_id: "Id".to_string(),
    details_supply: "Supply".to_string(),
    details_last_update: "Updated".to_string(),
    details_leaves: "Leaves".to_string(),
    details_fetching: "Fetching details...".to_string(),
    details_unavailable: "Details unavailable".to_string(),
    details_synthetic: "Synthetic token, no remote details".to_string(),
});
