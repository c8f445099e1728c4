mod format_utils;
mod maths_utils;
mod time_utils;

pub use format_utils::{format_change, format_money, format_price, with_thousands};
pub use time_utils::{AppInstant, TimeUtils, format_duration, now_timestamp_ms};

pub(crate) use maths_utils::{clamp_finite, lerp, round_to, sample_keyframes};
