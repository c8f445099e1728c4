use chrono::Utc;

/// Monotonic frame clock. `web_time` keeps the door open for a browser build.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
}

/// Wall-clock epoch milliseconds, the unit of `TokenRecord::last_update`.
pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / TimeUtils::MS_IN_S;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m {}s", mins, secs % 60);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h {}m", hours, mins % 60);
    }
    format!("{}d {}h", hours / 24, hours % 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_picks_largest_units() {
        assert_eq!(format_duration(4_500), "4s");
        assert_eq!(format_duration(TimeUtils::MS_IN_MIN * 2 + 5_000), "2m 5s");
        assert_eq!(format_duration(TimeUtils::MS_IN_H * 3 + TimeUtils::MS_IN_MIN), "3h 1m");
        assert_eq!(format_duration(TimeUtils::MS_IN_D + TimeUtils::MS_IN_H * 2), "1d 2h");
    }

    #[test]
    fn now_is_after_2020() {
        assert!(now_timestamp_ms() > 1_577_836_800_000);
    }
}
