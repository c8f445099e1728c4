//! Perturbation engine configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Bounds for one mutation. Every delta is drawn uniformly in `[-bound, +bound]`.
#[derive(Debug, Clone, Copy)]
pub struct PerturbationProfile {
    pub price_pct: f64,
    pub volume_pct: f64,
    /// Market cap bound on a "small move".
    pub market_cap_pct: f64,
    /// Market cap bound on a "large move".
    pub market_cap_large_pct: f64,
    /// Probability that a mutation takes the large market cap branch.
    pub large_move_chance: f64,
    /// Additive percentage-point bound on `change_24h`.
    pub change_points: f64,
    /// Re-derive from the load-time anchor instead of compounding on the current value.
    pub anchored: bool,
}

/// Bounded random walk relative to each record's load-time anchor.
#[derive(Debug, Clone, Copy)]
pub struct DriftLimits {
    /// Values stay within `[anchor / factor, anchor * factor]`.
    pub factor: f64,
    pub min_price: f64,
    pub change_min: f64,
    pub change_max: f64,
}

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Burst mode: one tick every `burst_period`.
    pub burst_period: Duration,
    /// Burst mode: how many distinct records a tick touches.
    pub burst_batch: RangeInclusive<usize>,
    /// Jitter mode: per-record interval, redrawn after every firing (milliseconds).
    pub jitter_interval_ms: RangeInclusive<u64>,
}

pub struct SimulationConfig {
    pub burst: PerturbationProfile,
    pub jitter: PerturbationProfile,
    pub drift: DriftLimits,
    pub schedule: ScheduleConfig,
    /// Upper bound on how often the UI asks for a repaint while idle.
    pub repaint_interval: Duration,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    burst: PerturbationProfile {
        price_pct: 0.10,
        volume_pct: 0.20,
        market_cap_pct: 0.05,
        market_cap_large_pct: 1.00,
        large_move_chance: 0.20,
        change_points: 5.0,
        anchored: false,
    },
    jitter: PerturbationProfile {
        price_pct: 0.025,
        volume_pct: 0.025,
        market_cap_pct: 0.025,
        market_cap_large_pct: 0.025,
        large_move_chance: 0.0,
        change_points: 0.25,
        anchored: true,
    },
    drift: DriftLimits {
        factor: 10.0,
        min_price: 0.00001,
        change_min: -99.0,
        change_max: 500.0,
    },
    schedule: ScheduleConfig {
        burst_period: Duration::from_millis(1000),
        burst_batch: 1..=3,
        jitter_interval_ms: 1000..=8000,
    },
    repaint_interval: Duration::from_millis(33),
};
