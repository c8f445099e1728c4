//! Token source configuration: synthetic ranges and remote endpoints.

use std::ops::RangeInclusive;
use std::time::Duration;

pub struct SyntheticRanges {
    pub price: RangeInclusive<f64>,
    pub price_decimals: u32,
    pub change_pct: RangeInclusive<f64>,
    pub volume: RangeInclusive<f64>,
    pub market_cap: RangeInclusive<f64>,
    /// Volume, market cap and change are quoted to this many decimals.
    pub money_decimals: u32,
    pub supply: RangeInclusive<u64>,
    pub symbol_len: usize,
}

pub struct SourceConfig {
    pub default_count: usize,
    /// Pretend network latency for the synthetic source.
    pub simulated_delay: Duration,
    pub index_url: &'static str,
    pub detail_base_url: &'static str,
    pub ranges: SyntheticRanges,
    // Company-style names: "<prefix> <suffix>Coin"
    pub name_prefixes: &'static [&'static str],
    pub name_suffixes: &'static [&'static str],
    pub name_tag: &'static str,
}

pub const SOURCE: SourceConfig = SourceConfig {
    default_count: 20,
    simulated_delay: Duration::from_millis(500),
    index_url: "https://api.pump-index.dev/v1/assets",
    detail_base_url: "https://api.pump-index.dev/v1/assets/proof",
    ranges: SyntheticRanges {
        price: 0.00001..=1000.0,
        price_decimals: 5,
        change_pct: -50.0..=50.0,
        volume: 10_000.0..=1_000_000.0,
        market_cap: 100_000.0..=10_000_000.0,
        money_decimals: 2,
        supply: 1_000_000..=1_000_000_000,
        symbol_len: 3,
    },
    name_prefixes: &[
        "Acme", "Bogus", "Cosmic", "Degen", "Electric", "Funky", "Galactic", "Hyper", "Infinite",
        "Jolly", "Kinetic", "Lunar", "Mega", "Neon", "Omega", "Pixel", "Quantum", "Rocket",
        "Stellar", "Turbo", "Ultra", "Vapor", "Wild", "Zen",
    ],
    name_suffixes: &[
        "Labs", "Group", "Holdings", "Dynamics", "Ventures", "Industries", "Systems", "Partners",
        "Works", "Collective", "Capital", "Network",
    ],
    name_tag: "Coin",
};
