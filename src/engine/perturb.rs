use rand::Rng;

use crate::{
    config::{DriftLimits, PerturbationProfile},
    models::TokenRecord,
    utils::clamp_finite,
};

/// One simulated market move. Pure: returns a new record and leaves the inputs untouched.
///
/// `anchor` is the record as it was loaded; anchored profiles perturb it instead of `current`,
/// and every profile keeps the result within `drift` of it.
pub fn perturb<R: Rng + ?Sized>(
    current: &TokenRecord,
    anchor: &TokenRecord,
    profile: &PerturbationProfile,
    drift: &DriftLimits,
    now_ms: i64,
    rng: &mut R,
) -> TokenRecord {
    let base = if profile.anchored { anchor } else { current };

    let large_move =
        profile.large_move_chance > 0.0 && rng.gen_bool(profile.large_move_chance.min(1.0));
    let cap_bound = if large_move {
        profile.market_cap_large_pct
    } else {
        profile.market_cap_pct
    };

    let price = base.price * (1.0 + symmetric(rng, profile.price_pct));
    let volume = base.volume_24h * (1.0 + symmetric(rng, profile.volume_pct));
    let market_cap = base.market_cap * (1.0 + symmetric(rng, cap_bound));
    let change = base.change_24h + symmetric(rng, profile.change_points);

    TokenRecord {
        price: within_drift(price, anchor.price, drift, drift.min_price, current.price),
        volume_24h: within_drift(volume, anchor.volume_24h, drift, 0.0, current.volume_24h),
        market_cap: within_drift(market_cap, anchor.market_cap, drift, 0.0, current.market_cap),
        change_24h: clamp_finite(
            change,
            drift.change_min,
            drift.change_max,
            current.change_24h,
        ),
        last_update: now_ms.max(current.last_update),
        ..current.clone()
    }
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    if bound > 0.0 {
        rng.gen_range(-bound..=bound)
    } else {
        0.0
    }
}

fn within_drift(value: f64, anchor: f64, drift: &DriftLimits, floor: f64, fallback: f64) -> f64 {
    let low = (anchor / drift.factor).max(floor);
    let high = (anchor * drift.factor).max(low);
    clamp_finite(value, low, high, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SIMULATION;
    use rand::{SeedableRng, rngs::StdRng};

    fn token() -> TokenRecord {
        TokenRecord {
            id: "t".to_string(),
            name: "Hyper WorksCoin".to_string(),
            symbol: "HWC".to_string(),
            price: 10.0,
            change_24h: 4.0,
            volume_24h: 50_000.0,
            market_cap: 1_000_000.0,
            last_update: 1_000,
            supply: Some(42),
        }
    }

    #[test]
    fn burst_stays_within_single_step_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = token();
        for _ in 0..1000 {
            let next = perturb(&t, &t, &SIMULATION.burst, &SIMULATION.drift, 2_000, &mut rng);
            assert!(next.price >= 9.0 - 1e-9 && next.price <= 11.0 + 1e-9);
            assert!(next.volume_24h >= 40_000.0 - 1e-6 && next.volume_24h <= 60_000.0 + 1e-6);
            assert!(next.market_cap >= 100_000.0 - 1e-6 && next.market_cap <= 2_000_000.0 + 1e-6);
            assert!((next.change_24h - 4.0).abs() <= 5.0 + 1e-9);
            assert_eq!(next.last_update, 2_000);
        }
    }

    #[test]
    fn identity_fields_survive() {
        let mut rng = StdRng::seed_from_u64(2);
        let t = token();
        let next = perturb(&t, &t, &SIMULATION.burst, &SIMULATION.drift, 5, &mut rng);
        assert_eq!(next.id, t.id);
        assert_eq!(next.name, t.name);
        assert_eq!(next.symbol, t.symbol);
        assert_eq!(next.supply, t.supply);
        // inputs are untouched
        assert_eq!(t, token());
    }

    #[test]
    fn last_update_never_goes_backwards() {
        let mut rng = StdRng::seed_from_u64(3);
        let t = token();
        let next = perturb(&t, &t, &SIMULATION.burst, &SIMULATION.drift, 10, &mut rng);
        assert_eq!(next.last_update, 1_000);
    }

    #[test]
    fn long_burst_walk_is_bounded_and_finite() {
        let mut rng = StdRng::seed_from_u64(4);
        let anchor = token();
        let drift = &SIMULATION.drift;
        let mut current = anchor.clone();
        for step in 0..20_000 {
            let next = perturb(&current, &anchor, &SIMULATION.burst, drift, 2_000 + step, &mut rng);
            assert!(next.is_finite());
            assert!(next.price >= 1.0 - 1e-9 && next.price <= 100.0 + 1e-9);
            assert!(next.price >= drift.min_price);
            assert!(next.volume_24h >= 5_000.0 - 1e-6 && next.volume_24h <= 500_000.0 + 1e-6);
            assert!(next.market_cap >= 100_000.0 - 1e-6);
            assert!(next.market_cap <= 10_000_000.0 + 1e-6);
            assert!(next.change_24h >= drift.change_min && next.change_24h <= drift.change_max);
            assert!(next.last_update >= current.last_update);
            current = next;
        }
    }

    #[test]
    fn jitter_is_anchored_not_compounding() {
        let mut rng = StdRng::seed_from_u64(5);
        let anchor = token();
        let mut current = anchor.clone();
        for _ in 0..5_000 {
            current = perturb(&current, &anchor, &SIMULATION.jitter, &SIMULATION.drift, 9, &mut rng);
            assert!((current.price / anchor.price - 1.0).abs() <= 0.025 + 1e-9);
            assert!((current.market_cap / anchor.market_cap - 1.0).abs() <= 0.025 + 1e-9);
            assert!((current.change_24h - anchor.change_24h).abs() <= 0.25 + 1e-9);
        }
    }

    #[test]
    fn non_finite_inputs_fall_back_to_current() {
        let mut rng = StdRng::seed_from_u64(6);
        let anchor = token();
        let mut current = token();
        current.change_24h = f64::NAN;
        let mut profile = SIMULATION.burst;
        profile.anchored = false;
        let next = perturb(&current, &anchor, &profile, &SIMULATION.drift, 9, &mut rng);
        // NaN change falls back to the (NaN) current, which clamp_finite pins into range.
        assert!(next.change_24h.is_finite());
    }

    #[test]
    fn price_floor_holds_for_tiny_anchors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut anchor = token();
        anchor.price = 0.00001;
        let mut current = anchor.clone();
        for _ in 0..2_000 {
            current = perturb(&current, &anchor, &SIMULATION.burst, &SIMULATION.drift, 9, &mut rng);
            assert!(current.price >= SIMULATION.drift.min_price);
            assert!(current.price > 0.0);
        }
    }
}
