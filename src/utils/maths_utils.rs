/// Linear interpolation between `a` and `b`. `t` is not clamped.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Round to a fixed number of decimal places (used to mimic quoted precision).
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Clamp `value` into `[min, max]`, returning `fallback` when the input is NaN or infinite.
/// A non-finite fallback becomes the in-range value closest to zero.
pub(crate) fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        return value.clamp(min, max);
    }
    if fallback.is_finite() {
        fallback.clamp(min, max)
    } else {
        0.0f64.clamp(min, max)
    }
}

/// Sample a keyframe track at normalised time `t` (0..=1).
///
/// `times` gives the position of each keyframe; when `None` the frames are spaced evenly.
/// Mismatched `times` fall back to even spacing as well.
pub(crate) fn sample_keyframes(values: &[f32], times: Option<&[f32]>, t: f32) -> f32 {
    match values.len() {
        0 => return 0.0,
        1 => return values[0],
        _ => {}
    }
    let t = t.clamp(0.0, 1.0);
    let last = values.len() - 1;
    let time_at = |i: usize| -> f32 {
        match times {
            Some(ts) if ts.len() == values.len() => ts[i],
            _ => i as f32 / last as f32,
        }
    };

    for i in 0..last {
        let (t0, t1) = (time_at(i), time_at(i + 1));
        if t <= t1 {
            let span = t1 - t0;
            let local = if span > f32::EPSILON { (t - t0) / span } else { 1.0 };
            return lerp(values[i], values[i + 1], local.clamp(0.0, 1.0));
        }
    }
    values[last]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_hit_endpoints_and_midpoints() {
        let track = [1.0, 1.3, 0.75, 1.0];
        assert_eq!(sample_keyframes(&track, None, 0.0), 1.0);
        assert_eq!(sample_keyframes(&track, None, 1.0), 1.0);
        let third = sample_keyframes(&track, None, 1.0 / 3.0);
        assert!((third - 1.3).abs() < 1e-5);
    }

    #[test]
    fn keyframes_respect_explicit_times() {
        let track = [0.0, 0.8, 0.4, 0.0];
        let times = [0.0, 0.2, 0.5, 1.0];
        assert!((sample_keyframes(&track, Some(&times), 0.2) - 0.8).abs() < 1e-5);
        assert!((sample_keyframes(&track, Some(&times), 0.1) - 0.4).abs() < 1e-5);
        assert!((sample_keyframes(&track, Some(&times), 0.75) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn keyframes_clamp_out_of_range_time() {
        let track = [2.0, 4.0];
        assert_eq!(sample_keyframes(&track, None, -1.0), 2.0);
        assert_eq!(sample_keyframes(&track, None, 3.0), 4.0);
        assert_eq!(sample_keyframes(&[], None, 0.5), 0.0);
    }

    #[test]
    fn clamp_finite_replaces_nan() {
        assert_eq!(clamp_finite(f64::NAN, 0.0, 10.0, 3.0), 3.0);
        assert_eq!(clamp_finite(f64::INFINITY, 0.0, 10.0, 3.0), 3.0);
        assert_eq!(clamp_finite(42.0, 0.0, 10.0, 3.0), 10.0);
        assert_eq!(clamp_finite(-1.0, 0.0, 10.0, 3.0), 0.0);
        assert_eq!(clamp_finite(f64::NAN, -5.0, 5.0, f64::NAN), 0.0);
        assert_eq!(clamp_finite(f64::NAN, 2.0, 5.0, f64::NEG_INFINITY), 2.0);
    }

    #[test]
    fn round_to_decimal_places() {
        assert_eq!(round_to(1.234567, 2), 1.23);
        assert_eq!(round_to(0.000014, 5), 0.00001);
    }
}
