// ---------------------------------------------------------------------------
// Monotone linear interpolation over the cumulative curve
// ---------------------------------------------------------------------------

/// Linear interpolation of `fp` as a function of `xp` at `x`.
///
/// `xp` must be non-decreasing. Outside the observed range the result clamps
/// to the endpoint value. On a flat segment (equal adjacent `xp`) an exact
/// hit resolves to the left knot; bracketing knots are always strictly apart
/// otherwise, so the slope is finite. Near-duplicate adjacent values still
/// make the local slope numerically fragile; callers tolerate that rather
/// than treat it as an error.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    debug_assert!(!xp.is_empty());

    if x <= xp[0] {
        return fp[0];
    }
    let last = xp.len() - 1;
    if x >= xp[last] {
        return fp[last];
    }
    // First knot at or beyond x; xp[i-1] < x <= xp[i].
    let i = xp.partition_point(|&p| p < x);
    if xp[i] == x {
        return fp[i];
    }
    let t = (x - xp[i - 1]) / (xp[i] - xp[i - 1]);
    fp[i - 1] + t * (fp[i] - fp[i - 1])
}

/// Phi value at a cumulative percentile: interpolate phi as a function of
/// cumulative percent. The percentile driving direction of the Folk & Ward
/// graphic measures.
pub fn phi_at_percent(percent: f64, cumulative: &[f64], phi: &[f64]) -> f64 {
    interp(percent, cumulative, phi)
}

/// Cumulative percent at a phi value: the inverse driving direction, used
/// for the sand/silt/clay split at phi = 4 and phi = 8. Interpolates over
/// the ascending phi axis directly, not by inverting `phi_at_percent`.
pub fn percent_at_phi(phi_value: f64, phi: &[f64], cumulative: &[f64]) -> f64 {
    interp(phi_value, phi, cumulative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_point() {
        let cum = [10.0, 30.0, 70.0, 90.0, 100.0];
        let phi = [0.0, 1.0, 2.0, 3.0, 4.0];
        // 50 sits halfway between 30 and 70.
        assert!((phi_at_percent(50.0, &cum, &phi) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn exact_knot_hits_are_exact() {
        let cum = [10.0, 30.0, 70.0];
        let phi = [0.0, 1.0, 2.0];
        assert_eq!(phi_at_percent(30.0, &cum, &phi), 1.0);
    }

    #[test]
    fn clamps_outside_observed_range() {
        let cum = [10.0, 30.0, 70.0];
        let phi = [0.0, 1.0, 2.0];
        assert_eq!(phi_at_percent(5.0, &cum, &phi), 0.0);
        assert_eq!(phi_at_percent(95.0, &cum, &phi), 2.0);
    }

    #[test]
    fn flat_segment_exact_hit_takes_left_knot() {
        let cum = [10.0, 50.0, 50.0, 90.0];
        let phi = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(phi_at_percent(50.0, &cum, &phi), 1.0);
    }

    #[test]
    fn inverse_direction_over_phi_axis() {
        let phi = [0.0, 1.0, 2.0, 3.0, 4.0];
        let cum = [10.0, 30.0, 70.0, 90.0, 100.0];
        assert_eq!(percent_at_phi(4.0, &phi, &cum), 100.0);
        assert!((percent_at_phi(1.5, &phi, &cum) - 50.0).abs() < 1e-12);
        // Beyond the table: clamp, not error.
        assert_eq!(percent_at_phi(8.0, &phi, &cum), 100.0);
    }
}
