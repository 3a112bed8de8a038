//! Mathematical utility functions and constants shared by the estimators.
//!
//! Log-space reductions, compensated summation, probability normalisation and the
//! small amount of circular statistics the von Mises M-step needs.

/// Numerical constants used across the crate.
pub mod constants {
    /// 2π
    pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

    /// ln(2π)
    pub const LN_TWO_PI: f64 = 1.8378770664093454835606594728112;

    /// Euler–Mascheroni constant γ
    pub const EULER_GAMMA: f64 = 0.5772156649015328606065120900824;

    /// ln 2
    pub const LN_2: f64 = std::f64::consts::LN_2;

    /// Machine epsilon used as a relative stopping criterion in series
    pub const MACHEP: f64 = 1.11022302462515654042e-16;

    /// Posterior mass below which a state or component is treated as empty
    pub const MIN_POSTERIOR_MASS: f64 = 1e-10;

    /// Relative log-likelihood drop an EM step may show before it is rejected
    pub const MAX_RELATIVE_DECREASE: f64 = 1e-9;
}

/// Safe comparison for floating point values (NaN sorts last).
pub fn float_total_cmp(a: &f64, b: &f64) -> std::cmp::Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal),
    }
}

/// Kahan compensated summation.
///
/// # Complexity
/// - Time: O(n)
/// - Error: O(ε) vs O(nε) for naive summation
pub fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut c = 0.0;

    for &value in values {
        let y = value - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum
}

/// Numerically stable `ln(Σ exp(v_i))`.
///
/// Returns `-inf` for an empty slice or when every entry is `-inf`.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if max == f64::INFINITY {
        return f64::INFINITY;
    }

    let sum: f64 = values.iter().map(|&v| (v - max).exp()).sum();
    max + sum.ln()
}

/// Index of the largest entry; ties go to the lowest index.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best_value = v;
            best = i;
        }
    }
    best
}

/// Normalises `values` in place to sum to one and returns the original sum.
///
/// If the sum is not positive the vector is left untouched.
pub fn normalize_in_place(values: &mut [f64]) -> f64 {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        let inv = 1.0 / total;
        for v in values.iter_mut() {
            *v *= inv;
        }
    }
    total
}

/// Adds `floor` to every entry and renormalises.
///
/// Keeps every probability strictly positive so that no state becomes
/// unreachable or absorbing after a sparse M-step.
pub fn floor_and_normalize(values: &mut [f64], floor: f64) {
    for v in values.iter_mut() {
        *v = v.max(0.0) + floor;
    }
    normalize_in_place(values);
}

/// Wraps an angle into (-π, π].
pub fn wrap_angle(theta: f64) -> f64 {
    let pi = std::f64::consts::PI;
    let wrapped = (theta + pi).rem_euclid(constants::TWO_PI) - pi;
    if wrapped <= -pi {
        wrapped + constants::TWO_PI
    } else {
        wrapped
    }
}

/// Weighted circular statistics of a set of angles.
///
/// Returns `(mean_direction, mean_resultant_length)`. The resultant length is in
/// `[0, 1]`; the mean direction is arbitrary (0) when the resultant vanishes.
pub fn weighted_circular_mean(angles: &[f64], weights: &[f64]) -> (f64, f64) {
    let mut sum_cos = 0.0;
    let mut sum_sin = 0.0;
    let mut total = 0.0;
    for (&theta, &w) in angles.iter().zip(weights.iter()) {
        sum_cos += w * theta.cos();
        sum_sin += w * theta.sin();
        total += w;
    }
    resultant(sum_cos, sum_sin, total)
}

/// Mean direction and mean resultant length from accumulated sums.
pub fn resultant(sum_cos: f64, sum_sin: f64, total_weight: f64) -> (f64, f64) {
    if total_weight <= 0.0 {
        return (0.0, 0.0);
    }
    let mean = sum_sin.atan2(sum_cos);
    let r = (sum_cos.hypot(sum_sin) / total_weight).clamp(0.0, 1.0);
    (mean, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_kahan_sum_precision() {
        let values = vec![1.0, 1e-16, 1e-16, 1e-16, 1e-16];
        assert_approx_eq!(kahan_sum(&values), 1.0 + 4e-16, 1e-18);
        assert_eq!(kahan_sum(&[]), 0.0);
    }

    #[test]
    fn test_log_sum_exp_stability() {
        assert_approx_eq!(log_sum_exp(&[0.0, 0.0]), 2f64.ln(), 1e-15);
        // Would overflow if exponentiated directly
        assert_approx_eq!(log_sum_exp(&[1000.0, 1000.0]), 1000.0 + 2f64.ln(), 1e-12);
        // Would underflow if exponentiated directly
        assert_approx_eq!(log_sum_exp(&[-1000.0, -1001.0]), -1000.0 + (1.0 + (-1f64).exp()).ln(), 1e-12);
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        assert_eq!(log_sum_exp(&[f64::NEG_INFINITY, f64::NEG_INFINITY]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_argmax_ties_go_to_lowest_index() {
        assert_eq!(argmax(&[0.1, 0.5, 0.5, 0.2]), 1);
        assert_eq!(argmax(&[3.0]), 0);
        assert_eq!(argmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]), 0);
    }

    #[test]
    fn test_floor_and_normalize() {
        let mut probs = vec![1.0, 0.0, 0.0];
        floor_and_normalize(&mut probs, 1e-10);
        assert!(probs.iter().all(|&p| p > 0.0));
        assert_approx_eq!(probs.iter().sum::<f64>(), 1.0, 1e-15);
    }

    #[test]
    fn test_wrap_angle() {
        assert_approx_eq!(wrap_angle(0.0), 0.0, 1e-15);
        assert_approx_eq!(wrap_angle(2.0 * PI + 0.5), 0.5, 1e-12);
        assert_approx_eq!(wrap_angle(-PI - 0.25), PI - 0.25, 1e-12);
        assert_approx_eq!(wrap_angle(PI), PI, 1e-15);
    }

    #[test]
    fn test_weighted_circular_mean() {
        // Angles straddling the branch cut average to π, not 0
        let angles = [PI - 0.1, -PI + 0.1];
        let (mean, r) = weighted_circular_mean(&angles, &[1.0, 1.0]);
        assert_approx_eq!(mean.abs(), PI, 1e-12);
        assert_approx_eq!(r, 0.1f64.cos(), 1e-12);

        // Opposite directions cancel
        let (_, r) = weighted_circular_mean(&[0.0, PI], &[1.0, 1.0]);
        assert!(r < 1e-12);

        // Zero total weight
        assert_eq!(weighted_circular_mean(&[1.0], &[0.0]), (0.0, 0.0));
    }
}
