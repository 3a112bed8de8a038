//! Runtime inversion of the Bessel ratio `A(κ) = I1(κ)/I0(κ)`.
//!
//! [`SplineEvaluator`] looks up `ln κ` for a mean resultant length in `O(log n)`
//! with a binary search over the knots followed by the closed-form cubic. Inputs
//! beyond the outermost knots are clamped to the table's end values, never
//! extrapolated.
//!
//! The process-wide [`default_evaluator`] wraps the generated static table and is
//! shared read-only by every concentration update.

use crate::errors::{MixtapeError, MixtapeResult};
use crate::inv_bessel_table::{INV_BESSEL_LOG_KAPPA, INV_BESSEL_SECOND_DERIV, INV_BESSEL_X};
use crate::spline_builder::SplineTable;
use crate::special::bessel_ratio;
use once_cell::sync::Lazy;
use std::borrow::Cow;

static DEFAULT_EVALUATOR: Lazy<SplineEvaluator> = Lazy::new(SplineEvaluator::shipped);

/// Shared evaluator over the shipped 1024-knot table.
pub fn default_evaluator() -> &'static SplineEvaluator {
    &DEFAULT_EVALUATOR
}

/// Natural cubic spline evaluator for `x ↦ ln κ`.
#[derive(Debug, Clone)]
pub struct SplineEvaluator {
    x: Cow<'static, [f64]>,
    log_y: Cow<'static, [f64]>,
    second_derivs: Cow<'static, [f64]>,
}

/// Result of a clamped concentration lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clamp {
    /// Input lay inside the knot range
    None,
    /// Input at or below the first knot; κ pinned to the table minimum
    Lower,
    /// Input at or above the last knot; κ pinned to the table maximum
    Upper,
}

impl SplineEvaluator {
    /// Evaluator over the generated static table.
    pub fn shipped() -> Self {
        Self {
            x: Cow::Borrowed(&INV_BESSEL_X[..]),
            log_y: Cow::Borrowed(&INV_BESSEL_LOG_KAPPA[..]),
            second_derivs: Cow::Borrowed(&INV_BESSEL_SECOND_DERIV[..]),
        }
    }

    /// Evaluator over a freshly built table.
    pub fn from_table(table: SplineTable) -> MixtapeResult<Self> {
        let SplineTable {
            x,
            log_y,
            second_derivs,
        } = SplineTable::from_parts(table.x, table.log_y, table.second_derivs)?;

        Ok(Self {
            x: Cow::Owned(x),
            log_y: Cow::Owned(log_y),
            second_derivs: Cow::Owned(second_derivs),
        })
    }

    /// Number of knots.
    pub fn num_knots(&self) -> usize {
        self.x.len()
    }

    /// Smallest tabulated Bessel ratio.
    pub fn x_min(&self) -> f64 {
        self.x[0]
    }

    /// Largest tabulated Bessel ratio.
    pub fn x_max(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Smallest concentration the table can return.
    pub fn kappa_min(&self) -> f64 {
        self.log_y[0].exp()
    }

    /// Largest concentration the table can return.
    pub fn kappa_max(&self) -> f64 {
        self.log_y[self.log_y.len() - 1].exp()
    }

    /// Returns `ln κ` such that `A(κ) ≈ x`.
    ///
    /// # Errors
    /// [`MixtapeError::DomainError`] unless `0 < x < 1`.
    ///
    /// # Example
    /// ```rust
    /// use mixtape::special::bessel_ratio;
    /// use mixtape::spline_eval::default_evaluator;
    ///
    /// let log_kappa = default_evaluator().invert(bessel_ratio(2.5)).unwrap();
    /// assert!((log_kappa - 2.5f64.ln()).abs() < 1e-6);
    /// assert!(default_evaluator().invert(1.0).is_err());
    /// ```
    pub fn invert(&self, x: f64) -> MixtapeResult<f64> {
        self.check_domain(x)?;
        Ok(self.evaluate(x).0)
    }

    /// Returns `ln κ` and `d(ln κ)/dx` at `x`.
    ///
    /// The derivative is zero where the input is clamped.
    pub fn invert_with_derivative(&self, x: f64) -> MixtapeResult<(f64, f64)> {
        self.check_domain(x)?;
        let (value, derivative, _) = self.evaluate(x);
        Ok((value, derivative))
    }

    /// Maximum-likelihood concentration for a mean resultant length `r ∈ [0, 1]`.
    ///
    /// `r` at or below the first knot maps to the table minimum (≈ 0, the uniform
    /// limit) and `r` at or above the last knot to the table maximum. Never fails for
    /// finite input; NaN is treated as zero resultant.
    pub fn concentration(&self, r: f64) -> (f64, Clamp) {
        if !(r > self.x_min()) {
            return (self.kappa_min(), Clamp::Lower);
        }
        if r >= self.x_max() {
            return (self.kappa_max(), Clamp::Upper);
        }
        (self.evaluate(r).0.exp(), Clamp::None)
    }

    /// Polishes a lookup against the exact Bessel ratio.
    ///
    /// Each step moves `ln κ` by `(x - A(κ)) · d(ln κ)/dx`, using the spline slope as
    /// the inverse Jacobian. The result stays within the table's `ln κ` range.
    pub fn refine(&self, x: f64, log_kappa: f64, steps: usize) -> MixtapeResult<f64> {
        let (_, slope) = self.invert_with_derivative(x)?;
        if slope == 0.0 {
            return Ok(log_kappa);
        }

        let lo = self.log_y[0];
        let hi = self.log_y[self.log_y.len() - 1];
        let mut u = log_kappa;
        for _ in 0..steps {
            let residual = x - bessel_ratio(u.exp());
            u = (u + residual * slope).clamp(lo, hi);
        }
        Ok(u)
    }

    fn check_domain(&self, x: f64) -> MixtapeResult<()> {
        if x > 0.0 && x < 1.0 {
            Ok(())
        } else {
            Err(MixtapeError::domain("SplineEvaluator::invert", x, "0 < x < 1"))
        }
    }

    /// `(ln κ, d ln κ / dx, clamp)` at `x`.
    fn evaluate(&self, x: f64) -> (f64, f64, Clamp) {
        let n = self.x.len();
        if x <= self.x[0] {
            return (self.log_y[0], 0.0, Clamp::Lower);
        }
        if x >= self.x[n - 1] {
            return (self.log_y[n - 1], 0.0, Clamp::Upper);
        }

        // First knot strictly above x; lies in 1..n because of the checks above
        let hi = self.x.partition_point(|&knot| knot <= x);
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - x) / h;
        let b = (x - self.x[lo]) / h;
        let (y_lo, y_hi) = (self.log_y[lo], self.log_y[hi]);
        let (d_lo, d_hi) = (self.second_derivs[lo], self.second_derivs[hi]);

        let value = a * y_lo + b * y_hi + ((a * a * a - a) * d_lo + (b * b * b - b) * d_hi) * h * h / 6.0;
        let derivative = (y_hi - y_lo) / h - (3.0 * a * a - 1.0) / 6.0 * h * d_lo
            + (3.0 * b * b - 1.0) / 6.0 * h * d_hi;

        (value, derivative, Clamp::None)
    }
}

impl Default for SplineEvaluator {
    fn default() -> Self {
        Self::shipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplineConfig;
    use crate::spline_builder::SplineCoefficientBuilder;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_invert_matches_log_kappa() {
        let evaluator = default_evaluator();
        for &kappa in &[1e-4, 0.01, 0.5, 1.0, 3.0, 10.0, 50.0, 200.0, 650.0] {
            let log_kappa = evaluator.invert(bessel_ratio(kappa)).unwrap();
            assert!(
                (log_kappa - kappa.ln()).abs() < 1e-4,
                "κ = {}: got {}",
                kappa,
                log_kappa.exp()
            );
        }
    }

    #[test]
    fn test_knots_are_reproduced_exactly() {
        let evaluator = default_evaluator();
        for i in [1, 100, 511, 1000] {
            assert_approx_eq!(evaluator.invert(INV_BESSEL_X[i]).unwrap(), INV_BESSEL_LOG_KAPPA[i], 1e-12);
        }
    }

    #[test]
    fn test_domain_errors() {
        let evaluator = default_evaluator();
        for x in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            match evaluator.invert(x) {
                Err(MixtapeError::DomainError { constraint, .. }) => {
                    assert_eq!(constraint, "0 < x < 1");
                }
                other => panic!("Expected DomainError for {}, got {:?}", x, other),
            }
        }
    }

    #[test]
    fn test_clamping_at_table_ends() {
        let evaluator = default_evaluator();
        assert_approx_eq!(evaluator.invert(1e-9).unwrap(), 1e-5f64.ln(), 1e-12);
        assert_approx_eq!(evaluator.invert(1.0 - 1e-12).unwrap(), 700f64.ln(), 1e-12);

        let (kappa, clamp) = evaluator.concentration(0.0);
        assert_eq!(clamp, Clamp::Lower);
        assert_approx_eq!(kappa, 1e-5, 1e-15);

        let (kappa, clamp) = evaluator.concentration(1.0);
        assert_eq!(clamp, Clamp::Upper);
        assert_approx_eq!(kappa, 700.0, 1e-9);

        let (_, clamp) = evaluator.concentration(f64::NAN);
        assert_eq!(clamp, Clamp::Lower);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let evaluator = default_evaluator();
        for &x in &[0.01, 0.3, 0.7, 0.95] {
            let (_, slope) = evaluator.invert_with_derivative(x).unwrap();
            let h = 1e-7;
            let numeric = (evaluator.invert(x + h).unwrap() - evaluator.invert(x - h).unwrap()) / (2.0 * h);
            assert!((slope - numeric).abs() < 1e-4 * numeric.abs(), "x = {}", x);
        }
    }

    #[test]
    fn test_refine_improves_coarse_lookup() {
        let coarse = SplineCoefficientBuilder::new(SplineConfig {
            num_points: 16,
            y_min: 1e-3,
            y_max: 100.0,
        })
        .build()
        .unwrap();
        let evaluator = SplineEvaluator::from_table(coarse).unwrap();

        let kappa: f64 = 7.3;
        let x = bessel_ratio(kappa);
        let rough = evaluator.invert(x).unwrap();
        let refined = evaluator.refine(x, rough, 5).unwrap();
        assert!((refined - kappa.ln()).abs() < (rough - kappa.ln()).abs());
        assert!((refined - kappa.ln()).abs() < 1e-6);
    }

    #[test]
    fn test_concentration_is_monotone() {
        let evaluator = default_evaluator();
        let mut previous = 0.0;
        for i in 1..200 {
            let (kappa, _) = evaluator.concentration(i as f64 / 200.0);
            assert!(kappa > previous);
            previous = kappa;
        }
    }
}
