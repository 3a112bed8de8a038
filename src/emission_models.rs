//! Emission densities for the von Mises HMM and the gamma mixture.
//!
//! A von Mises HMM state emits a vector of angles whose coordinates are independent
//! von Mises variates. A gamma mixture component emits a positive scalar. Both are
//! evaluated in log space; the normalising constants are exposed separately so the
//! forward-backward pass can compute them once per state per iteration.

use crate::{
    errors::{validate_positive, MixtapeError, MixtapeResult},
    math_utils::constants,
    special::log_bessel_i0,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;

/// Emission parameters of one HMM state: a product of univariate von Mises densities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VonMisesEmission {
    /// Mean direction per dimension, in radians
    pub means: Vec<f64>,
    /// Concentration per dimension; zero is the uniform distribution
    pub kappas: Vec<f64>,
}

impl VonMisesEmission {
    /// Creates an emission, checking lengths and `κ ≥ 0`.
    pub fn new(means: Vec<f64>, kappas: Vec<f64>) -> MixtapeResult<Self> {
        let emission = Self { means, kappas };
        emission.validate()?;
        Ok(emission)
    }

    /// Uniform emission over `num_dims` circles.
    pub fn uniform(num_dims: usize) -> Self {
        Self {
            means: vec![0.0; num_dims],
            kappas: vec![0.0; num_dims],
        }
    }

    /// Number of angle dimensions.
    pub fn num_dims(&self) -> usize {
        self.means.len()
    }

    pub fn validate(&self) -> MixtapeResult<()> {
        if self.kappas.len() != self.means.len() {
            return Err(MixtapeError::DimensionMismatch {
                context: "von Mises concentrations".to_string(),
                expected: self.means.len(),
                actual: self.kappas.len(),
            });
        }
        if let Some(&mu) = self.means.iter().find(|m| !m.is_finite()) {
            return Err(MixtapeError::domain("VonMisesEmission", mu, "finite mean direction"));
        }
        if let Some(&kappa) = self.kappas.iter().find(|&&k| !(k >= 0.0 && k.is_finite())) {
            return Err(MixtapeError::domain("VonMisesEmission", kappa, "0 <= kappa < inf"));
        }
        Ok(())
    }

    /// `Σ_d ln(2π I0(κ_d))`.
    pub fn log_normalizer(&self) -> f64 {
        self.kappas
            .iter()
            .map(|&k| constants::LN_TWO_PI + log_bessel_i0(k))
            .sum()
    }

    /// Unnormalised log density `Σ_d κ_d cos(θ_d − μ_d)`.
    pub fn log_kernel(&self, angles: &[f64]) -> f64 {
        angles
            .iter()
            .zip(self.means.iter().zip(self.kappas.iter()))
            .map(|(&theta, (&mu, &kappa))| kappa * (theta - mu).cos())
            .sum()
    }

    /// Log density of an angle vector.
    pub fn log_prob(&self, angles: &[f64]) -> MixtapeResult<f64> {
        if angles.len() != self.num_dims() {
            return Err(MixtapeError::DimensionMismatch {
                context: "observation angles".to_string(),
                expected: self.num_dims(),
                actual: angles.len(),
            });
        }
        Ok(self.log_kernel(angles) - self.log_normalizer())
    }
}

/// Log density of a single von Mises variate.
pub fn von_mises_log_pdf(theta: f64, mu: f64, kappa: f64) -> f64 {
    kappa * (theta - mu).cos() - constants::LN_TWO_PI - log_bessel_i0(kappa)
}

/// A gamma density with shape `a` and scale `θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaComponent {
    /// Shape parameter, strictly positive
    pub shape: f64,
    /// Scale parameter, strictly positive
    pub scale: f64,
}

impl GammaComponent {
    pub fn new(shape: f64, scale: f64) -> MixtapeResult<Self> {
        let component = Self { shape, scale };
        component.validate()?;
        Ok(component)
    }

    pub fn validate(&self) -> MixtapeResult<()> {
        validate_positive(self.shape, "GammaComponent shape")?;
        validate_positive(self.scale, "GammaComponent scale")?;
        Ok(())
    }

    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    pub fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    /// `ln Γ(a) + a ln θ`.
    pub fn log_normalizer(&self) -> MixtapeResult<f64> {
        validate_positive(self.shape, "ln_gamma")?;
        Ok(ln_gamma(self.shape) + self.shape * self.scale.ln())
    }

    /// `(a − 1) ln x − x/θ`, given `ln x`.
    pub fn log_kernel(&self, x: f64, ln_x: f64) -> f64 {
        (self.shape - 1.0) * ln_x - x / self.scale
    }

    /// Log density at `x > 0`.
    pub fn log_prob(&self, x: f64) -> MixtapeResult<f64> {
        validate_positive(x, "gamma log density")?;
        Ok(self.log_kernel(x, x.ln()) - self.log_normalizer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_von_mises_density_integrates_to_one() {
        for &(mu, kappa) in &[(0.0, 0.0), (1.0, 0.5), (-2.0, 4.0), (PI, 30.0)] {
            let n = 20_000;
            let step = 2.0 * PI / n as f64;
            let total: f64 = (0..n)
                .map(|i| von_mises_log_pdf(-PI + (i as f64 + 0.5) * step, mu, kappa).exp() * step)
                .sum();
            assert_approx_eq!(total, 1.0, 1e-8);
        }
    }

    #[test]
    fn test_zero_concentration_is_uniform() {
        let emission = VonMisesEmission::uniform(3);
        let lp = emission.log_prob(&[0.1, 2.0, -3.0]).unwrap();
        assert_approx_eq!(lp, -3.0 * (2.0 * PI).ln(), 1e-12);
    }

    #[test]
    fn test_product_density_is_sum_of_marginals() {
        let emission = VonMisesEmission::new(vec![0.3, -1.2], vec![2.0, 700.0]).unwrap();
        let angles = [0.5, -1.19];
        let expected = von_mises_log_pdf(0.5, 0.3, 2.0) + von_mises_log_pdf(-1.19, -1.2, 700.0);
        assert_approx_eq!(emission.log_prob(&angles).unwrap(), expected, 1e-10);
        assert!(expected.is_finite());
    }

    #[test]
    fn test_emission_validation() {
        assert!(matches!(
            VonMisesEmission::new(vec![0.0, 0.0], vec![1.0]),
            Err(MixtapeError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            VonMisesEmission::new(vec![0.0], vec![-1.0]),
            Err(MixtapeError::DomainError { .. })
        ));
        let emission = VonMisesEmission::uniform(2);
        assert!(matches!(
            emission.log_prob(&[0.0]),
            Err(MixtapeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_gamma_log_density() {
        // Exponential(θ = 2) is Gamma(1, 2)
        let component = GammaComponent::new(1.0, 2.0).unwrap();
        assert_approx_eq!(component.log_prob(3.0).unwrap(), -(2f64.ln()) - 1.5, 1e-12);

        let component = GammaComponent::new(3.5, 0.7).unwrap();
        let expected = statrs::distribution::Continuous::ln_pdf(
            &statrs::distribution::Gamma::new(3.5, 1.0 / 0.7).unwrap(),
            2.2,
        );
        assert_approx_eq!(component.log_prob(2.2).unwrap(), expected, 1e-10);
        assert_approx_eq!(component.mean(), 2.45, 1e-12);
        assert_approx_eq!(component.variance(), 3.5 * 0.49, 1e-12);
    }

    #[test]
    fn test_gamma_large_shape_does_not_overflow() {
        let component = GammaComponent::new(500.0, 0.01).unwrap();
        let lp = component.log_prob(5.0).unwrap();
        assert!(lp.is_finite());
        assert!(lp > 0.0);
    }

    #[test]
    fn test_gamma_domain() {
        let component = GammaComponent::new(2.0, 1.0).unwrap();
        assert!(matches!(component.log_prob(0.0), Err(MixtapeError::DomainError { .. })));
        assert!(matches!(component.log_prob(-1.0), Err(MixtapeError::DomainError { .. })));
        assert!(GammaComponent::new(0.0, 1.0).is_err());
        assert!(GammaComponent::new(1.0, -1.0).is_err());

        let degenerate = GammaComponent {
            shape: 0.0,
            scale: 1.0,
        };
        match degenerate.log_normalizer() {
            Err(MixtapeError::DomainError { function, .. }) => assert_eq!(function, "ln_gamma"),
            other => panic!("Expected DomainError, got {:?}", other),
        }
    }

    #[test]
    fn test_gamma_normalizer_values() {
        // Γ(1) = 1 and Γ(5) = 24
        let component = GammaComponent::new(1.0, 1.0).unwrap();
        assert_approx_eq!(component.log_normalizer().unwrap(), 0.0, 1e-14);
        let component = GammaComponent::new(5.0, 2.0).unwrap();
        assert_approx_eq!(component.log_normalizer().unwrap(), 24f64.ln() + 5.0 * 2f64.ln(), 1e-12);
    }
}
