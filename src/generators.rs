//! Synthetic data with known parameters for testing and validation.
//!
//! - **Von Mises variates**: Best–Fisher rejection sampler
//! - **HMM sequences**: state paths and angle observations from [`HMMParameters`]
//! - **Gamma mixtures**: component labels and values from [`GammaMixtureParameters`]
//!
//! Every generator takes a [`GeneratorConfig`]; a seed makes the output
//! reproducible.

use crate::errors::{MixtapeError, MixtapeResult};
use crate::math_utils::wrap_angle;
use crate::results::{GammaMixtureParameters, HMMParameters};
use crate::secure_rng::SecureRng;
use rand_distr::Gamma;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Below this concentration the von Mises distribution is sampled as uniform.
const UNIFORM_KAPPA: f64 = 1e-8;

/// Common generation parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Number of observations to generate
    pub length: usize,
    /// Random seed for reproducible generation
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(length: usize, seed: u64) -> Self {
        Self {
            length,
            seed: Some(seed),
        }
    }

    fn validate(&self) -> MixtapeResult<()> {
        if self.length == 0 {
            return Err(MixtapeError::configuration("length", "must be at least 1"));
        }
        Ok(())
    }
}

/// A sampled HMM sequence together with its hidden state path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HmmSample {
    pub states: Vec<usize>,
    /// One angle vector per step, each coordinate in (-π, π]
    pub observations: Vec<Vec<f64>>,
}

/// A gamma mixture sample together with the component each value came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MixtureSample {
    pub components: Vec<usize>,
    pub values: Vec<f64>,
}

/// Draws one von Mises variate in (-π, π].
///
/// Best & Fisher (1979) wrapped-Cauchy envelope. Concentrations below `1e-8` are
/// treated as the uniform distribution.
pub fn sample_von_mises(rng: &mut SecureRng, mu: f64, kappa: f64) -> f64 {
    if kappa < UNIFORM_KAPPA {
        return wrap_angle(rng.uniform(-PI, PI));
    }

    let tau = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
    let rho = (tau - (2.0 * tau).sqrt()) / (2.0 * kappa);
    let r = (1.0 + rho * rho) / (2.0 * rho);

    loop {
        let z = (PI * rng.f64()).cos();
        let f = ((1.0 + r * z) / (r + z)).clamp(-1.0, 1.0);
        let c = kappa * (r - f);
        let u = rng.f64();

        if c * (2.0 - c) - u > 0.0 || (c / u).ln() + 1.0 - c >= 0.0 {
            let sign = if rng.f64() < 0.5 { -1.0 } else { 1.0 };
            return wrap_angle(mu + sign * f.acos());
        }
    }
}

/// Generates `config.length` independent von Mises variates.
pub fn generate_von_mises(config: &GeneratorConfig, mu: f64, kappa: f64) -> MixtapeResult<Vec<f64>> {
    config.validate()?;
    if !mu.is_finite() {
        return Err(MixtapeError::domain("generate_von_mises", mu, "finite mean direction"));
    }
    if !(kappa >= 0.0 && kappa.is_finite()) {
        return Err(MixtapeError::domain("generate_von_mises", kappa, "0 <= kappa < inf"));
    }

    let mut rng = SecureRng::from_seed_option(config.seed);
    Ok((0..config.length)
        .map(|_| sample_von_mises(&mut rng, mu, kappa))
        .collect())
}

/// Samples a state path and observations from a von Mises HMM.
pub fn generate_hmm_sequence(config: &GeneratorConfig, params: &HMMParameters) -> MixtapeResult<HmmSample> {
    config.validate()?;
    params.validate("generate_hmm_sequence")?;
    let mut rng = SecureRng::from_seed_option(config.seed);
    Ok(sample_hmm(&mut rng, params, config.length))
}

/// Samples `count` independent sequences of `config.length` steps from one RNG
/// stream.
pub fn generate_hmm_sequences(
    config: &GeneratorConfig,
    params: &HMMParameters,
    count: usize,
) -> MixtapeResult<Vec<HmmSample>> {
    config.validate()?;
    params.validate("generate_hmm_sequences")?;
    let mut rng = SecureRng::from_seed_option(config.seed);
    Ok((0..count)
        .map(|_| sample_hmm(&mut rng, params, config.length))
        .collect())
}

fn sample_hmm(rng: &mut SecureRng, params: &HMMParameters, length: usize) -> HmmSample {
    let mut states = Vec::with_capacity(length);
    let mut observations = Vec::with_capacity(length);

    let mut state = rng.categorical(&params.startprob);
    for t in 0..length {
        if t > 0 {
            state = rng.categorical(&params.transmat[state]);
        }
        let emission = &params.emissions[state];
        let angles = emission
            .means
            .iter()
            .zip(emission.kappas.iter())
            .map(|(&mu, &kappa)| sample_von_mises(rng, mu, kappa))
            .collect();
        states.push(state);
        observations.push(angles);
    }

    HmmSample {
        states,
        observations,
    }
}

/// Samples values and their component labels from a gamma mixture.
pub fn generate_gamma_mixture(
    config: &GeneratorConfig,
    params: &GammaMixtureParameters,
) -> MixtapeResult<MixtureSample> {
    config.validate()?;
    params.validate("generate_gamma_mixture")?;

    let distributions = params
        .components
        .iter()
        .map(|c| {
            Gamma::new(c.shape, c.scale)
                .map_err(|e| MixtapeError::configuration("gamma component", e.to_string()))
        })
        .collect::<MixtapeResult<Vec<_>>>()?;

    let mut rng = SecureRng::from_seed_option(config.seed);
    let mut components = Vec::with_capacity(config.length);
    let mut values = Vec::with_capacity(config.length);
    for _ in 0..config.length {
        let k = rng.categorical(&params.weights);
        let mut x: f64 = rng.sample(&distributions[k]);
        // Small shapes can underflow to exactly zero, outside the gamma support.
        if x <= 0.0 {
            x = f64::MIN_POSITIVE;
        }
        components.push(k);
        values.push(x);
    }

    Ok(MixtureSample { components, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emission_models::{GammaComponent, VonMisesEmission};
    use crate::math_utils::weighted_circular_mean;
    use crate::special::bessel_ratio;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_von_mises_moments() {
        for &(mu, kappa) in &[(0.5, 0.5), (-2.0, 4.0), (3.0, 60.0)] {
            let samples = generate_von_mises(&GeneratorConfig::new(20_000, 11), mu, kappa).unwrap();
            assert!(samples.iter().all(|&x| x > -PI && x <= PI));

            let weights = vec![1.0; samples.len()];
            let (mean, r) = weighted_circular_mean(&samples, &weights);
            assert!(
                (r - bessel_ratio(kappa)).abs() < 0.02,
                "kappa {}: resultant {} vs {}",
                kappa,
                r,
                bessel_ratio(kappa)
            );
            assert!(wrap_angle(mean - mu).abs() < 0.1, "mean {} vs {}", mean, mu);
        }
    }

    #[test]
    fn test_von_mises_uniform_limit() {
        let samples = generate_von_mises(&GeneratorConfig::new(20_000, 5), 1.0, 0.0).unwrap();
        let weights = vec![1.0; samples.len()];
        let (_, r) = weighted_circular_mean(&samples, &weights);
        assert!(r < 0.03);
    }

    #[test]
    fn test_generation_is_reproducible() {
        let config = GeneratorConfig::new(100, 99);
        assert_eq!(
            generate_von_mises(&config, 0.0, 2.0).unwrap(),
            generate_von_mises(&config, 0.0, 2.0).unwrap()
        );
    }

    #[test]
    fn test_hmm_sequence_follows_transitions() {
        let params = HMMParameters::new(
            vec![1.0, 0.0],
            vec![vec![0.9, 0.1], vec![0.3, 0.7]],
            vec![
                VonMisesEmission::new(vec![0.0], vec![20.0]).unwrap(),
                VonMisesEmission::new(vec![PI / 2.0], vec![20.0]).unwrap(),
            ],
        )
        .unwrap();
        let sample = generate_hmm_sequence(&GeneratorConfig::new(20_000, 3), &params).unwrap();
        assert_eq!(sample.states[0], 0);
        assert_eq!(sample.observations.len(), 20_000);

        let mut from_zero = 0usize;
        let mut stay_zero = 0usize;
        for w in sample.states.windows(2) {
            if w[0] == 0 {
                from_zero += 1;
                if w[1] == 0 {
                    stay_zero += 1;
                }
            }
        }
        assert_approx_eq!(stay_zero as f64 / from_zero as f64, 0.9, 0.02);

        // Stationary share of state 0 is 0.3 / (0.1 + 0.3)
        let share = sample.states.iter().filter(|&&s| s == 0).count() as f64 / 20_000.0;
        assert_approx_eq!(share, 0.75, 0.03);
    }

    #[test]
    fn test_gamma_mixture_sample_moments() {
        let params = GammaMixtureParameters::new(
            vec![0.3, 0.7],
            vec![
                GammaComponent::new(2.0, 1.0).unwrap(),
                GammaComponent::new(10.0, 3.0).unwrap(),
            ],
        )
        .unwrap();
        let sample = generate_gamma_mixture(&GeneratorConfig::new(40_000, 8), &params).unwrap();
        assert!(sample.values.iter().all(|&x| x > 0.0));

        let share = sample.components.iter().filter(|&&k| k == 0).count() as f64 / 40_000.0;
        assert_approx_eq!(share, 0.3, 0.01);

        let mean = sample.values.iter().sum::<f64>() / 40_000.0;
        // 0.3 * 2 + 0.7 * 30
        assert_approx_eq!(mean, 21.6, 0.3);
    }

    #[test]
    fn test_invalid_generation_inputs() {
        assert!(matches!(
            generate_von_mises(&GeneratorConfig::new(0, 1), 0.0, 1.0),
            Err(MixtapeError::ConfigurationError { .. })
        ));
        assert!(matches!(
            generate_von_mises(&GeneratorConfig::new(10, 1), 0.0, -1.0),
            Err(MixtapeError::DomainError { .. })
        ));
        assert!(matches!(
            generate_von_mises(&GeneratorConfig::new(10, 1), f64::NAN, 1.0),
            Err(MixtapeError::DomainError { .. })
        ));
    }
}
