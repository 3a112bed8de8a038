//! Expectation-maximization for finite mixtures of gamma distributions.
//!
//! The E-step computes responsibilities in log space. The M-step sets mixing
//! weights and scales in closed form and solves for each shape with Newton's
//! method on
//!
//! ```text
//! ln a − ψ(a) = ln(x̄_k) − mean_k(ln x)
//! ```
//!
//! where both means are responsibility-weighted. A shape solve that fails is not
//! fatal: the component keeps its previous shape for that iteration.

use crate::{
    config::GammaMixtureConfig,
    emission_models::GammaComponent,
    errors::{validate_finite, validate_positive, MixtapeError, MixtapeResult},
    math_utils::{argmax, constants, float_total_cmp, kahan_sum, log_sum_exp},
    results::{
        supplied_parameter_error, FitSummary, GammaMixtureFit, GammaMixtureParameters, ModelCriteria,
    },
    special::{ln_minus_digamma, trigamma},
};
use std::time::Instant;

/// Below this value of `ln x̄ − mean(ln x)` the data carry no shape information.
const MIN_SHAPE_STATISTIC: f64 = 1e-12;

/// Floor on the squared coefficient of variation when moment-matching a slice.
const MIN_RELATIVE_VARIANCE: f64 = 1e-6;

/// Weighted sufficient statistics of one E-step.
#[derive(Debug, Clone)]
struct GammaStatistics {
    /// `Σ_n r_nk`
    mass: Vec<f64>,
    /// `Σ_n r_nk x_n`
    x_sum: Vec<f64>,
    /// `Σ_n r_nk ln x_n`
    log_x_sum: Vec<f64>,
    log_likelihood: f64,
}

/// Solves `ln a − ψ(a) = s` for the gamma shape `a`.
///
/// Starts from the closed-form approximation
/// `a₀ = (3 − s + sqrt((s − 3)² + 24s)) / (12s)` and iterates Newton steps with
/// derivative `1/a − ψ'(a)`. A step that would make the shape non-positive halves it
/// instead. Stops once the step is within `tolerance · max(a, 1)`.
///
/// # Errors
/// [`MixtapeError::ConvergenceError`] when `s` is too small to identify a shape or
/// the iteration cap is reached.
pub fn solve_shape(s: f64, tolerance: f64, max_iterations: usize) -> MixtapeResult<f64> {
    if !(s >= MIN_SHAPE_STATISTIC && s.is_finite()) {
        return Err(MixtapeError::ConvergenceError {
            routine: "gamma shape newton".to_string(),
            iterations: 0,
            last_step: s,
        });
    }

    let mut shape = (3.0 - s + ((s - 3.0).powi(2) + 24.0 * s).sqrt()) / (12.0 * s);
    let mut last_step = f64::INFINITY;

    for _ in 0..max_iterations {
        let f = ln_minus_digamma(shape)? - s;
        let df = 1.0 / shape - trigamma(shape)?;
        let step = f / df;

        let mut next = shape - step;
        if !(next > 0.0) {
            next = shape / 2.0;
        }
        last_step = (next - shape).abs();
        shape = next;

        if last_step <= tolerance * shape.max(1.0) {
            return Ok(shape);
        }
    }

    Err(MixtapeError::ConvergenceError {
        routine: "gamma shape newton".to_string(),
        iterations: max_iterations,
        last_step,
    })
}

/// Gamma mixture estimator.
#[derive(Debug, Clone)]
pub struct GammaMixtureModel {
    config: GammaMixtureConfig,
}

impl GammaMixtureModel {
    pub fn new(config: GammaMixtureConfig) -> MixtapeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GammaMixtureConfig {
        &self.config
    }

    /// Fits from moment-matched initial parameters.
    pub fn fit(&self, data: &[f64]) -> MixtapeResult<GammaMixtureFit> {
        let initial = self.initialize(data)?;
        self.run_em(data, initial)
    }

    /// Fits starting from caller-supplied parameters.
    pub fn fit_from(&self, data: &[f64], initial: GammaMixtureParameters) -> MixtapeResult<GammaMixtureFit> {
        if initial.num_components() != self.config.num_components {
            return Err(MixtapeError::DimensionMismatch {
                context: "initial mixture components".to_string(),
                expected: self.config.num_components,
                actual: initial.num_components(),
            });
        }
        initial.validate("initialisation")?;
        validate_data(data)?;
        self.run_em(data, initial)
    }

    /// Sorts the data, cuts it into equal-count slices and moment-matches one
    /// component to each slice.
    pub fn initialize(&self, data: &[f64]) -> MixtapeResult<GammaMixtureParameters> {
        validate_data(data)?;
        let k = self.config.num_components;
        if data.len() < k {
            return Err(MixtapeError::configuration(
                "data",
                format!("needs at least {} observations for {} components, got {}", k, k, data.len()),
            ));
        }

        let mut sorted = data.to_vec();
        sorted.sort_by(float_total_cmp);

        let n = sorted.len();
        let mut weights = Vec::with_capacity(k);
        let mut components = Vec::with_capacity(k);
        for j in 0..k {
            let slice = &sorted[j * n / k..(j + 1) * n / k];
            let len = slice.len() as f64;
            let mean = slice.iter().sum::<f64>() / len;
            // Squared coefficient of variation; stays representable for tiny data
            let cv2 = slice.iter().map(|x| (x / mean - 1.0).powi(2)).sum::<f64>() / len;
            let cv2 = cv2.max(MIN_RELATIVE_VARIANCE);

            weights.push(len / n as f64);
            components.push(GammaComponent::new(1.0 / cv2, mean * cv2)?);
        }

        GammaMixtureParameters::new(weights, components)
    }

    /// Total log-likelihood of the data.
    pub fn score(&self, params: &GammaMixtureParameters, data: &[f64]) -> MixtapeResult<f64> {
        Ok(kahan_sum(&self.score_samples(params, data)?))
    }

    /// Log mixture density of every point.
    pub fn score_samples(&self, params: &GammaMixtureParameters, data: &[f64]) -> MixtapeResult<Vec<f64>> {
        params.validate("score_samples").map_err(supplied_parameter_error)?;
        validate_data(data)?;
        let terms = ComponentTerms::new(params)?;
        Ok(data
            .iter()
            .map(|&x| log_sum_exp(&terms.joint_log_probs(x, x.ln())))
            .collect())
    }

    /// Responsibilities `r[n][k]`; every row sums to one.
    pub fn predict_proba(&self, params: &GammaMixtureParameters, data: &[f64]) -> MixtapeResult<Vec<Vec<f64>>> {
        params.validate("predict_proba").map_err(supplied_parameter_error)?;
        validate_data(data)?;
        let terms = ComponentTerms::new(params)?;
        Ok(data
            .iter()
            .map(|&x| {
                let joint = terms.joint_log_probs(x, x.ln());
                let total = log_sum_exp(&joint);
                joint.iter().map(|l| (l - total).exp()).collect()
            })
            .collect())
    }

    /// Most responsible component of every point; ties go to the lowest index.
    pub fn predict(&self, params: &GammaMixtureParameters, data: &[f64]) -> MixtapeResult<Vec<usize>> {
        Ok(self
            .predict_proba(params, data)?
            .iter()
            .map(|row| argmax(row))
            .collect())
    }

    fn run_em(&self, data: &[f64], initial: GammaMixtureParameters) -> MixtapeResult<GammaMixtureFit> {
        let started = Instant::now();
        let log_data: Vec<f64> = data.iter().map(|x| x.ln()).collect();

        let mut params = initial;
        let mut stats = self.e_step(&params, data, &log_data)?;
        let mut history = Vec::with_capacity(self.config.max_iterations + 1);
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.config.max_iterations {
            let next_params = self.m_step(&params, &stats, data.len())?;
            next_params.validate("m-step")?;
            let next_stats = self.e_step(&next_params, data, &log_data)?;

            let improvement = next_stats.log_likelihood - stats.log_likelihood;
            let slack = constants::MAX_RELATIVE_DECREASE * stats.log_likelihood.abs().max(1.0);
            if improvement < -slack {
                log::warn!(
                    "gamma mixture step {} lowered the log-likelihood from {:.6} to {:.6}; keeping the previous parameters",
                    iterations + 1,
                    stats.log_likelihood,
                    next_stats.log_likelihood
                );
                break;
            }

            history.push(stats.log_likelihood);
            iterations += 1;
            log::debug!(
                "gamma mixture iteration {}: log-likelihood {:.6} (delta {:.3e})",
                iterations,
                next_stats.log_likelihood,
                improvement
            );
            params = next_params;
            stats = next_stats;

            if improvement < self.config.convergence_tolerance {
                converged = true;
                break;
            }
            if let Some(budget) = self.config.max_duration {
                if started.elapsed() >= budget {
                    log::warn!(
                        "gamma mixture stopped by time budget after {} iterations ({:?})",
                        iterations,
                        budget
                    );
                    break;
                }
            }
        }
        history.push(stats.log_likelihood);

        if converged {
            log::info!(
                "gamma mixture converged after {} iterations, log-likelihood {:.6}",
                iterations,
                stats.log_likelihood
            );
        } else {
            log::info!(
                "gamma mixture stopped after {} iterations without meeting tolerance {:e}",
                iterations,
                self.config.convergence_tolerance
            );
        }

        let criteria = ModelCriteria::new(stats.log_likelihood, params.num_free_parameters(), data.len());
        Ok(GammaMixtureFit {
            params,
            summary: FitSummary {
                log_likelihood: stats.log_likelihood,
                history,
                iterations,
                converged,
                criteria,
            },
        })
    }

    fn e_step(
        &self,
        params: &GammaMixtureParameters,
        data: &[f64],
        log_data: &[f64],
    ) -> MixtapeResult<GammaStatistics> {
        let k = params.num_components();
        let terms = ComponentTerms::new(params)?;
        let mut stats = GammaStatistics {
            mass: vec![0.0; k],
            x_sum: vec![0.0; k],
            log_x_sum: vec![0.0; k],
            log_likelihood: 0.0,
        };

        for (&x, &ln_x) in data.iter().zip(log_data.iter()) {
            let joint = terms.joint_log_probs(x, ln_x);
            let total = log_sum_exp(&joint);
            stats.log_likelihood += total;
            for (j, &l) in joint.iter().enumerate() {
                let r = (l - total).exp();
                stats.mass[j] += r;
                stats.x_sum[j] += r * x;
                stats.log_x_sum[j] += r * ln_x;
            }
        }

        validate_finite(stats.log_likelihood, "log-likelihood", "e-step")?;
        Ok(stats)
    }

    fn m_step(
        &self,
        params: &GammaMixtureParameters,
        stats: &GammaStatistics,
        num_points: usize,
    ) -> MixtapeResult<GammaMixtureParameters> {
        let update = self.config.update;

        let weights = if update.weights {
            stats.mass.iter().map(|m| m / num_points as f64).collect()
        } else {
            params.weights.clone()
        };

        let mut components = params.components.clone();
        for (j, component) in components.iter_mut().enumerate() {
            let mass = stats.mass[j];
            if mass <= constants::MIN_POSTERIOR_MASS {
                log::debug!("component {} has no posterior mass; keeping its shape and scale", j);
                continue;
            }
            let mean_x = stats.x_sum[j] / mass;
            let mean_log_x = stats.log_x_sum[j] / mass;

            if update.shapes {
                let s = mean_x.ln() - mean_log_x;
                match solve_shape(s, self.config.newton_tolerance, self.config.newton_max_iterations) {
                    Ok(shape) => component.shape = shape,
                    Err(err) if err.is_recoverable() => {
                        log::warn!(
                            "component {}: {}; keeping previous shape {}",
                            j,
                            err,
                            component.shape
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
            if update.scales {
                component.scale = mean_x / component.shape;
            }
        }

        Ok(GammaMixtureParameters {
            weights,
            components,
        })
    }
}

/// Per-component constants for evaluating `ln w_k + ln f_k(x)`.
struct ComponentTerms {
    log_weights: Vec<f64>,
    normalizers: Vec<f64>,
    components: Vec<GammaComponent>,
}

impl ComponentTerms {
    fn new(params: &GammaMixtureParameters) -> MixtapeResult<Self> {
        let normalizers = params
            .components
            .iter()
            .map(GammaComponent::log_normalizer)
            .collect::<MixtapeResult<Vec<f64>>>()?;
        Ok(Self {
            log_weights: params.weights.iter().map(|w| w.ln()).collect(),
            normalizers,
            components: params.components.clone(),
        })
    }

    fn joint_log_probs(&self, x: f64, ln_x: f64) -> Vec<f64> {
        self.components
            .iter()
            .zip(self.log_weights.iter().zip(self.normalizers.iter()))
            .map(|(c, (log_w, norm))| log_w + c.log_kernel(x, ln_x) - norm)
            .collect()
    }
}

fn validate_data(data: &[f64]) -> MixtapeResult<()> {
    if data.is_empty() {
        return Err(MixtapeError::configuration(
            "data",
            "must contain at least one observation",
        ));
    }
    for &x in data {
        validate_positive(x, "GammaMixtureModel")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GammaUpdateFlags;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_solve_shape_recovers_known_shapes() {
        for &shape in &[0.05, 0.5, 1.0, 2.5, 40.0, 1e4] {
            let s = ln_minus_digamma(shape).unwrap();
            let solved = solve_shape(s, 1e-12, 100).unwrap();
            assert!(
                ((solved - shape) / shape).abs() < 1e-8,
                "shape {} solved as {}",
                shape,
                solved
            );
        }
    }

    #[test]
    fn test_solve_shape_degenerate_statistic() {
        for s in [0.0, -1e-3, f64::NAN] {
            match solve_shape(s, 1e-10, 100) {
                Err(err @ MixtapeError::ConvergenceError { .. }) => assert!(err.is_recoverable()),
                other => panic!("Expected ConvergenceError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_solve_shape_iteration_cap() {
        match solve_shape(0.3, 0.0, 1) {
            Err(MixtapeError::ConvergenceError { iterations, .. }) => assert_eq!(iterations, 1),
            other => panic!("Expected ConvergenceError, got {:?}", other),
        }
    }

    #[test]
    fn test_single_component_matches_mle() {
        let data = [0.4, 1.1, 2.3, 0.8, 3.9, 1.7, 0.2, 2.8, 1.4, 0.9];
        let model = GammaMixtureModel::new(GammaMixtureConfig::new(1).with_tolerance(1e-10)).unwrap();
        let fit = model.fit(&data).unwrap();

        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let mean_log = data.iter().map(|x| x.ln()).sum::<f64>() / n;
        let shape = solve_shape(mean.ln() - mean_log, 1e-12, 100).unwrap();
        let component = fit.params.components[0];
        assert_approx_eq!(component.shape, shape, 1e-9);
        assert_approx_eq!(component.scale, mean / shape, 1e-9);
        assert_approx_eq!(fit.params.weights[0], 1.0, 1e-15);
        assert!(fit.summary.converged);
    }

    #[test]
    fn test_flat_sample_keeps_previous_shape() {
        let data = vec![2.0; 50];
        let model = GammaMixtureModel::new(GammaMixtureConfig::new(1)).unwrap();
        let initial = model.initialize(&data).unwrap();
        let fit = model.fit(&data).unwrap();
        assert_eq!(fit.params.components[0].shape, initial.components[0].shape);
        assert_approx_eq!(fit.params.components[0].mean(), 2.0, 1e-9);
        assert!(fit.summary.log_likelihood.is_finite());
    }

    #[test]
    fn test_shape_iteration_cap_keeps_previous_shape() {
        let data = [0.4, 1.1, 2.3, 0.8, 3.9];
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let mean_log = data.iter().map(|x| x.ln()).sum::<f64>() / n;
        assert!(matches!(
            solve_shape(mean.ln() - mean_log, 1e-14, 1),
            Err(MixtapeError::ConvergenceError { iterations: 1, .. })
        ));

        let config = GammaMixtureConfig::new(1)
            .with_newton(1e-14, 1)
            .with_max_iterations(1);
        let model = GammaMixtureModel::new(config).unwrap();
        let initial = GammaMixtureParameters::new(vec![1.0], vec![GammaComponent::new(3.0, 0.5).unwrap()]).unwrap();
        let fit = model.fit_from(&data, initial).unwrap();

        let component = fit.params.components[0];
        assert_eq!(component.shape, 3.0);
        assert_approx_eq!(component.scale, mean / 3.0, 1e-12);
        assert_eq!(fit.summary.iterations, 1);
        assert!(!fit.summary.converged);
    }

    #[test]
    fn test_inconsistent_parameters_are_rejected() {
        let model = GammaMixtureModel::new(GammaMixtureConfig::new(2)).unwrap();
        let params = GammaMixtureParameters {
            weights: vec![0.5, 0.5],
            components: vec![GammaComponent::new(2.0, 1.0).unwrap()],
        };
        assert!(matches!(
            model.predict(&params, &[1.0, 2.0]),
            Err(MixtapeError::DimensionMismatch { .. })
        ));
        let params = GammaMixtureParameters {
            weights: vec![0.7, 0.7],
            components: vec![GammaComponent::new(2.0, 1.0).unwrap(); 2],
        };
        assert!(matches!(
            model.score(&params, &[1.0, 2.0]),
            Err(MixtapeError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_initialisation_orders_components() {
        let mut data: Vec<f64> = (1..=50).map(|i| 0.01 * i as f64).collect();
        data.extend((1..=50).map(|i| 10.0 + 0.1 * i as f64));
        let model = GammaMixtureModel::new(GammaMixtureConfig::new(2)).unwrap();
        let params = model.initialize(&data).unwrap();
        assert_eq!(params.weights, vec![0.5, 0.5]);
        assert!(params.components[0].mean() < 1.0);
        assert!(params.components[1].mean() > 10.0);
        assert_approx_eq!(params.components[1].mean(), 12.55, 1e-9);
    }

    #[test]
    fn test_responsibilities_and_prediction() {
        let params = GammaMixtureParameters::new(
            vec![0.5, 0.5],
            vec![
                GammaComponent::new(2.0, 0.5).unwrap(),
                GammaComponent::new(20.0, 1.0).unwrap(),
            ],
        )
        .unwrap();
        let model = GammaMixtureModel::new(GammaMixtureConfig::new(2)).unwrap();
        let data = [0.8, 1.2, 19.0, 22.0];
        let proba = model.predict_proba(&params, &data).unwrap();
        for row in &proba {
            assert_approx_eq!(row.iter().sum::<f64>(), 1.0, 1e-12);
        }
        assert_eq!(model.predict(&params, &data).unwrap(), vec![0, 0, 1, 1]);

        let total = model.score(&params, &data).unwrap();
        let samples = model.score_samples(&params, &data).unwrap();
        assert_approx_eq!(total, samples.iter().sum::<f64>(), 1e-12);
    }

    #[test]
    fn test_frozen_weights() {
        let data: Vec<f64> = (1..=200).map(|i| 0.05 * i as f64).collect();
        let config = GammaMixtureConfig::new(2).with_update(GammaUpdateFlags {
            weights: false,
            ..GammaUpdateFlags::all()
        });
        let model = GammaMixtureModel::new(config).unwrap();
        let initial = GammaMixtureParameters::new(
            vec![0.2, 0.8],
            vec![
                GammaComponent::new(1.0, 1.0).unwrap(),
                GammaComponent::new(5.0, 1.0).unwrap(),
            ],
        )
        .unwrap();
        let fit = model.fit_from(&data, initial).unwrap();
        assert_eq!(fit.params.weights, vec![0.2, 0.8]);
    }

    #[test]
    fn test_data_validation() {
        let model = GammaMixtureModel::new(GammaMixtureConfig::new(2)).unwrap();
        assert!(matches!(model.fit(&[]), Err(MixtapeError::ConfigurationError { .. })));
        assert!(matches!(
            model.fit(&[1.0, 0.0, 2.0]),
            Err(MixtapeError::DomainError { .. })
        ));
        assert!(matches!(
            model.fit(&[1.0, -3.0]),
            Err(MixtapeError::DomainError { .. })
        ));
        assert!(matches!(model.fit(&[1.0]), Err(MixtapeError::ConfigurationError { .. })));
    }
}
