//! Baum-Welch estimation for hidden Markov models with von Mises emissions.
//!
//! Each hidden state emits a vector of angles whose coordinates are independent von
//! Mises variates. Any number of independent sequences can share one model; the
//! E-step runs per sequence (in parallel with the `parallel` feature) and the
//! resulting sufficient statistics are summed before the M-step builds a fresh
//! parameter set.
//!
//! # Example
//! ```rust
//! use mixtape::config::VonMisesHmmConfig;
//! use mixtape::vonmises_hmm::VonMisesHMM;
//!
//! let sequence: Vec<Vec<f64>> = (0..40)
//!     .map(|t| vec![if (t / 10) % 2 == 0 { 0.1 } else { 3.0 }])
//!     .collect();
//! let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(2).with_seed(7)).unwrap();
//! let fit = hmm.fit(&[sequence.clone()]).unwrap();
//! let path = hmm.predict(&fit.params, &sequence).unwrap();
//! assert_eq!(path.len(), 40);
//! ```

use crate::{
    config::{InitStrategy, VonMisesHmmConfig},
    emission_models::VonMisesEmission,
    errors::{validate_all_finite, validate_finite, MixtapeError, MixtapeResult},
    hmm_core::{forward, forward_backward, viterbi},
    math_utils::{constants, floor_and_normalize, resultant},
    results::{supplied_parameter_error, FitSummary, HMMParameters, ModelCriteria, VonMisesFit},
    secure_rng::SecureRng,
    spline_eval::{default_evaluator, Clamp, SplineEvaluator},
};
use std::f64::consts::PI;
use std::time::Instant;

/// Self-transition probability of the initial transition matrix.
const INITIAL_PERSISTENCE: f64 = 0.7;

/// Concentration assigned to every state at initialisation.
const INITIAL_KAPPA: f64 = 1.0;

/// Lloyd iterations after k-means++ seeding.
const KMEANS_MAX_ITERATIONS: usize = 100;

/// Expected sufficient statistics of one or more sequences.
///
/// Built fresh from a parameter snapshot and summed across sequences; never
/// mutated after the M-step has consumed it.
#[derive(Debug, Clone)]
pub struct SufficientStatistics {
    /// `Σ_seq γ_0(i)`
    pub start: Vec<f64>,
    /// `Σ_seq Σ_t ξ_t(i, j)`
    pub xi: Vec<Vec<f64>>,
    /// `Σ_seq Σ_t γ_t(i)`
    pub gamma_sum: Vec<f64>,
    /// `Σ γ_t(i) cos θ_t[d]`
    pub cos_sum: Vec<Vec<f64>>,
    /// `Σ γ_t(i) sin θ_t[d]`
    pub sin_sum: Vec<Vec<f64>>,
    /// Total log-likelihood
    pub log_likelihood: f64,
    /// Number of sequences accumulated
    pub num_sequences: usize,
    /// Number of time steps accumulated
    pub num_observations: usize,
}

impl SufficientStatistics {
    pub fn zeros(num_states: usize, num_dims: usize) -> Self {
        Self {
            start: vec![0.0; num_states],
            xi: vec![vec![0.0; num_states]; num_states],
            gamma_sum: vec![0.0; num_states],
            cos_sum: vec![vec![0.0; num_dims]; num_states],
            sin_sum: vec![vec![0.0; num_dims]; num_states],
            log_likelihood: 0.0,
            num_sequences: 0,
            num_observations: 0,
        }
    }

    /// Runs forward-backward on one sequence and collects its statistics.
    pub fn from_sequence(params: &HMMParameters, sequence: &[Vec<f64>]) -> MixtapeResult<Self> {
        let n = params.num_states();
        let d = params.num_dims();
        let log_b = log_emissions(params, sequence);
        let posteriors = forward_backward(&params.startprob, &params.transmat, &log_b)?;

        let mut stats = Self::zeros(n, d);
        stats.start.copy_from_slice(&posteriors.gamma[0]);
        stats.xi = posteriors.xi_sum;
        stats.log_likelihood = posteriors.log_likelihood;
        stats.num_sequences = 1;
        stats.num_observations = sequence.len();

        let mut cos_theta = vec![0.0; d];
        let mut sin_theta = vec![0.0; d];
        for (angles, gamma_t) in sequence.iter().zip(posteriors.gamma.iter()) {
            for k in 0..d {
                let (s, c) = angles[k].sin_cos();
                sin_theta[k] = s;
                cos_theta[k] = c;
            }
            for i in 0..n {
                let g = gamma_t[i];
                stats.gamma_sum[i] += g;
                for k in 0..d {
                    stats.cos_sum[i][k] += g * cos_theta[k];
                    stats.sin_sum[i][k] += g * sin_theta[k];
                }
            }
        }

        Ok(stats)
    }

    /// Adds another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        add_into(&mut self.start, &other.start);
        add_into(&mut self.gamma_sum, &other.gamma_sum);
        for (row, other_row) in self.xi.iter_mut().zip(other.xi.iter()) {
            add_into(row, other_row);
        }
        for (row, other_row) in self.cos_sum.iter_mut().zip(other.cos_sum.iter()) {
            add_into(row, other_row);
        }
        for (row, other_row) in self.sin_sum.iter_mut().zip(other.sin_sum.iter()) {
            add_into(row, other_row);
        }
        self.log_likelihood += other.log_likelihood;
        self.num_sequences += other.num_sequences;
        self.num_observations += other.num_observations;
    }
}

fn add_into(target: &mut [f64], source: &[f64]) {
    for (t, s) in target.iter_mut().zip(source.iter()) {
        *t += s;
    }
}

/// `log_b[t][i] = ln b_i(o_t)` for a sequence already checked against the model.
pub fn log_emissions(params: &HMMParameters, sequence: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let normalizers: Vec<f64> = params
        .emissions
        .iter()
        .map(VonMisesEmission::log_normalizer)
        .collect();

    sequence
        .iter()
        .map(|angles| {
            params
                .emissions
                .iter()
                .zip(normalizers.iter())
                .map(|(emission, norm)| emission.log_kernel(angles) - norm)
                .collect()
        })
        .collect()
}

/// Von Mises HMM estimator.
#[derive(Debug, Clone)]
pub struct VonMisesHMM {
    config: VonMisesHmmConfig,
    evaluator: SplineEvaluator,
}

impl VonMisesHMM {
    /// Creates an estimator using the shipped Bessel-ratio table.
    pub fn new(config: VonMisesHmmConfig) -> MixtapeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator: default_evaluator().clone(),
        })
    }

    /// Replaces the concentration lookup table.
    pub fn with_evaluator(mut self, evaluator: SplineEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn config(&self) -> &VonMisesHmmConfig {
        &self.config
    }

    /// Fits from seeded initial parameters.
    pub fn fit(&self, sequences: &[Vec<Vec<f64>>]) -> MixtapeResult<VonMisesFit> {
        let initial = self.initialize(sequences)?;
        self.run_em(sequences, initial)
    }

    /// Fits starting from caller-supplied parameters.
    pub fn fit_from(
        &self,
        sequences: &[Vec<Vec<f64>>],
        initial: HMMParameters,
    ) -> MixtapeResult<VonMisesFit> {
        if initial.num_states() != self.config.num_states {
            return Err(MixtapeError::DimensionMismatch {
                context: "initial parameter states".to_string(),
                expected: self.config.num_states,
                actual: initial.num_states(),
            });
        }
        initial.validate("initialisation")?;
        validate_sequences(sequences, Some(initial.num_dims()))?;
        self.run_em(sequences, initial)
    }

    /// Initial parameters: uniform start, persistent transitions, `κ = 1`, and mean
    /// directions from the configured [`InitStrategy`].
    pub fn initialize(&self, sequences: &[Vec<Vec<f64>>]) -> MixtapeResult<HMMParameters> {
        let num_dims = validate_sequences(sequences, None)?;
        let n = self.config.num_states;
        let mut rng = SecureRng::from_seed_option(self.config.seed);

        let centroids = match self.config.init {
            InitStrategy::Random => (0..n)
                .map(|_| (0..num_dims).map(|_| rng.uniform(-PI, PI)).collect())
                .collect(),
            InitStrategy::KMeansPlusPlus => {
                let points: Vec<&[f64]> = sequences.iter().flatten().map(Vec::as_slice).collect();
                circular_kmeans(&points, n, &mut rng)
            }
        };

        let emissions = centroids
            .into_iter()
            .map(|means| VonMisesEmission {
                means,
                kappas: vec![INITIAL_KAPPA; num_dims],
            })
            .collect();

        HMMParameters::new(vec![1.0 / n as f64; n], persistent_transitions(n), emissions)
    }

    /// Total log-likelihood of one sequence.
    pub fn score(&self, params: &HMMParameters, sequence: &[Vec<f64>]) -> MixtapeResult<f64> {
        check_params(params, "score")?;
        validate_sequence(sequence, params.num_dims(), 0)?;
        let log_b = log_emissions(params, sequence);
        Ok(forward(&params.startprob, &params.transmat, &log_b)?.log_likelihood)
    }

    /// Total log-likelihood of several independent sequences.
    pub fn score_sequences(&self, params: &HMMParameters, sequences: &[Vec<Vec<f64>>]) -> MixtapeResult<f64> {
        check_params(params, "score_sequences")?;
        validate_sequences(sequences, Some(params.num_dims()))?;
        sequences.iter().try_fold(0.0, |acc, sequence| {
            let log_b = log_emissions(params, sequence);
            Ok(acc + forward(&params.startprob, &params.transmat, &log_b)?.log_likelihood)
        })
    }

    /// State posteriors `γ_t(i)` of one sequence.
    pub fn predict_proba(&self, params: &HMMParameters, sequence: &[Vec<f64>]) -> MixtapeResult<Vec<Vec<f64>>> {
        check_params(params, "predict_proba")?;
        validate_sequence(sequence, params.num_dims(), 0)?;
        let log_b = log_emissions(params, sequence);
        Ok(forward_backward(&params.startprob, &params.transmat, &log_b)?.gamma)
    }

    /// Viterbi path and its joint log probability.
    pub fn decode(&self, params: &HMMParameters, sequence: &[Vec<f64>]) -> MixtapeResult<(Vec<usize>, f64)> {
        check_params(params, "decode")?;
        validate_sequence(sequence, params.num_dims(), 0)?;
        let log_b = log_emissions(params, sequence);
        viterbi(&params.startprob, &params.transmat, &log_b)
    }

    /// Viterbi path.
    pub fn predict(&self, params: &HMMParameters, sequence: &[Vec<f64>]) -> MixtapeResult<Vec<usize>> {
        Ok(self.decode(params, sequence)?.0)
    }

    fn run_em(&self, sequences: &[Vec<Vec<f64>>], initial: HMMParameters) -> MixtapeResult<VonMisesFit> {
        let started = Instant::now();
        let mut params = initial;
        let mut stats = self.e_step(&params, sequences)?;
        let mut history = Vec::with_capacity(self.config.max_iterations + 1);
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.config.max_iterations {
            let next_params = self.m_step(&params, &stats)?;
            next_params.validate("m-step")?;
            let next_stats = self.e_step(&next_params, sequences)?;

            let improvement = next_stats.log_likelihood - stats.log_likelihood;
            let slack = constants::MAX_RELATIVE_DECREASE * stats.log_likelihood.abs().max(1.0);
            if improvement < -slack {
                log::warn!(
                    "von Mises HMM step {} lowered the log-likelihood from {:.6} to {:.6}; keeping the previous parameters",
                    iterations + 1,
                    stats.log_likelihood,
                    next_stats.log_likelihood
                );
                break;
            }

            history.push(stats.log_likelihood);
            iterations += 1;
            log::debug!(
                "von Mises HMM iteration {}: log-likelihood {:.6} (delta {:.3e})",
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
                        "von Mises HMM stopped by time budget after {} iterations ({:?})",
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
                "von Mises HMM converged after {} iterations, log-likelihood {:.6}",
                iterations,
                stats.log_likelihood
            );
        } else {
            log::info!(
                "von Mises HMM stopped after {} iterations without meeting tolerance {:e}",
                iterations,
                self.config.convergence_tolerance
            );
        }

        let criteria = ModelCriteria::new(
            stats.log_likelihood,
            params.num_free_parameters(),
            stats.num_observations,
        );
        Ok(VonMisesFit {
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

    fn e_step(&self, params: &HMMParameters, sequences: &[Vec<Vec<f64>>]) -> MixtapeResult<SufficientStatistics> {
        #[cfg(feature = "parallel")]
        let per_sequence: Vec<MixtapeResult<SufficientStatistics>> = {
            use rayon::prelude::*;
            sequences
                .par_iter()
                .map(|sequence| SufficientStatistics::from_sequence(params, sequence))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let per_sequence: Vec<MixtapeResult<SufficientStatistics>> = sequences
            .iter()
            .map(|sequence| SufficientStatistics::from_sequence(params, sequence))
            .collect();

        // Summed in sequence order so results do not depend on thread scheduling
        let mut total = SufficientStatistics::zeros(params.num_states(), params.num_dims());
        for stats in per_sequence {
            total.merge(&stats?);
        }

        validate_finite(total.log_likelihood, "log-likelihood", "e-step")?;
        validate_all_finite(&total.gamma_sum, "state occupancy", "e-step")?;
        Ok(total)
    }

    fn m_step(&self, params: &HMMParameters, stats: &SufficientStatistics) -> MixtapeResult<HMMParameters> {
        let update = self.config.update;

        let startprob = if update.startprob {
            let mut startprob: Vec<f64> = stats
                .start
                .iter()
                .map(|s| s / stats.num_sequences as f64)
                .collect();
            floor_and_normalize(&mut startprob, self.config.startprob_floor);
            startprob
        } else {
            params.startprob.clone()
        };

        let mut transmat = params.transmat.clone();
        if update.transmat {
            for (i, row) in transmat.iter_mut().enumerate() {
                let mass: f64 = stats.xi[i].iter().sum();
                if mass > constants::MIN_POSTERIOR_MASS {
                    row.copy_from_slice(&stats.xi[i]);
                    floor_and_normalize(row, self.config.transition_floor);
                }
            }
        }

        let mut emissions = params.emissions.clone();
        for (state, emission) in emissions.iter_mut().enumerate() {
            let mass = stats.gamma_sum[state];
            if mass <= constants::MIN_POSTERIOR_MASS {
                log::debug!("state {} has no posterior mass; keeping its emission parameters", state);
                continue;
            }
            for k in 0..emission.num_dims() {
                let c = stats.cos_sum[state][k];
                let s = stats.sin_sum[state][k];
                let (mean, length) = resultant(c, s, mass);
                if update.means {
                    emission.means[k] = mean;
                }
                if update.kappas {
                    // With a frozen mean the likelihood depends on the projected resultant
                    let r = if update.means {
                        length
                    } else {
                        let mu = emission.means[k];
                        ((c * mu.cos() + s * mu.sin()) / mass).max(0.0)
                    };
                    emission.kappas[k] = self.concentration(r, state, k)?;
                }
            }
        }

        Ok(HMMParameters {
            startprob,
            transmat,
            emissions,
        })
    }

    /// Maximum-likelihood concentration for mean resultant length `r`.
    fn concentration(&self, r: f64, state: usize, dim: usize) -> MixtapeResult<f64> {
        let (kappa, clamp) = self.evaluator.concentration(r);
        match clamp {
            Clamp::Upper => {
                log::warn!(
                    "state {} dimension {}: resultant length {} at the table limit, concentration clamped to {}",
                    state,
                    dim,
                    r,
                    kappa
                );
                Ok(kappa)
            }
            Clamp::Lower => Ok(kappa),
            Clamp::None if self.config.kappa_refinement_steps > 0 => {
                let log_kappa = self
                    .evaluator
                    .refine(r, kappa.ln(), self.config.kappa_refinement_steps)?;
                Ok(log_kappa.exp())
            }
            Clamp::None => Ok(kappa),
        }
    }
}

fn persistent_transitions(n: usize) -> Vec<Vec<f64>> {
    if n == 1 {
        return vec![vec![1.0]];
    }
    let off = (1.0 - INITIAL_PERSISTENCE) / (n - 1) as f64;
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { INITIAL_PERSISTENCE } else { off }).collect())
        .collect()
}

/// Circular distance `Σ_d (1 − cos(a_d − b_d))`.
fn circular_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| 1.0 - (x - y).cos()).sum()
}

/// k-means++ seeding followed by Lloyd iterations with circular means.
fn circular_kmeans(points: &[&[f64]], k: usize, rng: &mut SecureRng) -> Vec<Vec<f64>> {
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(points[rng.usize(0..points.len())].to_vec());

    while centroids.len() < k {
        let distances: Vec<f64> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| circular_distance(p, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let chosen = rng.categorical(&distances);
        centroids.push(points[chosen].to_vec());
    }

    let num_dims = centroids[0].len();
    let mut assignments = vec![usize::MAX; points.len()];
    for _ in 0..KMEANS_MAX_ITERATIONS {
        let mut changed = false;
        for (p, assignment) in points.iter().zip(assignments.iter_mut()) {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (j, c) in centroids.iter().enumerate() {
                let dist = circular_distance(p, c);
                if dist < best_dist {
                    best_dist = dist;
                    best = j;
                }
            }
            if *assignment != best {
                *assignment = best;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut cos_sum = vec![vec![0.0; num_dims]; k];
        let mut sin_sum = vec![vec![0.0; num_dims]; k];
        let mut counts = vec![0usize; k];
        for (p, &j) in points.iter().zip(assignments.iter()) {
            counts[j] += 1;
            for (d, &theta) in p.iter().enumerate() {
                cos_sum[j][d] += theta.cos();
                sin_sum[j][d] += theta.sin();
            }
        }
        for j in 0..k {
            // Empty clusters keep their centroid
            if counts[j] > 0 {
                for d in 0..num_dims {
                    centroids[j][d] = sin_sum[j][d].atan2(cos_sum[j][d]);
                }
            }
        }
    }

    centroids
}

/// Checks a sequence collection and returns its angle dimension.
/// Parameters handed to the scoring and decoding entry points are caller input.
fn check_params(params: &HMMParameters, stage: &str) -> MixtapeResult<()> {
    params.validate(stage).map_err(supplied_parameter_error)
}

fn validate_sequences(sequences: &[Vec<Vec<f64>>], num_dims: Option<usize>) -> MixtapeResult<usize> {
    let first = sequences.first().ok_or_else(|| {
        MixtapeError::configuration("sequences", "must contain at least one sequence")
    })?;
    let num_dims = match num_dims {
        Some(d) => d,
        None => first.first().map_or(0, Vec::len),
    };
    if num_dims == 0 {
        return Err(MixtapeError::configuration(
            "observations",
            "must have at least one angle dimension",
        ));
    }
    for (index, sequence) in sequences.iter().enumerate() {
        validate_sequence(sequence, num_dims, index)?;
    }
    Ok(num_dims)
}

fn validate_sequence(sequence: &[Vec<f64>], num_dims: usize, index: usize) -> MixtapeResult<()> {
    if sequence.is_empty() {
        return Err(MixtapeError::configuration(
            &format!("sequence {}", index),
            "must contain at least one time step",
        ));
    }
    for (t, angles) in sequence.iter().enumerate() {
        if angles.len() != num_dims {
            return Err(MixtapeError::DimensionMismatch {
                context: format!("sequence {} step {}", index, t),
                expected: num_dims,
                actual: angles.len(),
            });
        }
        if let Some(&theta) = angles.iter().find(|a| !a.is_finite()) {
            return Err(MixtapeError::domain("VonMisesHMM", theta, "finite angle"));
        }
    }
    Ok(())
}
