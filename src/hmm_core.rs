//! Core hidden Markov model recursions.
//!
//! Scaled forward-backward and Viterbi decoding over a precomputed matrix of
//! log emission probabilities `log_b[t][i] = ln b_i(o_t)`. The recursions know
//! nothing about the emission family, so they are shared by every model that can
//! produce such a matrix.
//!
//! Scaling works in two layers. Each row of `log_b` is shifted by its maximum `m_t`
//! before exponentiation so that at least one state has emission weight one, and the
//! forward variables are renormalised to sum to one at every step with scale `s_t`.
//! The sequence log-likelihood is `Σ_t (ln s_t + m_t)`.

use crate::errors::{MixtapeError, MixtapeResult};
use crate::math_utils::argmax;

/// Posterior quantities from one forward-backward pass.
#[derive(Debug, Clone)]
pub struct Posteriors {
    /// `gamma[t][i] = P(q_t = i | O)`; every row sums to one
    pub gamma: Vec<Vec<f64>>,
    /// `xi_sum[i][j] = Σ_t P(q_t = i, q_{t+1} = j | O)`
    pub xi_sum: Vec<Vec<f64>>,
    /// `ln P(O)`
    pub log_likelihood: f64,
}

/// Scaled forward variables.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    /// `alpha_hat[t][i] = P(q_t = i | o_0..=o_t)`
    pub alpha_hat: Vec<Vec<f64>>,
    /// Per-step scale `s_t` of the max-shifted emissions
    pub scales: Vec<f64>,
    /// Max-shifted emission weights `exp(log_b[t][i] - m_t)`
    pub emission_weights: Vec<Vec<f64>>,
    /// `ln P(O)`
    pub log_likelihood: f64,
}

fn check_shapes(startprob: &[f64], transmat: &[Vec<f64>], log_b: &[Vec<f64>]) -> MixtapeResult<usize> {
    let n = startprob.len();
    if n == 0 {
        return Err(MixtapeError::configuration("num_states", "must be at least 1"));
    }
    if log_b.is_empty() {
        return Err(MixtapeError::configuration(
            "sequence",
            "must contain at least one time step",
        ));
    }
    if transmat.len() != n {
        return Err(MixtapeError::DimensionMismatch {
            context: "transition matrix rows".to_string(),
            expected: n,
            actual: transmat.len(),
        });
    }
    if let Some((i, row)) = transmat.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(MixtapeError::DimensionMismatch {
            context: format!("transition matrix row {}", i),
            expected: n,
            actual: row.len(),
        });
    }
    if let Some(row) = log_b.iter().find(|row| row.len() != n) {
        return Err(MixtapeError::DimensionMismatch {
            context: "log emission row".to_string(),
            expected: n,
            actual: row.len(),
        });
    }
    Ok(n)
}

/// Scaled forward recursion.
///
/// # Errors
/// [`MixtapeError::ConfigurationError`] for an empty sequence or zero states,
/// [`MixtapeError::DimensionMismatch`] for inconsistent shapes (including ragged
/// transition rows), and
/// [`MixtapeError::NumericalInstability`] if a step assigns zero probability to every
/// state or produces a non-finite scale.
pub fn forward(startprob: &[f64], transmat: &[Vec<f64>], log_b: &[Vec<f64>]) -> MixtapeResult<ForwardPass> {
    let n = check_shapes(startprob, transmat, log_b)?;
    let t_len = log_b.len();

    let mut emission_weights = Vec::with_capacity(t_len);
    let mut max_shift = Vec::with_capacity(t_len);
    for (t, row) in log_b.iter().enumerate() {
        let m = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !m.is_finite() {
            return Err(MixtapeError::instability(
                "forward",
                format!("no state can emit observation {} (max log emission {})", t, m),
            ));
        }
        emission_weights.push(row.iter().map(|&l| (l - m).exp()).collect::<Vec<f64>>());
        max_shift.push(m);
    }

    let mut alpha_hat = vec![vec![0.0; n]; t_len];
    let mut scales = vec![0.0; t_len];

    for i in 0..n {
        alpha_hat[0][i] = startprob[i] * emission_weights[0][i];
    }
    scales[0] = normalize_step(&mut alpha_hat[0], 0)?;

    for t in 1..t_len {
        for j in 0..n {
            let mut acc = 0.0;
            for i in 0..n {
                acc += alpha_hat[t - 1][i] * transmat[i][j];
            }
            alpha_hat[t][j] = acc * emission_weights[t][j];
        }
        scales[t] = normalize_step(&mut alpha_hat[t], t)?;
    }

    let log_likelihood = scales
        .iter()
        .zip(max_shift.iter())
        .map(|(s, m)| s.ln() + m)
        .sum();

    Ok(ForwardPass {
        alpha_hat,
        scales,
        emission_weights,
        log_likelihood,
    })
}

fn normalize_step(alpha: &mut [f64], t: usize) -> MixtapeResult<f64> {
    let scale: f64 = alpha.iter().sum();
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(MixtapeError::instability(
            "forward",
            format!("scale factor at step {} is {}", t, scale),
        ));
    }
    let inv = 1.0 / scale;
    for a in alpha.iter_mut() {
        *a *= inv;
    }
    Ok(scale)
}

/// Scaled forward-backward pass returning state posteriors and summed pairwise
/// transition posteriors.
pub fn forward_backward(
    startprob: &[f64],
    transmat: &[Vec<f64>],
    log_b: &[Vec<f64>],
) -> MixtapeResult<Posteriors> {
    let ForwardPass {
        alpha_hat,
        scales,
        emission_weights,
        log_likelihood,
    } = forward(startprob, transmat, log_b)?;
    let n = startprob.len();
    let t_len = log_b.len();

    // Backward pass with the forward scales
    let mut beta_hat = vec![vec![1.0; n]; t_len];
    for t in (0..t_len - 1).rev() {
        let inv_scale = 1.0 / scales[t + 1];
        for i in 0..n {
            let mut acc = 0.0;
            for j in 0..n {
                acc += transmat[i][j] * emission_weights[t + 1][j] * beta_hat[t + 1][j];
            }
            beta_hat[t][i] = acc * inv_scale;
        }
    }

    let mut gamma = vec![vec![0.0; n]; t_len];
    for t in 0..t_len {
        let mut sum = 0.0;
        for i in 0..n {
            gamma[t][i] = alpha_hat[t][i] * beta_hat[t][i];
            sum += gamma[t][i];
        }
        // Exact in infinite precision; renormalise away rounding
        if sum > 0.0 {
            let inv = 1.0 / sum;
            for g in gamma[t].iter_mut() {
                *g *= inv;
            }
        }
    }

    let mut xi_sum = vec![vec![0.0; n]; n];
    for t in 0..t_len.saturating_sub(1) {
        let inv_scale = 1.0 / scales[t + 1];
        for i in 0..n {
            let a = alpha_hat[t][i] * inv_scale;
            if a == 0.0 {
                continue;
            }
            for j in 0..n {
                xi_sum[i][j] += a * transmat[i][j] * emission_weights[t + 1][j] * beta_hat[t + 1][j];
            }
        }
    }

    Ok(Posteriors {
        gamma,
        xi_sum,
        log_likelihood,
    })
}

/// Most likely state path and its joint log probability `ln P(O, Q*)`.
///
/// Works in log space; ties between predecessors or final states go to the lowest
/// state index.
pub fn viterbi(
    startprob: &[f64],
    transmat: &[Vec<f64>],
    log_b: &[Vec<f64>],
) -> MixtapeResult<(Vec<usize>, f64)> {
    let n = check_shapes(startprob, transmat, log_b)?;
    let t_len = log_b.len();

    let log_a: Vec<Vec<f64>> = transmat
        .iter()
        .map(|row| row.iter().map(|p| p.ln()).collect())
        .collect();

    let mut delta: Vec<f64> = (0..n).map(|j| startprob[j].ln() + log_b[0][j]).collect();
    let mut backpointers = vec![vec![0usize; n]; t_len];

    for t in 1..t_len {
        let mut next = vec![f64::NEG_INFINITY; n];
        for j in 0..n {
            let mut best_value = f64::NEG_INFINITY;
            let mut best_state = 0;
            for i in 0..n {
                let value = delta[i] + log_a[i][j];
                if value > best_value {
                    best_value = value;
                    best_state = i;
                }
            }
            next[j] = best_value + log_b[t][j];
            backpointers[t][j] = best_state;
        }
        delta = next;
    }

    let last = argmax(&delta);
    let log_prob = delta[last];

    let mut path = vec![0; t_len];
    path[t_len - 1] = last;
    for t in (1..t_len).rev() {
        path[t - 1] = backpointers[t][path[t]];
    }

    Ok((path, log_prob))
}
