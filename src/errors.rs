//! Error types and validation functions for mixture and hidden Markov model fitting.
//!
//! Every fallible operation in the crate returns [`MixtapeResult`]. Errors are local
//! to a single call; nothing here holds global state.

use thiserror::Error;

/// Error taxonomy for special functions, spline inversion and EM fitting.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MixtapeError {
    /// Input outside the mathematical domain of a function.
    #[error("Domain error in {function}: value {value} violates {constraint}")]
    DomainError {
        /// Function or routine that rejected the input
        function: String,
        /// Offending value
        value: f64,
        /// Description of the valid domain
        constraint: String,
    },

    /// Observation or parameter vector with the wrong length.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Where the mismatch was detected
        context: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Iterative solver did not reach its tolerance within the iteration budget.
    #[error("{routine} did not converge after {iterations} iterations (last step {last_step:.3e})")]
    ConvergenceError {
        /// Name of the iterative routine
        routine: String,
        /// Iterations performed
        iterations: usize,
        /// Magnitude of the final update
        last_step: f64,
    },

    /// Invalid hyperparameter or structurally unusable input.
    #[error("Invalid configuration: {parameter} {reason}")]
    ConfigurationError {
        /// Offending hyperparameter or input
        parameter: String,
        /// What is wrong with it
        reason: String,
    },

    /// Non-finite values or broken invariants detected mid-fit.
    #[error("Numerical instability during {stage}: {message}")]
    NumericalInstability {
        /// EM stage where the problem surfaced
        stage: String,
        /// Description of the instability
        message: String,
    },
}

/// Result type for all fallible operations in this crate.
pub type MixtapeResult<T> = Result<T, MixtapeError>;

impl MixtapeError {
    /// Shorthand for a [`MixtapeError::DomainError`].
    pub fn domain(function: &str, value: f64, constraint: &str) -> Self {
        MixtapeError::DomainError {
            function: function.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }

    /// Shorthand for a [`MixtapeError::ConfigurationError`].
    pub fn configuration(parameter: &str, reason: impl Into<String>) -> Self {
        MixtapeError::ConfigurationError {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`MixtapeError::NumericalInstability`].
    pub fn instability(stage: &str, message: impl Into<String>) -> Self {
        MixtapeError::NumericalInstability {
            stage: stage.to_string(),
            message: message.into(),
        }
    }

    /// True for errors a caller may recover from by keeping its previous estimate.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MixtapeError::ConvergenceError { .. })
    }
}

/// Validates that a value is finite and not NaN.
///
/// Used on log-likelihoods and single parameters right after each EM step.
///
/// # Example
/// ```rust
/// use mixtape::errors::validate_finite;
///
/// assert!(validate_finite(1.0, "loglik", "e-step").is_ok());
/// assert!(validate_finite(f64::NAN, "loglik", "e-step").is_err());
/// ```
pub fn validate_finite(value: f64, name: &str, stage: &str) -> MixtapeResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MixtapeError::instability(
            stage,
            format!("{} is not finite: {}", name, value),
        ))
    }
}

/// Validates that all values in a slice are finite.
///
/// Returns on the first offending element and reports its index.
pub fn validate_all_finite(data: &[f64], name: &str, stage: &str) -> MixtapeResult<()> {
    if let Some((i, &value)) = data.iter().enumerate().find(|(_, &v)| !v.is_finite()) {
        let value_desc = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };

        return Err(MixtapeError::instability(
            stage,
            format!(
                "{} contains non-finite value at index {}: {}",
                name, i, value_desc
            ),
        ));
    }

    Ok(())
}

/// Validates that `value` lies strictly above zero.
pub fn validate_positive(value: f64, function: &str) -> MixtapeResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MixtapeError::domain(function, value, "x > 0"))
    }
}

/// Validates a probability vector: non-negative entries summing to one.
pub fn validate_probability_vector(probs: &[f64], name: &str, stage: &str) -> MixtapeResult<()> {
    const TOLERANCE: f64 = 1e-8;

    validate_all_finite(probs, name, stage)?;
    if let Some(&p) = probs.iter().find(|&&p| p < 0.0) {
        return Err(MixtapeError::instability(
            stage,
            format!("{} has a negative entry: {}", name, p),
        ));
    }

    let total: f64 = probs.iter().sum();
    if (total - 1.0).abs() > TOLERANCE {
        return Err(MixtapeError::instability(
            stage,
            format!("{} sums to {} instead of 1", name, total),
        ));
    }

    Ok(())
}

/// Validates a square row-stochastic matrix of the given size.
pub fn validate_stochastic_matrix(
    matrix: &[Vec<f64>],
    size: usize,
    name: &str,
    stage: &str,
) -> MixtapeResult<()> {
    if matrix.len() != size {
        return Err(MixtapeError::DimensionMismatch {
            context: name.to_string(),
            expected: size,
            actual: matrix.len(),
        });
    }

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != size {
            return Err(MixtapeError::DimensionMismatch {
                context: format!("{} row {}", name, i),
                expected: size,
                actual: row.len(),
            });
        }
        validate_probability_vector(row, &format!("{} row {}", name, i), stage)?;
    }

    Ok(())
}
