//! Parameter sets and fit results.
//!
//! Parameter structs are replaced wholesale by each M-step; a fit either returns a
//! parameter set that passes `validate` or an error.

use crate::emission_models::{GammaComponent, VonMisesEmission};
use crate::errors::{
    validate_all_finite, validate_probability_vector, validate_stochastic_matrix, MixtapeError,
    MixtapeResult,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a von Mises hidden Markov model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HMMParameters {
    /// Initial-state distribution
    pub startprob: Vec<f64>,
    /// Row-stochastic transition matrix, `transmat[i][j] = P(j | i)`
    pub transmat: Vec<Vec<f64>>,
    /// Emission parameters per state
    pub emissions: Vec<VonMisesEmission>,
}

impl HMMParameters {
    /// Creates a parameter set and checks every invariant.
    pub fn new(
        startprob: Vec<f64>,
        transmat: Vec<Vec<f64>>,
        emissions: Vec<VonMisesEmission>,
    ) -> MixtapeResult<Self> {
        let params = Self {
            startprob,
            transmat,
            emissions,
        };
        params
            .validate("HMMParameters::new")
            .map_err(supplied_parameter_error)?;
        Ok(params)
    }

    pub fn num_states(&self) -> usize {
        self.startprob.len()
    }

    /// Angle dimensions per observation.
    pub fn num_dims(&self) -> usize {
        self.emissions.first().map_or(0, VonMisesEmission::num_dims)
    }

    /// Per-state mean directions, `[state][dim]`.
    pub fn means(&self) -> Vec<Vec<f64>> {
        self.emissions.iter().map(|e| e.means.clone()).collect()
    }

    /// Per-state concentrations, `[state][dim]`.
    pub fn kappas(&self) -> Vec<Vec<f64>> {
        self.emissions.iter().map(|e| e.kappas.clone()).collect()
    }

    /// Free parameters: `(N − 1) + N(N − 1) + 2ND`.
    pub fn num_free_parameters(&self) -> usize {
        let n = self.num_states();
        let d = self.num_dims();
        (n - 1) + n * (n - 1) + 2 * n * d
    }

    /// Checks normalisation, shapes and finiteness.
    ///
    /// Failures during a fit surface as [`MixtapeError::NumericalInstability`] tagged
    /// with `stage`; dimension problems as [`MixtapeError::DimensionMismatch`].
    pub fn validate(&self, stage: &str) -> MixtapeResult<()> {
        let n = self.startprob.len();
        if n == 0 {
            return Err(MixtapeError::configuration("num_states", "must be at least 1"));
        }
        validate_probability_vector(&self.startprob, "startprob", stage)?;
        validate_stochastic_matrix(&self.transmat, n, "transmat", stage)?;

        if self.emissions.len() != n {
            return Err(MixtapeError::DimensionMismatch {
                context: "emission parameters".to_string(),
                expected: n,
                actual: self.emissions.len(),
            });
        }
        let d = self.num_dims();
        for (state, emission) in self.emissions.iter().enumerate() {
            if emission.num_dims() != d {
                return Err(MixtapeError::DimensionMismatch {
                    context: format!("state {} mean directions", state),
                    expected: d,
                    actual: emission.num_dims(),
                });
            }
            validate_all_finite(&emission.means, &format!("state {} means", state), stage)?;
            validate_all_finite(&emission.kappas, &format!("state {} kappas", state), stage)?;
            emission.validate().map_err(|e| MixtapeError::instability(stage, e.to_string()))?;
        }
        Ok(())
    }
}

/// Parameters of a gamma mixture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaMixtureParameters {
    /// Mixing weights, summing to one
    pub weights: Vec<f64>,
    /// Component densities
    pub components: Vec<GammaComponent>,
}

impl GammaMixtureParameters {
    pub fn new(weights: Vec<f64>, components: Vec<GammaComponent>) -> MixtapeResult<Self> {
        let params = Self {
            weights,
            components,
        };
        params
            .validate("GammaMixtureParameters::new")
            .map_err(supplied_parameter_error)?;
        Ok(params)
    }

    pub fn num_components(&self) -> usize {
        self.weights.len()
    }

    pub fn shapes(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.shape).collect()
    }

    pub fn scales(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.scale).collect()
    }

    /// Free parameters: `(K − 1) + 2K`.
    pub fn num_free_parameters(&self) -> usize {
        let k = self.num_components();
        (k - 1) + 2 * k
    }

    pub fn validate(&self, stage: &str) -> MixtapeResult<()> {
        if self.weights.is_empty() {
            return Err(MixtapeError::configuration(
                "num_components",
                "must be at least 1",
            ));
        }
        if self.components.len() != self.weights.len() {
            return Err(MixtapeError::DimensionMismatch {
                context: "gamma components".to_string(),
                expected: self.weights.len(),
                actual: self.components.len(),
            });
        }
        validate_probability_vector(&self.weights, "weights", stage)?;
        for component in &self.components {
            component
                .validate()
                .map_err(|e| MixtapeError::instability(stage, e.to_string()))?;
        }
        Ok(())
    }
}

/// Invalid caller-supplied parameters are a configuration problem, not a fit failure.
pub(crate) fn supplied_parameter_error(err: MixtapeError) -> MixtapeError {
    match err {
        MixtapeError::NumericalInstability { message, .. } => {
            MixtapeError::configuration("parameters", message)
        }
        other => other,
    }
}

/// Information criteria of a fitted model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelCriteria {
    /// Akaike Information Criterion
    pub aic: f64,
    /// Bayesian Information Criterion
    pub bic: f64,
    /// Hannan-Quinn Information Criterion
    pub hqic: f64,
    /// Number of free parameters
    pub num_parameters: usize,
    /// Number of observations the likelihood was computed on
    pub num_observations: usize,
}

impl ModelCriteria {
    pub fn new(log_likelihood: f64, num_parameters: usize, num_observations: usize) -> Self {
        let k = num_parameters as f64;
        let n = (num_observations.max(1)) as f64;
        Self {
            aic: 2.0 * k - 2.0 * log_likelihood,
            bic: k * n.ln() - 2.0 * log_likelihood,
            hqic: 2.0 * k * n.ln().ln().max(0.0) - 2.0 * log_likelihood,
            num_parameters,
            num_observations,
        }
    }
}

/// Outcome of an EM run shared by both estimators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitSummary {
    /// Log-likelihood of the returned parameters
    pub log_likelihood: f64,
    /// Log-likelihood before each M-step, then of the final parameters
    pub history: Vec<f64>,
    /// EM iterations performed
    pub iterations: usize,
    /// True when the tolerance was met before the iteration or time budget ran out
    pub converged: bool,
    /// Information criteria of the returned parameters
    pub criteria: ModelCriteria,
}

/// Fitted von Mises HMM.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VonMisesFit {
    pub params: HMMParameters,
    pub summary: FitSummary,
}

/// Fitted gamma mixture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaMixtureFit {
    pub params: GammaMixtureParameters,
    pub summary: FitSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn two_state() -> HMMParameters {
        HMMParameters::new(
            vec![0.6, 0.4],
            vec![vec![0.9, 0.1], vec![0.2, 0.8]],
            vec![
                VonMisesEmission::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap(),
                VonMisesEmission::new(vec![3.0, -1.0], vec![5.0, 0.0]).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_hmm_parameter_accessors() {
        let params = two_state();
        assert_eq!(params.num_states(), 2);
        assert_eq!(params.num_dims(), 2);
        assert_eq!(params.means()[1], vec![3.0, -1.0]);
        assert_eq!(params.kappas()[0], vec![2.0, 3.0]);
        // 1 + 2 + 8
        assert_eq!(params.num_free_parameters(), 11);
    }

    #[test]
    fn test_hmm_parameter_validation() {
        let mut params = two_state();
        params.transmat[0] = vec![0.5, 0.6];
        assert!(matches!(
            params.validate("m-step"),
            Err(MixtapeError::NumericalInstability { .. })
        ));

        let mut params = two_state();
        params.emissions[1].kappas[0] = f64::NAN;
        match params.validate("m-step") {
            Err(MixtapeError::NumericalInstability { stage, message }) => {
                assert_eq!(stage, "m-step");
                assert!(message.contains("state 1 kappas"));
            }
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }

        let mut params = two_state();
        params.emissions[1] = VonMisesEmission::uniform(3);
        assert!(matches!(
            params.validate("m-step"),
            Err(MixtapeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_gamma_parameters() {
        let params = GammaMixtureParameters::new(
            vec![0.3, 0.7],
            vec![
                GammaComponent::new(2.0, 1.0).unwrap(),
                GammaComponent::new(9.0, 0.5).unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(params.shapes(), vec![2.0, 9.0]);
        assert_eq!(params.scales(), vec![1.0, 0.5]);
        assert_eq!(params.num_free_parameters(), 5);

        assert!(matches!(
            GammaMixtureParameters::new(vec![0.5, 0.4], params.components.clone()),
            Err(MixtapeError::ConfigurationError { .. })
        ));
        assert!(GammaMixtureParameters::new(vec![1.0], params.components).is_err());
    }

    #[test]
    fn test_model_criteria() {
        let criteria = ModelCriteria::new(-100.0, 5, 1000);
        assert_approx_eq!(criteria.aic, 210.0, 1e-12);
        assert_approx_eq!(criteria.bic, 5.0 * 1000f64.ln() + 200.0, 1e-12);
        assert!(criteria.bic > criteria.aic);
        assert!(criteria.hqic > criteria.aic);
    }
}
