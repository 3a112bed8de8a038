//! # Estimator Configuration
//!
//! Hyperparameters for the von Mises HMM, the gamma mixture and the offline
//! spline grid. Every struct has a `Default`, `with_*` builders and a `validate`
//! method that rejects unusable settings with a
//! [`MixtapeError::ConfigurationError`].

use crate::errors::{MixtapeError, MixtapeResult};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which HMM parameters the M-step re-estimates.
///
/// Frozen parameters keep their initial value for the whole fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HmmUpdateFlags {
    /// Update the initial-state distribution
    pub startprob: bool,
    /// Update the transition matrix
    pub transmat: bool,
    /// Update per-state mean directions
    pub means: bool,
    /// Update per-state concentrations
    pub kappas: bool,
}

impl HmmUpdateFlags {
    /// Re-estimate everything.
    pub fn all() -> Self {
        Self {
            startprob: true,
            transmat: true,
            means: true,
            kappas: true,
        }
    }

    /// Freeze everything; `fit` then only evaluates the likelihood.
    pub fn none() -> Self {
        Self {
            startprob: false,
            transmat: false,
            means: false,
            kappas: false,
        }
    }
}

impl Default for HmmUpdateFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// How emission parameters are initialised when none are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitStrategy {
    /// k-means++ seeding of mean directions under the circular distance `1 - cos`
    KMeansPlusPlus,
    /// Mean directions drawn uniformly on the circle
    Random,
}

/// Configuration for [`crate::vonmises_hmm::VonMisesHMM`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VonMisesHmmConfig {
    /// Number of hidden states
    pub num_states: usize,
    /// Stop when the log-likelihood gain drops below this value
    pub convergence_tolerance: f64,
    /// Hard cap on EM iterations
    pub max_iterations: usize,
    /// Pseudo-count added to every transition before row normalisation
    pub transition_floor: f64,
    /// Pseudo-count added to every initial-state probability
    pub startprob_floor: f64,
    /// Parameters re-estimated by the M-step
    pub update: HmmUpdateFlags,
    /// Initialisation when no parameters are supplied
    pub init: InitStrategy,
    /// Newton steps polishing each spline concentration lookup (0 disables)
    pub kappa_refinement_steps: usize,
    /// Wall-clock budget checked between iterations
    pub max_duration: Option<Duration>,
    /// Random seed for reproducible initialisation
    pub seed: Option<u64>,
}

impl Default for VonMisesHmmConfig {
    fn default() -> Self {
        Self {
            num_states: 2,
            convergence_tolerance: 1e-4,
            max_iterations: 100,
            transition_floor: 1e-10,
            startprob_floor: 1e-10,
            update: HmmUpdateFlags::all(),
            init: InitStrategy::KMeansPlusPlus,
            kappa_refinement_steps: 0,
            max_duration: None,
            seed: None,
        }
    }
}

impl VonMisesHmmConfig {
    /// Default configuration with the given number of states.
    pub fn new(num_states: usize) -> Self {
        Self {
            num_states,
            ..Self::default()
        }
    }

    /// Tight tolerance, more iterations and refined concentrations.
    pub fn precise(num_states: usize) -> Self {
        Self {
            num_states,
            convergence_tolerance: 1e-8,
            max_iterations: 500,
            kappa_refinement_steps: 2,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_update(mut self, update: HmmUpdateFlags) -> Self {
        self.update = update;
        self
    }

    pub fn with_init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    pub fn with_kappa_refinement(mut self, steps: usize) -> Self {
        self.kappa_refinement_steps = steps;
        self
    }

    pub fn with_max_duration(mut self, budget: Duration) -> Self {
        self.max_duration = Some(budget);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates hyperparameters.
    pub fn validate(&self) -> MixtapeResult<()> {
        if self.num_states == 0 {
            return Err(MixtapeError::configuration(
                "num_states",
                "must be at least 1",
            ));
        }
        validate_em_budget(self.convergence_tolerance, self.max_iterations)?;
        validate_floor(self.transition_floor, "transition_floor")?;
        validate_floor(self.startprob_floor, "startprob_floor")?;
        Ok(())
    }
}

/// Which gamma mixture parameters the M-step re-estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaUpdateFlags {
    /// Update mixing weights
    pub weights: bool,
    /// Update shapes (Newton solve)
    pub shapes: bool,
    /// Update scales
    pub scales: bool,
}

impl GammaUpdateFlags {
    /// Re-estimate everything.
    pub fn all() -> Self {
        Self {
            weights: true,
            shapes: true,
            scales: true,
        }
    }
}

impl Default for GammaUpdateFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration for [`crate::gamma_mixture::GammaMixtureModel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaMixtureConfig {
    /// Number of mixture components
    pub num_components: usize,
    /// Stop when the log-likelihood gain drops below this value
    pub convergence_tolerance: f64,
    /// Hard cap on EM iterations
    pub max_iterations: usize,
    /// Newton step tolerance for each shape, relative once the shape exceeds one
    pub newton_tolerance: f64,
    /// Iteration cap for each shape solve
    pub newton_max_iterations: usize,
    /// Parameters re-estimated by the M-step
    pub update: GammaUpdateFlags,
    /// Wall-clock budget checked between iterations
    pub max_duration: Option<Duration>,
}

impl Default for GammaMixtureConfig {
    fn default() -> Self {
        Self {
            num_components: 2,
            convergence_tolerance: 1e-6,
            max_iterations: 200,
            newton_tolerance: 1e-10,
            newton_max_iterations: 100,
            update: GammaUpdateFlags::all(),
            max_duration: None,
        }
    }
}

impl GammaMixtureConfig {
    /// Default configuration with the given number of components.
    pub fn new(num_components: usize) -> Self {
        Self {
            num_components,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_newton(mut self, tolerance: f64, max_iterations: usize) -> Self {
        self.newton_tolerance = tolerance;
        self.newton_max_iterations = max_iterations;
        self
    }

    pub fn with_update(mut self, update: GammaUpdateFlags) -> Self {
        self.update = update;
        self
    }

    pub fn with_max_duration(mut self, budget: Duration) -> Self {
        self.max_duration = Some(budget);
        self
    }

    /// Validates hyperparameters.
    pub fn validate(&self) -> MixtapeResult<()> {
        if self.num_components == 0 {
            return Err(MixtapeError::configuration(
                "num_components",
                "must be at least 1",
            ));
        }
        validate_em_budget(self.convergence_tolerance, self.max_iterations)?;
        if !(self.newton_tolerance > 0.0) {
            return Err(MixtapeError::configuration(
                "newton_tolerance",
                format!("must be positive, got {}", self.newton_tolerance),
            ));
        }
        if self.newton_max_iterations == 0 {
            return Err(MixtapeError::configuration(
                "newton_max_iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Grid for the offline Bessel-ratio spline.
///
/// The shipped table uses the default: 1024 log-spaced concentrations over
/// `[1e-5, 700]`, worst-case error about 1.6e-5 in `ln κ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplineConfig {
    /// Number of knots
    pub num_points: usize,
    /// Smallest concentration on the grid
    pub y_min: f64,
    /// Largest concentration on the grid
    pub y_max: f64,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            num_points: 1024,
            y_min: 1e-5,
            y_max: 700.0,
        }
    }
}

impl SplineConfig {
    /// Validates the grid.
    ///
    /// Above κ ≈ 700 the ratio I1/I0 is within 1e-3 of one and neighbouring knots stop
    /// being distinguishable in double precision, so the upper bound is capped at 1e4.
    pub fn validate(&self) -> MixtapeResult<()> {
        if self.num_points < 4 {
            return Err(MixtapeError::configuration(
                "num_points",
                format!("needs at least 4 knots, got {}", self.num_points),
            ));
        }
        if !(self.y_min > 0.0 && self.y_min.is_finite()) {
            return Err(MixtapeError::configuration(
                "y_min",
                format!("must be positive, got {}", self.y_min),
            ));
        }
        if !(self.y_max > self.y_min && self.y_max <= 1e4) {
            return Err(MixtapeError::configuration(
                "y_max",
                format!("must lie in (y_min, 1e4], got {}", self.y_max),
            ));
        }
        Ok(())
    }
}

fn validate_em_budget(tolerance: f64, max_iterations: usize) -> MixtapeResult<()> {
    if !(tolerance > 0.0 && tolerance.is_finite()) {
        return Err(MixtapeError::configuration(
            "convergence_tolerance",
            format!("must be positive and finite, got {}", tolerance),
        ));
    }
    if max_iterations == 0 {
        return Err(MixtapeError::configuration(
            "max_iterations",
            "must be at least 1",
        ));
    }
    Ok(())
}

fn validate_floor(floor: f64, name: &str) -> MixtapeResult<()> {
    if floor >= 0.0 && floor.is_finite() {
        Ok(())
    } else {
        Err(MixtapeError::configuration(
            name,
            format!("must be non-negative and finite, got {}", floor),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(VonMisesHmmConfig::default().validate().is_ok());
        assert!(VonMisesHmmConfig::precise(4).validate().is_ok());
        assert!(GammaMixtureConfig::default().validate().is_ok());
        assert!(SplineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_states_rejected() {
        match VonMisesHmmConfig::new(0).validate() {
            Err(MixtapeError::ConfigurationError { parameter, .. }) => {
                assert_eq!(parameter, "num_states");
            }
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
        assert!(GammaMixtureConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = VonMisesHmmConfig::new(3)
            .with_tolerance(1e-6)
            .with_max_iterations(7)
            .with_init(InitStrategy::Random)
            .with_seed(42)
            .with_max_duration(Duration::from_millis(250));
        assert_eq!(config.num_states, 3);
        assert_eq!(config.convergence_tolerance, 1e-6);
        assert_eq!(config.max_iterations, 7);
        assert_eq!(config.init, InitStrategy::Random);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_duration, Some(Duration::from_millis(250)));

        let config = GammaMixtureConfig::new(3).with_newton(1e-8, 25);
        assert_eq!(config.newton_tolerance, 1e-8);
        assert_eq!(config.newton_max_iterations, 25);
    }

    #[test]
    fn test_invalid_budgets_rejected() {
        assert!(VonMisesHmmConfig::new(2).with_tolerance(0.0).validate().is_err());
        assert!(VonMisesHmmConfig::new(2).with_tolerance(f64::NAN).validate().is_err());
        assert!(VonMisesHmmConfig::new(2).with_max_iterations(0).validate().is_err());
        assert!(GammaMixtureConfig::new(2).with_newton(-1.0, 10).validate().is_err());
        assert!(GammaMixtureConfig::new(2).with_newton(1e-8, 0).validate().is_err());

        let mut config = VonMisesHmmConfig::new(2);
        config.transition_floor = -1e-3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spline_grid_validation() {
        let bad = [
            SplineConfig { num_points: 3, ..SplineConfig::default() },
            SplineConfig { y_min: 0.0, ..SplineConfig::default() },
            SplineConfig { y_min: 10.0, y_max: 5.0, ..SplineConfig::default() },
            SplineConfig { y_max: 1e6, ..SplineConfig::default() },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(MixtapeError::ConfigurationError { .. })),
                "{:?} should be rejected",
                config
            );
        }
    }
}
