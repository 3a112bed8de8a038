//! Invalid inputs surface as the right error variant across the public API.

use mixtape::emission_models::{GammaComponent, VonMisesEmission};
use mixtape::special::{digamma, trigamma};
use mixtape::spline_eval::default_evaluator;
use mixtape::{
    GammaMixtureConfig, GammaMixtureModel, GammaMixtureParameters, HMMParameters, MixtapeError,
    VonMisesHMM, VonMisesHmmConfig,
};

#[test]
fn test_zero_states_or_components() {
    match VonMisesHMM::new(VonMisesHmmConfig::new(0)) {
        Err(MixtapeError::ConfigurationError { parameter, .. }) => assert_eq!(parameter, "num_states"),
        other => panic!("Expected ConfigurationError, got {:?}", other.map(|_| ())),
    }
    match GammaMixtureModel::new(GammaMixtureConfig::new(0)) {
        Err(MixtapeError::ConfigurationError { parameter, .. }) => {
            assert_eq!(parameter, "num_components")
        }
        other => panic!("Expected ConfigurationError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_empty_sequences() {
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(2)).unwrap();
    assert!(matches!(hmm.fit(&[]), Err(MixtapeError::ConfigurationError { .. })));
    assert!(matches!(
        hmm.fit(&[vec![vec![0.1]], vec![]]),
        Err(MixtapeError::ConfigurationError { .. })
    ));
}

#[test]
fn test_angle_dimension_mismatch() {
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(2)).unwrap();
    let ragged = vec![vec![vec![0.1, 0.2], vec![0.3]]];
    match hmm.fit(&ragged) {
        Err(MixtapeError::DimensionMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("Expected DimensionMismatch, got {:?}", other),
    }

    let params = HMMParameters::new(
        vec![1.0],
        vec![vec![1.0]],
        vec![VonMisesEmission::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap()],
    )
    .unwrap();
    assert!(matches!(
        hmm.score(&params, &[vec![0.5]]),
        Err(MixtapeError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_non_finite_angles() {
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(1)).unwrap();
    assert!(matches!(
        hmm.fit(&[vec![vec![0.1], vec![f64::NAN]]]),
        Err(MixtapeError::DomainError { .. })
    ));
}

#[test]
fn test_initial_parameters_must_match_model() {
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(3)).unwrap();
    let params = HMMParameters::new(
        vec![0.5, 0.5],
        vec![vec![0.5, 0.5], vec![0.5, 0.5]],
        vec![VonMisesEmission::uniform(1), VonMisesEmission::uniform(1)],
    )
    .unwrap();
    assert!(matches!(
        hmm.fit_from(&[vec![vec![0.0]]], params),
        Err(MixtapeError::DimensionMismatch { .. })
    ));

    assert!(matches!(
        HMMParameters::new(
            vec![0.5, 0.6],
            vec![vec![0.5, 0.5], vec![0.5, 0.5]],
            vec![VonMisesEmission::uniform(1), VonMisesEmission::uniform(1)],
        ),
        Err(MixtapeError::ConfigurationError { .. })
    ));
}

#[test]
fn test_non_positive_gamma_observations() {
    let model = GammaMixtureModel::new(GammaMixtureConfig::new(1)).unwrap();
    for bad in [0.0, -2.5, f64::INFINITY, f64::NAN] {
        match model.fit(&[1.0, bad, 3.0]) {
            Err(MixtapeError::DomainError { function, .. }) => {
                assert_eq!(function, "GammaMixtureModel")
            }
            other => panic!("Expected DomainError for {}, got {:?}", bad, other),
        }
    }

    let params = GammaMixtureParameters::new(vec![1.0], vec![GammaComponent::new(2.0, 1.0).unwrap()]).unwrap();
    assert!(matches!(
        model.predict(&params, &[1.0, -1.0]),
        Err(MixtapeError::DomainError { .. })
    ));
}

#[test]
fn test_malformed_parameters_on_scoring_paths() {
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(2)).unwrap();
    let params = HMMParameters {
        startprob: vec![0.5, 0.5],
        transmat: vec![vec![1.0], vec![0.5, 0.5]],
        emissions: vec![VonMisesEmission::uniform(1), VonMisesEmission::uniform(1)],
    };
    let sequence = vec![vec![0.3], vec![-0.4]];
    assert!(matches!(
        hmm.decode(&params, &sequence),
        Err(MixtapeError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        hmm.predict(&params, &sequence),
        Err(MixtapeError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        hmm.score(&params, &sequence),
        Err(MixtapeError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        hmm.predict_proba(&params, &sequence),
        Err(MixtapeError::DimensionMismatch { .. })
    ));

    let no_states = HMMParameters {
        startprob: vec![],
        transmat: vec![],
        emissions: vec![],
    };
    assert!(matches!(
        hmm.decode(&no_states, &sequence),
        Err(MixtapeError::ConfigurationError { .. })
    ));
    assert!(matches!(
        mixtape::viterbi(&[], &[], &[vec![]]),
        Err(MixtapeError::ConfigurationError { .. })
    ));
}

#[test]
fn test_overflow_during_em_is_numerical_instability() {
    // Finite observations whose responsibility-weighted sum overflows
    let data = [1e308, 1.5e308, 1.7e308];
    let model = GammaMixtureModel::new(GammaMixtureConfig::new(1)).unwrap();
    let initial = GammaMixtureParameters::new(vec![1.0], vec![GammaComponent::new(2.0, 5e307).unwrap()]).unwrap();
    assert!(model.score(&initial, &data).unwrap().is_finite());

    match model.fit_from(&data, initial) {
        Err(MixtapeError::NumericalInstability { stage, message }) => {
            assert_eq!(stage, "m-step");
            assert!(message.contains("scale"), "{}", message);
        }
        other => panic!("Expected NumericalInstability, got {:?}", other),
    }
}

#[test]
fn test_special_function_domains() {
    for x in [0.0, -1.0, f64::NAN] {
        assert!(matches!(digamma(x), Err(MixtapeError::DomainError { .. })));
        assert!(matches!(trigamma(x), Err(MixtapeError::DomainError { .. })));
    }

    let degenerate = GammaComponent {
        shape: -1.0,
        scale: 1.0,
    };
    assert!(matches!(
        degenerate.log_normalizer(),
        Err(MixtapeError::DomainError { .. })
    ));
}

#[test]
fn test_spline_input_outside_unit_interval() {
    for x in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        assert!(matches!(
            default_evaluator().invert(x),
            Err(MixtapeError::DomainError { .. })
        ));
    }
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = digamma(-1.0).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("digamma"), "{}", message);
    assert!(!err.is_recoverable());

    let err = mixtape::solve_shape(0.0, 1e-10, 10).unwrap_err();
    assert!(err.is_recoverable());
}
