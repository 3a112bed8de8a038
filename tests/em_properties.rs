//! Invariants every EM fit must satisfy: normalised posteriors and a
//! non-decreasing log-likelihood history.

use mixtape::emission_models::{GammaComponent, VonMisesEmission};
use mixtape::{
    generate_gamma_mixture, generate_hmm_sequences, GammaMixtureConfig, GammaMixtureModel,
    GammaMixtureParameters, GeneratorConfig, HMMParameters, VonMisesHMM, VonMisesHmmConfig,
};
use std::f64::consts::PI;

fn three_state_params() -> HMMParameters {
    HMMParameters::new(
        vec![0.5, 0.3, 0.2],
        vec![
            vec![0.85, 0.10, 0.05],
            vec![0.10, 0.80, 0.10],
            vec![0.05, 0.15, 0.80],
        ],
        vec![
            VonMisesEmission::new(vec![0.0], vec![3.0]).unwrap(),
            VonMisesEmission::new(vec![2.0], vec![6.0]).unwrap(),
            VonMisesEmission::new(vec![-2.2], vec![1.5]).unwrap(),
        ],
    )
    .unwrap()
}

fn assert_non_decreasing(history: &[f64]) {
    for (n, pair) in history.windows(2).enumerate() {
        let epsilon = 1e-8 * pair[0].abs().max(1.0);
        assert!(
            pair[1] >= pair[0] - epsilon,
            "log-likelihood fell at iteration {}: {} -> {}",
            n + 1,
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_state_posteriors_sum_to_one() {
    let params = three_state_params();
    let samples = generate_hmm_sequences(&GeneratorConfig::new(3000, 17), &params, 1).unwrap();
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(3)).unwrap();

    let gamma = hmm.predict_proba(&params, &samples[0].observations).unwrap();
    assert_eq!(gamma.len(), 3000);
    for row in &gamma {
        let total: f64 = row.iter().sum();
        assert!((total - 1.0).abs() < 1e-10, "row sums to {}", total);
        assert!(row.iter().all(|&p| (0.0..=1.0 + 1e-12).contains(&p)));
    }
}

#[test]
fn test_hmm_log_likelihood_never_decreases() {
    let params = three_state_params();
    let samples = generate_hmm_sequences(&GeneratorConfig::new(400, 21), &params, 4).unwrap();
    let sequences: Vec<Vec<Vec<f64>>> = samples.into_iter().map(|s| s.observations).collect();

    for seed in 0..3 {
        let config = VonMisesHmmConfig::new(3)
            .with_seed(seed)
            .with_tolerance(1e-9)
            .with_max_iterations(60);
        let fit = VonMisesHMM::new(config).unwrap().fit(&sequences).unwrap();
        assert_eq!(fit.summary.history.len(), fit.summary.iterations + 1);
        assert_eq!(fit.summary.history.last().copied(), Some(fit.summary.log_likelihood));
        assert_non_decreasing(&fit.summary.history);
    }
}

#[test]
fn test_hmm_monotone_from_poor_start() {
    let params = three_state_params();
    let samples = generate_hmm_sequences(&GeneratorConfig::new(600, 4), &params, 2).unwrap();
    let sequences: Vec<Vec<Vec<f64>>> = samples.into_iter().map(|s| s.observations).collect();

    let start = HMMParameters::new(
        vec![1.0 / 3.0; 3],
        vec![vec![1.0 / 3.0; 3]; 3],
        vec![
            VonMisesEmission::new(vec![PI], vec![0.1]).unwrap(),
            VonMisesEmission::new(vec![PI - 0.1], vec![0.1]).unwrap(),
            VonMisesEmission::new(vec![-PI + 0.1], vec![0.1]).unwrap(),
        ],
    )
    .unwrap();
    let hmm = VonMisesHMM::new(VonMisesHmmConfig::new(3).with_max_iterations(40)).unwrap();
    let fit = hmm.fit_from(&sequences, start).unwrap();
    assert_non_decreasing(&fit.summary.history);
    assert!(fit.summary.log_likelihood > fit.summary.history[0]);
}

#[test]
fn test_gamma_log_likelihood_never_decreases() {
    let truth = GammaMixtureParameters::new(
        vec![0.4, 0.35, 0.25],
        vec![
            GammaComponent::new(1.5, 0.5).unwrap(),
            GammaComponent::new(6.0, 1.0).unwrap(),
            GammaComponent::new(30.0, 1.0).unwrap(),
        ],
    )
    .unwrap();
    let sample = generate_gamma_mixture(&GeneratorConfig::new(3000, 12), &truth).unwrap();

    let model = GammaMixtureModel::new(
        GammaMixtureConfig::new(3)
            .with_tolerance(1e-10)
            .with_max_iterations(300),
    )
    .unwrap();
    let fit = model.fit(&sample.values).unwrap();
    assert_eq!(fit.summary.history.len(), fit.summary.iterations + 1);
    assert_non_decreasing(&fit.summary.history);

    let responsibilities = model.predict_proba(&fit.params, &sample.values).unwrap();
    for row in &responsibilities {
        assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-10);
    }
}
