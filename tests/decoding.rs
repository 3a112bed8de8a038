//! Viterbi decoding on a small model whose best path is known by enumeration.

use mixtape::emission_models::VonMisesEmission;
use mixtape::{HMMParameters, VonMisesHMM, VonMisesHmmConfig};
use std::f64::consts::PI;

fn toy_model(stay: f64) -> HMMParameters {
    HMMParameters::new(
        vec![0.5, 0.5],
        vec![vec![stay, 1.0 - stay], vec![1.0 - stay, stay]],
        vec![
            VonMisesEmission::new(vec![0.0], vec![2.0]).unwrap(),
            VonMisesEmission::new(vec![PI], vec![2.0]).unwrap(),
        ],
    )
    .unwrap()
}

fn observations(angles: &[f64]) -> Vec<Vec<f64>> {
    angles.iter().map(|&a| vec![a]).collect()
}

fn hmm() -> VonMisesHMM {
    VonMisesHMM::new(VonMisesHmmConfig::new(2)).unwrap()
}

#[test]
fn test_viterbi_follows_observations_with_weak_persistence() {
    let params = toy_model(0.8);
    let sequence = observations(&[0.1, 0.2, 3.0, 2.9, 0.3]);
    let (path, log_prob) = hmm().decode(&params, &sequence).unwrap();
    assert_eq!(path, vec![0, 0, 1, 1, 0]);
    assert!((log_prob - (-7.884947359528255)).abs() < 1e-9, "log prob {}", log_prob);
}

#[test]
fn test_viterbi_smooths_outlier_with_strong_persistence() {
    let params = toy_model(0.95);
    let sequence = observations(&[0.1, 0.2, 3.0, 0.1, 0.2]);
    let (path, log_prob) = hmm().decode(&params, &sequence).unwrap();
    assert_eq!(path, vec![0, 0, 0, 0, 0]);
    assert!((log_prob - (-8.287375418295477)).abs() < 1e-9, "log prob {}", log_prob);
}

#[test]
fn test_viterbi_path_is_consistent_with_posteriors_when_unambiguous() {
    let params = toy_model(0.8);
    let sequence = observations(&[0.0, 0.05, -0.05, 0.0]);
    let path = hmm().predict(&params, &sequence).unwrap();
    let gamma = hmm().predict_proba(&params, &sequence).unwrap();
    for (t, row) in gamma.iter().enumerate() {
        assert_eq!(path[t], 0);
        assert!(row[0] > 0.9);
    }
}
