//! Unit tests for the merit score and the precomputed SU matrix

use ::merit::pipeline::{merit, symmetric_uncertainty, SelectionError, SuMatrix};

#[path = "common/mod.rs"]
mod common;

const TOLERANCE: f64 = 1e-9;

fn subset(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn singleton_merit_equals_class_su() {
    // A one-feature subset uses denominator 1.0, so the merit is exactly the
    // feature's SU with the target.
    let data = common::graded_dataset();

    for feature in ["strong", "partial", "noise"] {
        let m = merit(&subset(&[feature]), "class", &data).unwrap();
        let su = symmetric_uncertainty(feature, "class", &data).unwrap();
        assert!((m - su).abs() < TOLERANCE, "merit({feature}) != SU");
    }
}

#[test]
fn merit_is_nonnegative() {
    let data = common::graded_dataset();

    let subsets: &[&[&str]] = &[
        &["strong"],
        &["noise"],
        &["strong", "partial"],
        &["strong", "partial", "noise"],
    ];
    for s in subsets {
        let m = merit(&subset(s), "class", &data).unwrap();
        assert!(m >= 0.0, "merit of {s:?} is negative: {m}");
    }
}

#[test]
fn merit_rewards_relevance_and_penalizes_redundancy() {
    let data = common::graded_dataset();

    let strong_only = merit(&subset(&["strong"]), "class", &data).unwrap();
    let with_noise = merit(&subset(&["strong", "noise"]), "class", &data).unwrap();

    assert!(
        strong_only > with_noise,
        "adding an irrelevant feature should not raise the merit"
    );
}

#[test]
fn merit_of_any_subset_over_identical_records_is_zero() {
    // Self-terms keep the denominator positive, but every SU with the class
    // is zero, so the numerator (and the score) is zero.
    let data = common::constant_dataset();

    for s in [&["f1"][..], &["f1", "f2"][..]] {
        let m = merit(&subset(s), "class", &data).unwrap();
        assert_eq!(m, 0.0);
    }
}

#[test]
fn merit_rejects_empty_subset() {
    let data = common::toy_dataset();

    let err = merit(&[], "class", &data).unwrap_err();
    assert_eq!(err, SelectionError::EmptySubset);
}

#[test]
fn merit_propagates_unknown_attribute() {
    let data = common::toy_dataset();

    let err = merit(&subset(&["ghost"]), "class", &data).unwrap_err();
    assert_eq!(err, SelectionError::UnknownAttribute("ghost".to_string()));
}

#[test]
fn su_matrix_merit_matches_direct_computation() {
    let data = common::graded_dataset();
    let features = subset(&["strong", "partial", "noise"]);

    let su = SuMatrix::compute(&data, &features, "class").unwrap();

    let index_subsets: &[&[usize]] = &[&[0], &[2], &[0, 1], &[1, 2], &[0, 1, 2]];
    for indices in index_subsets {
        let names: Vec<String> = indices.iter().map(|&i| features[i].clone()).collect();
        let direct = merit(&names, "class", &data).unwrap();
        let cached = su.merit_of(indices);
        assert!(
            (direct - cached).abs() < TOLERANCE,
            "matrix merit diverges from direct merit for {names:?}: {cached} vs {direct}"
        );
    }
}

#[test]
fn su_matrix_is_symmetric_with_unit_diagonal() {
    let data = common::graded_dataset();
    let features = subset(&["strong", "partial", "noise"]);

    let su = SuMatrix::compute(&data, &features, "class").unwrap();

    for i in 0..su.len() {
        assert!((su.pair_su(i, i) - 1.0).abs() < TOLERANCE);
        for j in 0..su.len() {
            assert!((su.pair_su(i, j) - su.pair_su(j, i)).abs() < TOLERANCE);
        }
    }
}

#[test]
fn su_matrix_rejects_empty_feature_list() {
    let data = common::toy_dataset();

    let err = SuMatrix::compute(&data, &[], "class").unwrap_err();
    assert_eq!(err, SelectionError::EmptySubset);
}

#[test]
fn su_matrix_rejects_unknown_target() {
    let data = common::toy_dataset();
    let features = subset(&["mood"]);

    let err = SuMatrix::compute(&data, &features, "ghost").unwrap_err();
    assert_eq!(err, SelectionError::UnknownAttribute("ghost".to_string()));
}
