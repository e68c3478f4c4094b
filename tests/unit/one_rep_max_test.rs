//! Unit tests for the Epley one-rep-max estimate.

use fitcoach::calculate_one_rep_max;

#[test]
fn test_single_rep_is_identity() {
    for weight in [20.0, 62.5, 100.0, 227.5] {
        assert_eq!(calculate_one_rep_max(weight, 1), weight);
    }
}

#[test]
fn test_known_values() {
    assert!((calculate_one_rep_max(100.0, 10) - 133.333_333).abs() < 1e-3);
    assert!((calculate_one_rep_max(60.0, 5) - 70.0).abs() < 1e-9);
    assert!((calculate_one_rep_max(80.0, 30) - 160.0).abs() < 1e-9);
}

#[test]
fn test_monotonic_in_reps_and_weight() {
    let mut previous = 0.0;
    for reps in 1..=20 {
        let estimate = calculate_one_rep_max(80.0, reps);
        assert!(estimate > previous, "reps {reps}: {estimate} <= {previous}");
        previous = estimate;
    }

    assert!(calculate_one_rep_max(90.0, 5) > calculate_one_rep_max(85.0, 5));
}

#[test]
fn test_never_below_lifted_weight() {
    for reps in 1..=15 {
        assert!(calculate_one_rep_max(50.0, reps) >= 50.0);
    }
}

#[test]
fn test_zero_reps_or_weight() {
    assert_eq!(calculate_one_rep_max(100.0, 0), 0.0);
    assert_eq!(calculate_one_rep_max(0.0, 8), 0.0);
}
