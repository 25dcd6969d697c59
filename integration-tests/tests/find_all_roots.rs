//! End-to-end behavior of the full pipeline: Chebyshev extrema finding,
//! monotonic subdivision, and Brent bracket solving.

use std::f64::consts::PI;

use approx::assert_relative_eq;

use integration_tests::run;

#[test]
fn monotonic_sign_change_has_exactly_one_root() {
    let findings = run(|x| x.tanh() - 0.5, &[-3.0, 3.0]).expect("valid breakpoints");

    assert_eq!(findings.roots.len(), 1);
    assert_relative_eq!(findings.roots[0], 0.5_f64.atanh(), epsilon = 1e-9);
    let residuals = findings.residuals.expect("roots exist");
    assert!(residuals[0].abs() < 1e-9);
}

#[test]
fn identity_on_symmetric_interval_reports_zero_exactly() {
    let findings = run(|x| x, &[-1.0, 1.0]).expect("valid breakpoints");

    assert_eq!(findings.roots, vec![0.0]);
    assert_eq!(findings.residuals, Some(vec![0.0]));
}

#[test]
fn sine_reports_every_zero_in_the_domain() {
    // Zeros of sine in [0, 7]: 0 (an endpoint root), pi, and 2*pi.
    let findings = run(f64::sin, &[0.0, 7.0]).expect("valid breakpoints");

    assert_eq!(findings.roots.len(), 3);
    assert_relative_eq!(findings.roots[0], 0.0);
    assert_relative_eq!(findings.roots[1], PI, epsilon = 1e-8);
    assert_relative_eq!(findings.roots[2], 2.0 * PI, epsilon = 1e-8);

    for residual in findings.residuals.expect("roots exist") {
        assert!(residual.abs() < 1e-8);
    }
}

#[test]
fn cubic_with_endpoint_roots_reports_all_three() {
    // x(x-1)(x-2) on [0, 2]: both domain endpoints are exact zeros.
    let findings = run(|x| x * (x - 1.0) * (x - 2.0), &[0.0, 2.0]).expect("valid breakpoints");

    assert_eq!(findings.roots.len(), 3);
    assert_relative_eq!(findings.roots[0], 0.0);
    assert_relative_eq!(findings.roots[1], 1.0, epsilon = 1e-9);
    assert_relative_eq!(findings.roots[2], 2.0, epsilon = 1e-9);
}

#[test]
fn quartic_with_symmetric_roots() {
    let findings =
        run(|x| (x * x - 1.0) * (x * x - 4.0), &[-3.0, 3.0]).expect("valid breakpoints");

    assert_eq!(findings.roots.len(), 4);
    for (root, expected) in findings.roots.iter().zip([-2.0, -1.0, 1.0, 2.0]) {
        assert_relative_eq!(*root, expected, epsilon = 1e-9);
    }
}

#[test]
fn constant_function_has_no_roots_on_any_interval() {
    for interval in [[-1.0, 1.0], [-1e6, 1e6], [3.0, 3.1]] {
        let findings = run(|_x| 2.5, &interval).expect("valid breakpoints");
        assert!(findings.roots.is_empty());
        assert!(findings.residuals.is_none());
    }
}

#[test]
fn no_interior_sign_change_means_empty_findings() {
    let findings = run(|x| x * x + 1.0, &[-2.0, 2.0]).expect("valid breakpoints");

    assert!(findings.roots.is_empty());
    assert!(findings.residuals.is_none());
    assert!(findings.unconverged.is_empty());
}

#[test]
fn degenerate_domain_is_probed_without_refinement() {
    let findings = run(|x| x - 5.0, &[5.0, 5.0]).expect("valid breakpoints");
    assert_eq!(findings.roots, vec![5.0]);

    let findings = run(|x| x + 1.0, &[5.0, 5.0]).expect("valid breakpoints");
    assert!(findings.roots.is_empty());
    assert!(findings.residuals.is_none());
}

#[test]
fn shared_boundary_roots_are_never_doubled() {
    // The parabola touches zero exactly at the stationary point where the
    // domain splits, so both neighboring segments report it.
    let findings = run(|x| (x - 1.0) * (x - 1.0), &[0.0, 2.0]).expect("valid breakpoints");

    assert!(findings.roots.len() <= 1);
    for pair in findings.roots.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn rerunning_yields_bitwise_identical_roots() {
    let f = |x: f64| (2.0 * x).sin() - 0.3;
    let first = run(f, &[0.0, 6.0]).expect("valid breakpoints");
    let second = run(f, &[0.0, 6.0]).expect("valid breakpoints");

    assert!(!first.roots.is_empty());
    assert_eq!(first.roots, second.roots);
}

#[test]
fn caller_supplied_interior_breakpoints_are_honored() {
    let findings = run(f64::sin, &[0.5, 2.0, 7.0]).expect("valid breakpoints");

    assert_eq!(findings.roots.len(), 2);
    assert_relative_eq!(findings.roots[0], PI, epsilon = 1e-8);
    assert_relative_eq!(findings.roots[1], 2.0 * PI, epsilon = 1e-8);
}
