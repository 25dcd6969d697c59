use nalgebra::DMatrix;

use crate::{
    fit::{ChebConfig, fit_adaptive},
    series::ChebSeries,
};

/// Eigenvalues with an imaginary part above this are discarded as complex.
const IMAG_TOL: f64 = 1e-7;

/// Real parts may overshoot the unit interval by this much before being
/// clamped back; anything further out is discarded.
const UNIT_OVERSHOOT: f64 = 1e-6;

/// Off-center split location in unit coordinates, so a root sitting exactly
/// at the midpoint of the interval cannot land on a split boundary.
const SPLIT_POINT: f64 = -0.004_849_834_917_525;

/// Recursion guard for the interval-splitting path.
const MAX_SPLIT_DEPTH: usize = 30;

/// Nearly coincident roots (relative to the interval width) collapse into
/// one; a conjugate pair hovering at the real axis produces two.
const DUPLICATE_TOL: f64 = 1e-13;

/// Returns the real roots of the series inside its interval, sorted
/// ascending and deduplicated.
///
/// Low-degree series go straight to the colleague-matrix eigenvalue solver.
/// Higher degrees are handled by splitting the interval and refitting each
/// half from the series itself, which keeps every eigenproblem small.
pub(crate) fn real_roots(series: &ChebSeries, config: &ChebConfig) -> Vec<f64> {
    let mut found = Vec::new();
    collect_roots(series, config, 0, &mut found);

    found.sort_by(f64::total_cmp);
    let width = series.right() - series.left();
    found.dedup_by(|a, b| (*a - *b).abs() <= width * DUPLICATE_TOL);
    found
}

fn collect_roots(series: &ChebSeries, config: &ChebConfig, depth: usize, out: &mut Vec<f64>) {
    let trimmed = series.trimmed();
    if trimmed.degree() <= config.eig_degree_cap() || depth >= MAX_SPLIT_DEPTH {
        out.extend(colleague_roots(&trimmed));
        return;
    }

    let split = series.from_unit(SPLIT_POINT);
    let resample = |x: f64| series.eval(x);
    let left_half = fit_adaptive(&resample, series.left(), split, config);
    let right_half = fit_adaptive(&resample, split, series.right(), config);

    collect_roots(&left_half, config, depth + 1, out);
    collect_roots(&right_half, config, depth + 1, out);
}

/// Roots of a low-degree series via its colleague matrix.
///
/// A degree-zero series reports no roots: a nonzero constant has none, and
/// an identically zero fit has no isolated roots to report.
fn colleague_roots(series: &ChebSeries) -> Vec<f64> {
    let coeffs = series.coeffs();
    let n = series.degree();

    match n {
        0 => Vec::new(),
        1 => {
            let t = -coeffs[0] / coeffs[1];
            in_unit_interval(t)
                .map(|t| vec![clamped(series, t)])
                .unwrap_or_default()
        }
        _ => {
            let mut matrix = DMatrix::zeros(n, n);
            matrix[(0, 1)] = 1.0;
            for k in 1..n - 1 {
                matrix[(k, k - 1)] = 0.5;
                matrix[(k, k + 1)] = 0.5;
            }
            let scale = -1.0 / (2.0 * coeffs[n]);
            for k in 0..n {
                matrix[(n - 1, k)] += scale * coeffs[k];
            }
            matrix[(n - 1, n - 2)] += 0.5;

            matrix
                .complex_eigenvalues()
                .iter()
                .filter(|z| z.im.abs() <= IMAG_TOL)
                .filter_map(|z| in_unit_interval(z.re))
                .map(|t| clamped(series, t))
                .collect()
        }
    }
}

/// Accepts unit-interval points, allowing a small numerical overshoot.
fn in_unit_interval(t: f64) -> Option<f64> {
    ((-1.0 - UNIT_OVERSHOOT)..=(1.0 + UNIT_OVERSHOOT))
        .contains(&t)
        .then(|| t.clamp(-1.0, 1.0))
}

/// Maps a unit-interval root back into the series interval.
fn clamped(series: &ChebSeries, t: f64) -> f64 {
    series.from_unit(t).clamp(series.left(), series.right())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::fit::interpolate;

    #[test]
    fn finds_roots_of_a_basis_term() {
        // T_2 vanishes at ±1/√2.
        let series = ChebSeries::new(vec![0.0, 0.0, 1.0], -1.0, 1.0);
        let roots = real_roots(&series, &ChebConfig::default());

        assert_eq!(roots.len(), 2);
        let expected = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(roots[0], -expected, epsilon = 1e-12);
        assert_relative_eq!(roots[1], expected, epsilon = 1e-12);
    }

    #[test]
    fn finds_roots_of_a_fitted_quadratic() {
        let series = interpolate(&|x: f64| (x - 1.0) * (x - 3.0), 0.0, 4.0, 8);
        let roots = real_roots(&series, &ChebConfig::default());

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(roots[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn finds_roots_of_a_fitted_transcendental() {
        let series = fit_adaptive(&f64::sin, 1.0, 7.0, &ChebConfig::default());
        let roots = real_roots(&series, &ChebConfig::default());

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], std::f64::consts::PI, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 2.0 * std::f64::consts::PI, epsilon = 1e-8);
    }

    #[test]
    fn linear_series_root() {
        // T_1 - 1/2 on [0, 2] vanishes at x = 1.5.
        let series = ChebSeries::new(vec![-0.5, 1.0], 0.0, 2.0);
        let roots = real_roots(&series, &ChebConfig::default());

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn constant_series_has_no_roots() {
        let series = ChebSeries::new(vec![2.0], -1.0, 1.0);
        assert!(real_roots(&series, &ChebConfig::default()).is_empty());

        let zero = ChebSeries::new(vec![0.0], -1.0, 1.0);
        assert!(real_roots(&zero, &ChebConfig::default()).is_empty());
    }

    #[test]
    fn roots_outside_the_interval_are_discarded() {
        // (x - 3) on [-1, 1] has no root inside the interval.
        let series = interpolate(&|x: f64| x - 3.0, -1.0, 1.0, 4);
        assert!(real_roots(&series, &ChebConfig::default()).is_empty());
    }

    #[test]
    fn high_degree_series_split_before_solving() {
        // Force the splitting path with a tiny eigenvalue cap.
        let config = ChebConfig::new(4096, 1024, 8).expect("valid config");
        let series = fit_adaptive(&f64::sin, 1.0, 7.0, &ChebConfig::default());
        let roots = real_roots(&series, &config);

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], std::f64::consts::PI, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 2.0 * std::f64::consts::PI, epsilon = 1e-8);
    }
}


