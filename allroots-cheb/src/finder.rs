use allroots_core::ExtremaFinder;

use crate::{ChebConfig, fit::fit_adaptive, roots::real_roots};

/// Locates stationary points by differentiating a Chebyshev fit.
///
/// The function is approximated by an adaptive Chebyshev interpolant, the
/// series is differentiated analytically, and the derivative's real roots
/// are reported as the stationary points. Results are sorted ascending and
/// clipped into the queried interval, since rounding may place a root just
/// outside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChebyshevFinder {
    config: ChebConfig,
}

impl ChebyshevFinder {
    /// Creates a finder with the given config.
    #[must_use]
    pub fn new(config: ChebConfig) -> Self {
        Self { config }
    }
}

impl ExtremaFinder for ChebyshevFinder {
    fn find_extrema<F>(&self, f: &F, left: f64, right: f64) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        if !(left < right) {
            return Vec::new();
        }

        let fitted = fit_adaptive(f, left, right, &self.config);
        let derivative = fitted.differentiate();

        real_roots(&derivative, &self.config)
            .into_iter()
            .map(|x| x.clamp(left, right))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_the_vertex_of_a_parabola() {
        let finder = ChebyshevFinder::default();
        let extrema = finder.find_extrema(&|x: f64| (x - 0.25) * (x - 0.25), -1.0, 1.0);

        assert_eq!(extrema.len(), 1);
        assert_relative_eq!(extrema[0], 0.25, epsilon = 1e-9);
    }

    #[test]
    fn finds_the_stationary_points_of_sine() {
        use std::f64::consts::FRAC_PI_2;

        let finder = ChebyshevFinder::default();
        let extrema = finder.find_extrema(&f64::sin, 0.0, 7.0);

        assert_eq!(extrema.len(), 2);
        assert_relative_eq!(extrema[0], FRAC_PI_2, epsilon = 1e-8);
        assert_relative_eq!(extrema[1], 3.0 * FRAC_PI_2, epsilon = 1e-8);
    }

    #[test]
    fn monotonic_functions_have_no_extrema() {
        let finder = ChebyshevFinder::default();
        assert!(finder.find_extrema(&|x: f64| x.exp(), -1.0, 1.0).is_empty());
        assert!(finder.find_extrema(&|x| 2.0 * x - 1.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn constant_functions_have_no_extrema() {
        let finder = ChebyshevFinder::default();
        assert!(finder.find_extrema(&|_x| 3.0, -10.0, 10.0).is_empty());
    }

    #[test]
    fn results_are_sorted_and_inside_the_interval() {
        let finder = ChebyshevFinder::default();
        let extrema = finder.find_extrema(&|x: f64| (3.0 * x).cos(), -2.0, 2.0);

        assert!(!extrema.is_empty());
        for pair in extrema.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &x in &extrema {
            assert!((-2.0..=2.0).contains(&x));
        }
    }

    #[test]
    fn degenerate_interval_yields_nothing() {
        let finder = ChebyshevFinder::default();
        assert!(finder.find_extrema(&f64::sin, 2.0, 2.0).is_empty());
    }
}
