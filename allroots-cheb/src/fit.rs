use std::f64::consts::PI;

use thiserror::Error;

use crate::series::{COEFF_FLOOR, ChebSeries};

/// Degree of the first adaptive fitting attempt.
const INITIAL_DEGREE: usize = 16;

/// Configuration for the Chebyshev extrema finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChebConfig {
    max_degree: usize,
    fallback_degree: usize,
    eig_degree_cap: usize,
}

/// Errors that can occur when validating a Chebyshev finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChebConfigError {
    #[error("max_degree must be at least 2")]
    MaxDegree,

    #[error("fallback_degree must be at least 2")]
    FallbackDegree,

    #[error("eig_degree_cap must be at least 2")]
    EigDegreeCap,
}

impl Default for ChebConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(4096, 1024, 50).unwrap()
    }
}

impl ChebConfig {
    /// Creates a new config with validated parameters.
    ///
    /// `max_degree` bounds the adaptive construction, `fallback_degree` is
    /// the fixed degree used when the construction does not converge, and
    /// `eig_degree_cap` is the largest series degree handed directly to the
    /// eigenvalue root solver before the interval is split instead.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is below 2.
    pub fn new(
        max_degree: usize,
        fallback_degree: usize,
        eig_degree_cap: usize,
    ) -> Result<Self, ChebConfigError> {
        if max_degree < 2 {
            return Err(ChebConfigError::MaxDegree);
        }
        if fallback_degree < 2 {
            return Err(ChebConfigError::FallbackDegree);
        }
        if eig_degree_cap < 2 {
            return Err(ChebConfigError::EigDegreeCap);
        }

        Ok(Self {
            max_degree,
            fallback_degree,
            eig_degree_cap,
        })
    }

    /// Returns the maximum adaptive fitting degree.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns the fixed degree used when adaptive fitting fails.
    #[must_use]
    pub fn fallback_degree(&self) -> usize {
        self.fallback_degree
    }

    /// Returns the largest degree solved by eigenvalues without splitting.
    #[must_use]
    pub fn eig_degree_cap(&self) -> usize {
        self.eig_degree_cap
    }
}

/// Fits `f` on `[left, right]`, doubling the degree until the coefficients
/// resolve the function or the configured maximum is reached.
///
/// An unresolved fit falls back to `fallback_degree`; the degraded series is
/// used as-is, since a rough set of stationary points still advances the
/// subdivision.
pub(crate) fn fit_adaptive<F>(f: &F, left: f64, right: f64, config: &ChebConfig) -> ChebSeries
where
    F: Fn(f64) -> f64,
{
    let mut degree = INITIAL_DEGREE.min(config.max_degree());
    loop {
        let series = interpolate(f, left, right, degree);
        if is_resolved(series.coeffs()) {
            return series;
        }
        if degree >= config.max_degree() {
            break;
        }
        degree = (degree * 2).min(config.max_degree());
    }

    interpolate(f, left, right, config.fallback_degree())
}

/// Interpolates `f` at the `degree + 1` Chebyshev–Lobatto points of
/// `[left, right]`.
pub(crate) fn interpolate<F>(f: &F, left: f64, right: f64, degree: usize) -> ChebSeries
where
    F: Fn(f64) -> f64,
{
    debug_assert!(degree >= 1);

    let n = degree;
    let center = 0.5 * (left + right);
    let half_width = 0.5 * (right - left);

    // x_k = center + half_width * cos(k pi / n), k = 0..=n.
    let values: Vec<f64> = (0..=n)
        .map(|k| {
            let t = (PI * k as f64 / n as f64).cos();
            f(center + half_width * t)
        })
        .collect();

    ChebSeries::new(lobatto_coeffs(&values), left, right)
}

/// Discrete Chebyshev transform of values sampled at Lobatto points.
fn lobatto_coeffs(values: &[f64]) -> Vec<f64> {
    let n = values.len() - 1;
    (0..=n)
        .map(|j| {
            let alternating = if j % 2 == 0 { values[n] } else { -values[n] };
            let mut sum = 0.5 * (values[0] + alternating);
            for (k, &value) in values.iter().enumerate().take(n).skip(1) {
                sum += value * (PI * (j * k) as f64 / n as f64).cos();
            }
            let mut coeff = 2.0 * sum / n as f64;
            if j == 0 || j == n {
                coeff *= 0.5;
            }
            coeff
        })
        .collect()
}

/// Returns true if the trailing coefficients have decayed to rounding noise
/// relative to the largest coefficient.
#[allow(clippy::float_cmp)]
fn is_resolved(coeffs: &[f64]) -> bool {
    let scale = coeffs.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if scale == 0.0 {
        return true;
    }

    let tail = coeffs[coeffs.len() - 2..]
        .iter()
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));
    tail <= scale * COEFF_FLOOR
}
