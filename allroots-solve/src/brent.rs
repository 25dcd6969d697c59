//! Brent's method for a single root in a bracketing interval.
//!
//! The solver combines inverse quadratic interpolation, the secant method,
//! and bisection. Bisection guarantees convergence for any continuous
//! function with a sign change; the interpolation steps provide superlinear
//! convergence when the function cooperates.
//!
//! Endpoint handling follows the aggregation contract: same-sign endpoints
//! mean no root, endpoints that evaluate to exactly zero are reported as-is
//! without iterating, and only a strict sign change starts the iteration.
//! Exhausting the iteration budget is not an error — the best current
//! estimate is returned flagged as unconverged, since a close-but-unproven
//! estimate is more useful than none.

use thiserror::Error;

use allroots_core::{BracketRoots, BracketSolver};

/// Configuration for the Brent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    abs_tol: f64,
    rel_tol: f64,
}

/// Errors that can occur when validating a Brent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-22, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }

        Ok(Self {
            max_iters,
            abs_tol,
            rel_tol,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the root location.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance on the root location.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }
}

/// Bracketing root solver using Brent's method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brent {
    config: Config,
}

impl Brent {
    /// Creates a solver with the given config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the Brent iteration on a strict sign change.
    #[allow(clippy::many_single_char_names)]
    fn iterate<F>(&self, f: &F, left: f64, right: f64, f_left: f64, f_right: f64) -> BracketRoots
    where
        F: Fn(f64) -> f64,
    {
        let mut a = left;
        let mut b = right;
        let mut fa = f_left;
        let mut fb = f_right;
        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.config.max_iters() {
            if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
                // Root is bracketed by a and b; reset the contrapoint.
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol = 2.0 * f64::EPSILON * b.abs()
                + 0.5 * (self.config.abs_tol() + self.config.rel_tol() * b.abs());
            let mid = 0.5 * (c - b);

            #[allow(clippy::float_cmp)]
            if mid.abs() <= tol || fb == 0.0 {
                return BracketRoots::converged(vec![b]);
            }

            if e.abs() >= tol && fa.abs() > fb.abs() {
                // Interpolate: secant when only two points are distinct,
                // inverse quadratic otherwise.
                let s = fb / fa;
                let mut p;
                let mut q;
                #[allow(clippy::float_cmp)]
                if a == c {
                    p = 2.0 * mid * s;
                    q = 1.0 - s;
                } else {
                    let q0 = fa / fc;
                    let r = fb / fc;
                    p = s * (2.0 * mid * q0 * (q0 - r) - (b - a) * (r - 1.0));
                    q = (q0 - 1.0) * (r - 1.0) * (s - 1.0);
                }
                if p > 0.0 {
                    q = -q;
                }
                p = p.abs();

                let min1 = 3.0 * mid * q - (tol * q).abs();
                let min2 = (e * q).abs();
                if 2.0 * p < min1.min(min2) {
                    // Interpolation step accepted.
                    e = d;
                    d = p / q;
                } else {
                    d = mid;
                    e = d;
                }
            } else {
                d = mid;
                e = d;
            }

            a = b;
            fa = fb;
            if d.abs() > tol {
                b += d;
            } else {
                b += tol.copysign(mid);
            }
            fb = f(b);
        }

        BracketRoots::unconverged(b)
    }
}

impl BracketSolver for Brent {
    fn find_root<F>(&self, f: &F, left: f64, right: f64) -> BracketRoots
    where
        F: Fn(f64) -> f64,
    {
        let f_left = f(left);
        let f_right = f(right);

        if f_left * f_right > 0.0 {
            // Same side of the axis, neither endpoint zero.
            return BracketRoots::empty();
        }

        #[allow(clippy::float_cmp)]
        if f_left == 0.0 || f_right == 0.0 {
            let mut roots = Vec::new();
            if f_left == 0.0 {
                roots.push(left);
            }
            if f_right == 0.0 {
                roots.push(right);
            }
            return BracketRoots::converged(roots);
        }

        self.iterate(f, left, right, f_left, f_right)
    }
}
