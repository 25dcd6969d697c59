//! Shared helpers for the end-to-end tests in `tests/`.

use allroots_cheb::ChebyshevFinder;
use allroots_core::Tolerance;
use allroots_solve::brent::Brent;
use allroots_solve::{Error, Findings, find_all_roots_unobserved};

/// Runs the full pipeline with the default Chebyshev finder, Brent solver,
/// and merge tolerance.
///
/// # Errors
///
/// Returns an error if the breakpoint list is malformed.
pub fn run<F>(f: F, breakpoints: &[f64]) -> Result<Findings, Error>
where
    F: Fn(f64) -> f64,
{
    find_all_roots_unobserved(
        f,
        breakpoints,
        &ChebyshevFinder::default(),
        &Brent::default(),
        Tolerance::default(),
    )
}
