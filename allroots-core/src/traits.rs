/// Locates a function's interior stationary points on an interval.
///
/// Implementations approximate the function with a smooth interpolant and
/// report where its derivative vanishes. The subdivision algorithm splits the
/// search domain at these points to isolate monotonic pieces.
///
/// The contract callers rely on:
///
/// - The returned points are sorted ascending and clipped into
///   `[left, right]`.
/// - An empty result means no interior extremum could be resolved; the
///   interval is then treated as monotonic.
/// - A result is always produced. Internal approximation failures degrade
///   the result rather than surfacing as errors, and callers never inspect
///   convergence diagnostics.
pub trait ExtremaFinder {
    /// Returns the sorted stationary points of `f` in `[left, right]`.
    fn find_extrema<F>(&self, f: &F, left: f64, right: f64) -> Vec<f64>
    where
        F: Fn(f64) -> f64;
}

/// The roots reported by a [`BracketSolver`] for one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketRoots {
    /// Zero, one, or two roots found in the interval.
    ///
    /// Two roots occur only when both endpoints evaluate to exactly zero.
    pub roots: Vec<f64>,
    /// False if the solver exhausted its iteration budget; the reported
    /// root is then the best available estimate rather than a converged one.
    pub converged: bool,
}

impl BracketRoots {
    /// No root in the interval.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            converged: true,
        }
    }

    /// Converged roots.
    #[must_use]
    pub fn converged(roots: Vec<f64>) -> Self {
        Self {
            roots,
            converged: true,
        }
    }

    /// A best estimate from a solve that hit its iteration limit.
    #[must_use]
    pub fn unconverged(estimate: f64) -> Self {
        Self {
            roots: vec![estimate],
            converged: false,
        }
    }
}

/// Locates the root of a function on an interval containing at most one
/// sign change.
///
/// The contract callers rely on:
///
/// - Endpoints with the same residual sign (neither exactly zero) yield an
///   empty result.
/// - Endpoints that evaluate to exactly zero are themselves reported as
///   roots; no iteration is performed.
/// - A strict sign change yields exactly one root. If the solver's
///   iteration budget runs out first, the best current estimate is still
///   returned with `converged = false` — never discarded and never fatal.
pub trait BracketSolver {
    /// Returns the root(s) of `f` in `[left, right]`.
    fn find_root<F>(&self, f: &F, left: f64, right: f64) -> BracketRoots
    where
        F: Fn(f64) -> f64;
}
