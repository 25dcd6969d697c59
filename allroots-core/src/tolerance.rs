use thiserror::Error;

/// A closeness predicate with absolute and relative tolerances.
///
/// Two values are considered the same when
/// `|a - b| <= abs_tol + rel_tol * max(|a|, |b|)`. With both tolerances set
/// to zero the predicate degrades to exact floating-point equality, which is
/// how degenerate intervals are detected.
///
/// The default configuration (`abs_tol = 1e-16`, `rel_tol = 0`) is the
/// lenient one used to merge detected stationary points into interval
/// endpoints they nearly coincide with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    abs_tol: f64,
    rel_tol: f64,
}

/// Errors that can occur when constructing a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs_tol: 1e-16,
            rel_tol: 0.0,
        }
    }
}

impl Tolerance {
    /// Exact equality: both tolerances are zero.
    pub const EXACT: Self = Self {
        abs_tol: 0.0,
        rel_tol: 0.0,
    };

    /// Creates a tolerance with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Result<Self, ToleranceError> {
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ToleranceError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ToleranceError::RelTol);
        }

        Ok(Self { abs_tol, rel_tol })
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns true if `a` and `b` are the same under this tolerance.
    #[must_use]
    pub fn same(&self, a: f64, b: f64) -> bool {
        #[allow(clippy::float_cmp)]
        if self.abs_tol == 0.0 && self.rel_tol == 0.0 {
            return a == b;
        }

        (a - b).abs() <= self.abs_tol + self.rel_tol * a.abs().max(b.abs())
    }
}
