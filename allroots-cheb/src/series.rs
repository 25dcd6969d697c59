/// A finite Chebyshev series on an interval.
///
/// Coefficients are in the first-kind basis `T_0, T_1, ...` over the unit
/// interval `[-1, 1]`; evaluation maps interval points onto the unit
/// interval first. The coefficient list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebSeries {
    coeffs: Vec<f64>,
    left: f64,
    right: f64,
}

/// Relative threshold below which trailing coefficients are negligible.
pub(crate) const COEFF_FLOOR: f64 = 100.0 * f64::EPSILON;

impl ChebSeries {
    pub(crate) fn new(coeffs: Vec<f64>, left: f64, right: f64) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self {
            coeffs,
            left,
            right,
        }
    }

    /// Returns the series coefficients `c_0..=c_n`.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the left end of the interval.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right end of the interval.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Maps an interval point onto the unit interval.
    pub(crate) fn to_unit(&self, x: f64) -> f64 {
        (2.0 * x - (self.left + self.right)) / (self.right - self.left)
    }

    /// Maps a unit-interval point back onto the interval.
    pub(crate) fn from_unit(&self, t: f64) -> f64 {
        0.5 * ((self.right - self.left) * t + self.left + self.right)
    }

    /// Evaluates the series at an interval point.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.eval_unit(self.to_unit(x))
    }

    /// Clenshaw evaluation at a unit-interval point.
    pub(crate) fn eval_unit(&self, t: f64) -> f64 {
        let mut b1 = 0.0;
        let mut b2 = 0.0;
        for &c in self.coeffs[1..].iter().rev() {
            let b = c + 2.0 * t * b1 - b2;
            b2 = b1;
            b1 = b;
        }
        self.coeffs[0] + t * b1 - b2
    }

    /// Returns the derivative as a series on the same interval.
    #[must_use]
    pub fn differentiate(&self) -> ChebSeries {
        let m = self.coeffs.len();
        if m <= 1 {
            return ChebSeries::new(vec![0.0], self.left, self.right);
        }

        let n = m - 1;
        let mut derived = vec![0.0; n];
        for k in (0..n).rev() {
            let carried = if k + 2 < n { derived[k + 2] } else { 0.0 };
            derived[k] = carried + 2.0 * (k as f64 + 1.0) * self.coeffs[k + 1];
        }
        derived[0] *= 0.5;

        // Chain rule for the interval-to-unit mapping.
        let scale = 2.0 / (self.right - self.left);
        for value in &mut derived {
            *value *= scale;
        }

        ChebSeries::new(derived, self.left, self.right)
    }

    /// Returns a copy with negligible trailing coefficients dropped.
    pub(crate) fn trimmed(&self) -> ChebSeries {
        let scale = self
            .coeffs
            .iter()
            .fold(0.0_f64, |acc, c| acc.max(c.abs()));
        let floor = scale * COEFF_FLOOR;

        let mut len = self.coeffs.len();
        while len > 1 && self.coeffs[len - 1].abs() <= floor {
            len -= 1;
        }

        ChebSeries::new(self.coeffs[..len].to_vec(), self.left, self.right)
    }
}
