/// A sub-interval guaranteed by construction to contain at most one sign
/// change of the target function.
///
/// Segments are produced only as terminal leaves of the subdivision; between
/// two consecutive stationary points a continuous function is monotonic, so
/// the guarantee holds without direct verification. A segment with
/// `left == right` is a degenerate single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Left endpoint.
    pub left: f64,
    /// Right endpoint, `>= left`.
    pub right: f64,
}

impl Segment {
    /// Creates a segment from ordered endpoints.
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Returns the segment width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if both endpoints are the exact same value.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }
}
