//! Chebyshev-approximation extrema finding for the allroots workspace.
//!
//! [`ChebyshevFinder`] implements the
//! [`ExtremaFinder`](allroots_core::ExtremaFinder) capability: it fits the
//! target function with an adaptive Chebyshev interpolant, differentiates
//! the series, and reports where the derivative vanishes. The subdivision
//! machinery splits the search domain at those points.
//!
//! Fitting never fails. When the adaptive construction cannot resolve the
//! function within the configured maximum degree, a fixed fallback degree is
//! used instead — a degraded approximation still yields usable stationary
//! points, and the caller never inspects convergence diagnostics.

mod finder;
mod fit;
mod roots;
mod series;

pub use finder::ChebyshevFinder;
pub use fit::{ChebConfig, ChebConfigError};
pub use series::ChebSeries;
