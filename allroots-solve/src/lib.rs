//! Finds all real roots of a continuous scalar function on a finite
//! interval.
//!
//! The search domain is recursively split at detected stationary points
//! until every piece is monotonic and therefore contains at most one sign
//! change. Each piece is then handed to a bracketing solver, and the
//! per-piece results are pooled, deduplicated, and sorted.
//!
//! - [`subdivide`] — turns a breakpoint list into monotonic segments using
//!   an [`ExtremaFinder`](allroots_core::ExtremaFinder)
//! - [`find_all_roots`] — drives subdivision, solves each segment with a
//!   [`BracketSolver`](allroots_core::BracketSolver), and aggregates the
//!   results into [`Findings`]
//! - [`brent`] — the default bracketing solver
//!
//! Observers see one [`Event`] per isolated segment and per reported root,
//! and may stop the aggregation early.

mod error;
mod find_all_roots;
mod segment;
mod subdivide;

pub mod brent;

pub use error::Error;
pub use find_all_roots::{
    Action, Event, Findings, Status, find_all_roots, find_all_roots_unobserved,
};
pub use segment::Segment;
pub use subdivide::subdivide;
