//! Core traits and types for the allroots root-finding workspace.
//!
//! This crate defines the shared abstractions that the subdivision and
//! aggregation machinery builds on:
//!
//! - [`Tolerance`] — a configurable absolute/relative closeness predicate
//! - [`ExtremaFinder`] — locates a function's interior stationary points on
//!   an interval
//! - [`BracketSolver`] — locates the root of a function on an interval that
//!   contains at most one sign change
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod observer;
mod tolerance;
mod traits;

pub use observer::Observer;
pub use tolerance::{Tolerance, ToleranceError};
pub use traits::{BracketRoots, BracketSolver, ExtremaFinder};
