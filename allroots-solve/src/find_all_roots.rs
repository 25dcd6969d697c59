use allroots_core::{BracketSolver, ExtremaFinder, Observer, Tolerance};

use crate::{Error, Segment, subdivide};

/// Control actions supported by the root aggregation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop aggregating and return the roots collected so far.
    StopEarly,
}

/// Event emitted while aggregating roots across monotonic segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A monotonic segment was isolated and is about to be solved.
    SegmentIsolated {
        /// The segment handed to the bracket solver.
        segment: Segment,
    },
    /// The bracket solver reported a converged root.
    RootFound {
        /// The segment the root was found in.
        segment: Segment,
        /// The root location.
        root: f64,
    },
    /// The bracket solver exhausted its iteration budget.
    ///
    /// The estimate is still collected into the results; this event is the
    /// advisory channel for the non-fatal condition.
    Unconverged {
        /// The segment whose solve did not converge.
        segment: Segment,
        /// Best root estimate at the iteration limit.
        estimate: f64,
    },
}

/// Indicates whether aggregation ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every segment was solved.
    Completed,
    /// Stopped early due to an observer decision; results are partial.
    StoppedByObserver,
}

/// The aggregated result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct Findings {
    /// Final aggregation status.
    pub status: Status,
    /// Unique roots, sorted ascending. May be empty.
    pub roots: Vec<f64>,
    /// The function evaluated at each root — the numerical error of the
    /// result. `None` when no roots were found, so callers can distinguish
    /// "no roots" from "roots with zero residual".
    pub residuals: Option<Vec<f64>>,
    /// Segments whose bracket solve hit the iteration limit. Their best
    /// estimates are still included in `roots`.
    pub unconverged: Vec<Segment>,
}

/// Finds all roots of `f` over the domain described by `breakpoints`.
///
/// The domain is subdivided into monotonic segments at the stationary points
/// reported by `finder`, each segment is solved by `solver`, and the results
/// are pooled, deduplicated by exact value, and sorted. Adjacent segments
/// legitimately share endpoint roots; the duplicates they produce are
/// bit-identical by construction, so exact deduplication suffices.
///
/// The observer sees one [`Event`] per isolated segment, per reported root,
/// and per unconverged solve, and may return [`Action::StopEarly`] to get
/// the partial findings immediately.
///
/// # Errors
///
/// Returns an error if the breakpoint list is malformed (fewer than two
/// entries, non-finite, or decreasing). Unconverged segment solves are not
/// errors; see [`Findings::unconverged`].
pub fn find_all_roots<F, X, B, Obs>(
    f: F,
    breakpoints: &[f64],
    finder: &X,
    solver: &B,
    merge_tol: Tolerance,
    mut observer: Obs,
) -> Result<Findings, Error>
where
    F: Fn(f64) -> f64,
    X: ExtremaFinder,
    B: BracketSolver,
    Obs: Observer<Event, Action>,
{
    let segments = subdivide(&f, finder, merge_tol, breakpoints)?;

    let mut pool: Vec<f64> = Vec::new();
    let mut unconverged: Vec<Segment> = Vec::new();
    let mut status = Status::Completed;

    'segments: for segment in segments {
        if let Some(Action::StopEarly) =
            observer.observe(&Event::SegmentIsolated { segment })
        {
            status = Status::StoppedByObserver;
            break;
        }

        let found = solver.find_root(&f, segment.left, segment.right);

        if found.converged {
            for &root in &found.roots {
                pool.push(root);
                if let Some(Action::StopEarly) =
                    observer.observe(&Event::RootFound { segment, root })
                {
                    status = Status::StoppedByObserver;
                    break 'segments;
                }
            }
        } else {
            unconverged.push(segment);
            for &estimate in &found.roots {
                pool.push(estimate);
                if let Some(Action::StopEarly) =
                    observer.observe(&Event::Unconverged { segment, estimate })
                {
                    status = Status::StoppedByObserver;
                    break 'segments;
                }
            }
        }
    }

    pool.sort_by(f64::total_cmp);
    pool.dedup();

    let residuals = if pool.is_empty() {
        None
    } else {
        Some(pool.iter().map(|&x| f(x)).collect())
    };

    Ok(Findings {
        status,
        roots: pool,
        residuals,
        unconverged,
    })
}

/// Finds all roots without observer support.
///
/// This is a convenience wrapper around [`find_all_roots`] that uses a
/// no-op observer.
///
/// # Errors
///
/// Returns an error if the breakpoint list is malformed.
pub fn find_all_roots_unobserved<F, X, B>(
    f: F,
    breakpoints: &[f64],
    finder: &X,
    solver: &B,
    merge_tol: Tolerance,
) -> Result<Findings, Error>
where
    F: Fn(f64) -> f64,
    X: ExtremaFinder,
    B: BracketSolver,
{
    find_all_roots(f, breakpoints, finder, solver, merge_tol, ())
}
