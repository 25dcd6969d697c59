use allroots_core::{ExtremaFinder, Tolerance};

use crate::{Error, Segment, error::validate_breakpoints};

/// Splits the domain described by `breakpoints` into monotonic segments.
///
/// Each adjacent breakpoint pair is refined by locating the function's
/// interior stationary points and splitting there, repeating until a pair
/// comes back unchanged. The refinement is driven by an explicit work list
/// rather than call-stack recursion, so memory is bounded by the number of
/// pending pairs. No depth limit is imposed: refinement terminates because
/// every non-terminal step inserts strictly interior points, but a function
/// oscillating faster than any finite polynomial degree can in principle
/// refine indefinitely.
///
/// `merge_tol` decides when a detected stationary point coincides with a
/// pair's endpoint and should be merged into it instead of inserted as a new
/// breakpoint. Merged endpoints are overwritten with the exact boundary
/// value so drift cannot compound across refinement levels.
///
/// The returned segments cover the input domain in ascending order.
///
/// # Errors
///
/// Returns an error if `breakpoints` has fewer than two entries, contains a
/// non-finite value, or decreases anywhere. Exact adjacent duplicates are
/// accepted and come back as degenerate segments.
pub fn subdivide<F, X>(
    f: &F,
    finder: &X,
    merge_tol: Tolerance,
    breakpoints: &[f64],
) -> Result<Vec<Segment>, Error>
where
    F: Fn(f64) -> f64,
    X: ExtremaFinder,
{
    validate_breakpoints(breakpoints)?;

    let mut pending: Vec<(f64, f64)> = Vec::new();
    push_pairs(&mut pending, breakpoints);

    let mut segments = Vec::new();
    while let Some((left, right)) = pending.pop() {
        let enriched = enrich(f, finder, merge_tol, left, right);
        if is_unchanged(&enriched, left, right) {
            segments.push(Segment::new(left, right));
        } else {
            push_pairs(&mut pending, &enriched);
        }
    }

    Ok(segments)
}

/// Pushes the adjacent pairs of `points` so the leftmost pair pops first.
fn push_pairs(pending: &mut Vec<(f64, f64)>, points: &[f64]) {
    for pair in points.windows(2).rev() {
        pending.push((pair[0], pair[1]));
    }
}

/// Finds the local extrema of `f` in `[left, right]`, endpoints included.
///
/// Degenerate pairs short-circuit before any extrema search: a zero-width
/// interval has nothing to refine. Otherwise the finder's points are
/// bracketed by the endpoints, merging a returned point into an endpoint it
/// already matches under `merge_tol`. The length guard at the tail keeps a
/// single returned point from being consumed for both boundary slots.
fn enrich<F, X>(f: &F, finder: &X, merge_tol: Tolerance, left: f64, right: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
    X: ExtremaFinder,
{
    if Tolerance::EXACT.same(left, right) {
        return vec![left, right];
    }

    let mut extrema = finder.find_extrema(f, left, right);
    if extrema.is_empty() {
        return vec![left, right];
    }

    if merge_tol.same(extrema[0], left) {
        extrema[0] = left;
    } else {
        extrema.insert(0, left);
    }

    let last = extrema.len() - 1;
    if extrema.len() > 1 && merge_tol.same(extrema[last], right) {
        extrema[last] = right;
    } else {
        extrema.push(right);
    }

    extrema
}

/// Returns true if enrichment handed the pair back exactly as it went in.
///
/// Merged endpoints carry the exact boundary values, so bitwise comparison
/// is the correct test here.
#[allow(clippy::float_cmp)]
fn is_unchanged(enriched: &[f64], left: f64, right: f64) -> bool {
    enriched.len() == 2 && enriched[0] == left && enriched[1] == right
}
