use thiserror::Error;

/// Errors raised for malformed input before any subdivision begins.
///
/// These are programmer errors in the supplied breakpoint list, not runtime
/// conditions to recover from.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("at least two breakpoints are required, got {count}")]
    TooFewBreakpoints { count: usize },

    #[error("breakpoint is not finite: {value}")]
    NonFiniteBreakpoint { value: f64 },

    #[error("breakpoints decrease at index {index}: {left} followed by {right}")]
    DecreasingBreakpoints { index: usize, left: f64, right: f64 },
}

/// Validates that breakpoints are finite, non-decreasing, and at least two.
///
/// Adjacent duplicates are allowed: an exactly repeated breakpoint denotes a
/// degenerate single-point interval, which the subdivision treats as its own
/// base case.
pub(crate) fn validate_breakpoints(breakpoints: &[f64]) -> Result<(), Error> {
    if breakpoints.len() < 2 {
        return Err(Error::TooFewBreakpoints {
            count: breakpoints.len(),
        });
    }

    for &value in breakpoints {
        if !value.is_finite() {
            return Err(Error::NonFiniteBreakpoint { value });
        }
    }

    for (index, pair) in breakpoints.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(Error::DecreasingBreakpoints {
                index,
                left: pair[0],
                right: pair[1],
            });
        }
    }

    Ok(())
}
