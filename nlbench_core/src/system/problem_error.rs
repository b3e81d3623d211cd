/// Problem errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProblemError
{
    /// A point violates a feasibility condition of the problem.
    Domain(&'static str),

    /// A Jacobian pattern entry lies outside of `0..n`.
    PatternOutOfRange {
        /// Position in the pattern.
        entry: usize,
        /// Row index of the entry.
        row: usize,
        /// Column index of the entry.
        col: usize,
    },
    /// Length of a given slice does not match the problem.
    SizeMismatch,
    /// Shortage of work slice length.
    WorkShortage,
}

impl core::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            ProblemError::Domain(reason) => write!(f, "Domain: {}", reason),
            ProblemError::PatternOutOfRange {entry, row, col} => write!(f, "PatternOutOfRange: entry {} at ({}, {})", entry, row, col),
            ProblemError::SizeMismatch => write!(f, "SizeMismatch: slice length does not match the problem"),
            ProblemError::WorkShortage => write!(f, "WorkShortage: shortage of work slice length"),
        }
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for ProblemError {}
