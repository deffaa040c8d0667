//! Failure taxonomy for curvature evaluation and handle solves.
//!
//! All variants are local to one drag-move update: callers drop the update and
//! keep the previous positions. None of them is transient, so retrying with the
//! same geometry gives the same answer.

use std::fmt;

/// Why a curvature-preserving solve could not produce a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Zero-length tangent at the evaluated parameter; curvature is undefined.
    DegenerateTangent,
    /// Closed-form denominator vanished or the result was not finite.
    UnsolvableConstraint { reason: &'static str },
    /// Iterative strategy ran out of budget (or hit a flat secant).
    NonConvergence { iterations: usize },
}

impl SolveError {
    pub(crate) fn unsolvable(reason: &'static str) -> Self {
        Self::UnsolvableConstraint { reason }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTangent => {
                write!(f, "tangent has zero length; curvature is undefined")
            }
            Self::UnsolvableConstraint { reason } => {
                write!(f, "curvature constraint has no solution: {reason}")
            }
            Self::NonConvergence { iterations } => {
                write!(f, "root finder did not converge after {iterations} iterations")
            }
        }
    }
}

impl std::error::Error for SolveError {}
