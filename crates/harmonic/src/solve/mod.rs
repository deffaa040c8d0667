//! Curvature-preserving handle solves.
//!
//! Purpose
//! - Given the curvature `k0` frozen at drag start and a new position for the
//!   dragged handle, find the paired handle (other side of the same cubic run)
//!   so that the endpoint curvature is again `k0`.
//!
//! Model
//! - One equation, two unknowns. The extra constraint is that the paired handle
//!   stays on its original tangent line: a vertical line (solve for `y`) or
//!   `y = slope·x + intercept` (solve for `x`).
//! - `ClosedForm` inverts the curvature formula algebraically (default).
//!   `RootFinder` runs a secant iteration on `curvature − k0` and serves as a
//!   cross-check and fallback. Both sit behind `HandleSolver`.
//!
//! References
//! - Code cross-refs: `bezier::Cubic::curvature`, `lines::LineParams`,
//!   `session::HarmonicTool`

mod closed_form;
mod root_finder;
mod types;

pub use closed_form::ClosedForm;
pub use root_finder::RootFinder;
pub use types::{PairedConstraint, SolveCase, SolveCfg, Strategy};

use nalgebra::Vector2;

use crate::bezier::Cubic;
use crate::error::SolveError;

/// A strategy that places the paired handle for a moved dragged handle.
pub trait HandleSolver {
    /// New paired-handle position for `case` when the dragged handle of `seg`
    /// moves to `target`, such that the endpoint curvature equals `k0`.
    ///
    /// `seg` holds the geometry before the move; the paired handle's current
    /// position defines the tangent line it is kept on.
    fn paired_position(
        &self,
        case: SolveCase,
        seg: &Cubic,
        target: Vector2<f64>,
        k0: f64,
        cfg: &SolveCfg,
    ) -> Result<Vector2<f64>, SolveError>;
}

impl<S: HandleSolver + ?Sized> HandleSolver for &S {
    fn paired_position(
        &self,
        case: SolveCase,
        seg: &Cubic,
        target: Vector2<f64>,
        k0: f64,
        cfg: &SolveCfg,
    ) -> Result<Vector2<f64>, SolveError> {
        (**self).paired_position(case, seg, target, k0, cfg)
    }
}

/// Curvature at the endpoint shared with the dragged handle.
#[inline]
pub fn initial_curvature(case: SolveCase, seg: &Cubic) -> Result<f64, SolveError> {
    seg.curvature(case.curvature_t())
}

/// Move the dragged handle to `target` and re-place the paired handle.
///
/// Returns the updated segment; the anchors are untouched.
pub fn solve<S: HandleSolver + ?Sized>(
    solver: &S,
    case: SolveCase,
    seg: &Cubic,
    target: Vector2<f64>,
    k0: f64,
    cfg: &SolveCfg,
) -> Result<Cubic, SolveError> {
    let paired = solver.paired_position(case, seg, target, k0, cfg)?;
    Ok(case.with_paired(&case.with_dragged(seg, target), paired))
}
