//! Case tags, tangent constraints, strategy selection and tolerances.

use nalgebra::Vector2;

use super::{ClosedForm, HandleSolver, RootFinder};
use crate::bezier::Cubic;
use crate::error::SolveError;
use crate::lines::LineParams;

/// Which handle of the run is dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolveCase {
    /// Dragged `p1` (next node off-curve); `p2` is re-placed; curvature at `t = 0`.
    P1Paired,
    /// Dragged `p2` (previous node off-curve); `p1` is re-placed; curvature at `t = 1`.
    P2Paired,
}

impl SolveCase {
    #[inline]
    pub fn curvature_t(self) -> f64 {
        match self {
            Self::P1Paired => 0.0,
            Self::P2Paired => 1.0,
        }
    }
    /// On-curve anchor adjacent to the dragged handle.
    #[inline]
    pub fn anchor(self, seg: &Cubic) -> Vector2<f64> {
        match self {
            Self::P1Paired => seg.p0,
            Self::P2Paired => seg.p3,
        }
    }
    #[inline]
    pub fn dragged(self, seg: &Cubic) -> Vector2<f64> {
        match self {
            Self::P1Paired => seg.p1,
            Self::P2Paired => seg.p2,
        }
    }
    #[inline]
    pub fn paired(self, seg: &Cubic) -> Vector2<f64> {
        match self {
            Self::P1Paired => seg.p2,
            Self::P2Paired => seg.p1,
        }
    }
    /// Far anchor: the other end of the paired handle's tangent.
    #[inline]
    pub fn far_anchor(self, seg: &Cubic) -> Vector2<f64> {
        match self {
            Self::P1Paired => seg.p3,
            Self::P2Paired => seg.p0,
        }
    }
    pub fn with_dragged(self, seg: &Cubic, pos: Vector2<f64>) -> Cubic {
        let mut out = *seg;
        match self {
            Self::P1Paired => out.p1 = pos,
            Self::P2Paired => out.p2 = pos,
        }
        out
    }
    pub fn with_paired(self, seg: &Cubic, pos: Vector2<f64>) -> Cubic {
        let mut out = *seg;
        match self {
            Self::P1Paired => out.p2 = pos,
            Self::P2Paired => out.p1 = pos,
        }
        out
    }
}

/// Line the paired handle is kept on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PairedConstraint {
    /// Paired handle and far anchor share `x`; the unknown is `y`.
    Vertical { x: f64 },
    /// General line; the unknown is `x`.
    Line(LineParams),
}

impl PairedConstraint {
    /// Tangent line through the paired handle and the far anchor of `seg`.
    pub fn of(case: SolveCase, seg: &Cubic, eps_vertical: f64) -> Self {
        let paired = case.paired(seg);
        let far = case.far_anchor(seg);
        match LineParams::through(paired, far, eps_vertical) {
            Some(line) => Self::Line(line),
            None => Self::Vertical { x: paired.x },
        }
    }
    /// Point on the constraint for the free coordinate `u`.
    #[inline]
    pub fn place(&self, u: f64) -> Vector2<f64> {
        match *self {
            Self::Vertical { x } => Vector2::new(x, u),
            Self::Line(line) => line.point_at(u),
        }
    }
    /// Free coordinate of `p` (`y` for vertical, `x` otherwise).
    #[inline]
    pub fn coordinate(&self, p: Vector2<f64>) -> f64 {
        match self {
            Self::Vertical { .. } => p.y,
            Self::Line(_) => p.x,
        }
    }
}

/// Solver tolerances and root-finder budget.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Closed-form denominators at or below this magnitude are unsolvable.
    pub eps_det: f64,
    /// `|Δx|` at or below this makes a tangent "vertical".
    pub eps_vertical: f64,
    /// Secant iteration budget.
    pub max_iter: usize,
    /// Step tolerance, relative to `1 + |u|`.
    pub x_tol: f64,
    /// Absolute curvature residual accepted as converged.
    pub f_tol: f64,
    /// Second secant seed offset, relative to `1 + |seed|`.
    pub secant_step: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_vertical: 1e-12,
            max_iter: 50,
            x_tol: 1e-13,
            f_tol: 1e-15,
            secant_step: 1e-2,
        }
    }
}

/// Runtime strategy selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    ClosedForm,
    RootFinder,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::ClosedForm => "closed-form",
            Self::RootFinder => "root-finder",
        }
    }
}

impl HandleSolver for Strategy {
    fn paired_position(
        &self,
        case: SolveCase,
        seg: &Cubic,
        target: Vector2<f64>,
        k0: f64,
        cfg: &SolveCfg,
    ) -> Result<Vector2<f64>, SolveError> {
        match self {
            Self::ClosedForm => ClosedForm.paired_position(case, seg, target, k0, cfg),
            Self::RootFinder => RootFinder.paired_position(case, seg, target, k0, cfg),
        }
    }
}
