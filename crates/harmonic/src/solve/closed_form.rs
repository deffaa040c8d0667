//! Algebraic inversion of the endpoint curvature.
//!
//! At `t = 0` the curvature reduces to
//! `k = (2/3)·[(x2−x1)(y1−y0) − (y2−y1)(x1−x0)] / |P1−P0|³`,
//! which is linear in `P2`; at `t = 1` the mirror expression is linear in `P1`.
//! With `C = (3/2)·k0·L³` each case has one closed form per constraint kind.

use nalgebra::Vector2;

use super::{HandleSolver, PairedConstraint, SolveCase, SolveCfg};
use crate::bezier::{Cubic, TANGENT_EPS};
use crate::error::SolveError;

/// Exact O(1) solver; the default strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosedForm;

impl HandleSolver for ClosedForm {
    fn paired_position(
        &self,
        case: SolveCase,
        seg: &Cubic,
        target: Vector2<f64>,
        k0: f64,
        cfg: &SolveCfg,
    ) -> Result<Vector2<f64>, SolveError> {
        let anchor = case.anchor(seg);
        let len = (target - anchor).norm();
        if !len.is_finite() || len <= TANGENT_EPS {
            return Err(SolveError::DegenerateTangent);
        }
        let c = 1.5 * k0 * len * len * len;
        let constraint = PairedConstraint::of(case, seg, cfg.eps_vertical);
        let out = match (case, constraint) {
            (SolveCase::P1Paired, PairedConstraint::Vertical { x }) => {
                Vector2::new(x, y2_from_k(seg.p0, target, x, c, cfg.eps_det)?)
            }
            (SolveCase::P1Paired, PairedConstraint::Line(line)) => {
                line.point_at(x2_from_k(seg.p0, target, line.slope, line.intercept, c, cfg.eps_det)?)
            }
            (SolveCase::P2Paired, PairedConstraint::Vertical { x }) => {
                Vector2::new(x, y1_from_k(target, seg.p3, x, c, cfg.eps_det)?)
            }
            (SolveCase::P2Paired, PairedConstraint::Line(line)) => {
                line.point_at(x1_from_k(target, seg.p3, line.slope, line.intercept, c, cfg.eps_det)?)
            }
        };
        if out.x.is_finite() && out.y.is_finite() {
            Ok(out)
        } else {
            Err(SolveError::unsolvable("paired handle position is not finite"))
        }
    }
}

#[inline]
fn checked_den(den: f64, eps: f64) -> Result<f64, SolveError> {
    if den.abs() <= eps || !den.is_finite() {
        Err(SolveError::unsolvable(
            "dragged tangent is parallel to the paired handle's tangent",
        ))
    } else {
        Ok(den)
    }
}

/// `y2` on the vertical `x = x2`, given anchor `p0` and dragged `p1`.
fn y2_from_k(p0: Vector2<f64>, p1: Vector2<f64>, x2: f64, c: f64, eps: f64) -> Result<f64, SolveError> {
    let den = checked_den(p0.x - p1.x, eps)?;
    Ok((c + p0.x * p1.y - p1.x * p0.y + x2 * p0.y - x2 * p1.y) / den)
}

/// `x2` on `y = z·x + b`, given anchor `p0` and dragged `p1`.
fn x2_from_k(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    z: f64,
    b: f64,
    c: f64,
    eps: f64,
) -> Result<f64, SolveError> {
    let den = checked_den(p0.x * z - p1.x * z - p0.y + p1.y, eps)?;
    Ok((c - b * p0.x + b * p1.x + p0.x * p1.y - p1.x * p0.y) / den)
}

/// `y1` on the vertical `x = x1`, given dragged `p2` and anchor `p3`.
fn y1_from_k(p2: Vector2<f64>, p3: Vector2<f64>, x1: f64, c: f64, eps: f64) -> Result<f64, SolveError> {
    let den = checked_den(p2.x - p3.x, eps)?;
    Ok((c + x1 * p2.y - x1 * p3.y + p2.x * p3.y - p3.x * p2.y) / den)
}

/// `x1` on `y = z·x + b`, given dragged `p2` and anchor `p3`.
fn x1_from_k(
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    z: f64,
    b: f64,
    c: f64,
    eps: f64,
) -> Result<f64, SolveError> {
    let den = checked_den(p2.x * z - p3.x * z - p2.y + p3.y, eps)?;
    Ok((c - b * p2.x + b * p3.x + p2.x * p3.y - p3.x * p2.y) / den)
}
