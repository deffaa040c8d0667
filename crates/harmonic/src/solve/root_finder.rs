//! Secant iteration on `curvature − k0` along the paired handle's tangent.
//!
//! The residual is affine in the free coordinate, so a well-conditioned solve
//! finishes in one or two steps; the budget only matters for bad input.

use nalgebra::Vector2;

use super::{HandleSolver, PairedConstraint, SolveCase, SolveCfg};
use crate::bezier::Cubic;
use crate::error::SolveError;

/// Iterative fallback, seeded at the paired handle's current coordinate.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootFinder;

impl HandleSolver for RootFinder {
    fn paired_position(
        &self,
        case: SolveCase,
        seg: &Cubic,
        target: Vector2<f64>,
        k0: f64,
        cfg: &SolveCfg,
    ) -> Result<Vector2<f64>, SolveError> {
        let constraint = PairedConstraint::of(case, seg, cfg.eps_vertical);
        let moved = case.with_dragged(seg, target);
        let t = case.curvature_t();
        let residual = |u: f64| {
            case.with_paired(&moved, constraint.place(u))
                .curvature(t)
                .map(|k| k - k0)
        };
        let seed = constraint.coordinate(case.paired(seg));
        let u = secant(residual, seed, cfg)?;
        Ok(constraint.place(u))
    }
}

/// Secant method from `seed` and `seed + step`.
fn secant<F>(f: F, seed: f64, cfg: &SolveCfg) -> Result<f64, SolveError>
where
    F: Fn(f64) -> Result<f64, SolveError>,
{
    let mut u0 = seed;
    let mut f0 = f(u0)?;
    if f0.abs() <= cfg.f_tol {
        return Ok(u0);
    }
    let mut u1 = seed + cfg.secant_step * (1.0 + seed.abs());
    let mut f1 = f(u1)?;
    for iter in 0..cfg.max_iter {
        if f1.abs() <= cfg.f_tol {
            return Ok(u1);
        }
        let df = f1 - f0;
        if df == 0.0 || !df.is_finite() {
            return Err(SolveError::NonConvergence { iterations: iter });
        }
        let u2 = u1 - f1 * (u1 - u0) / df;
        if !u2.is_finite() {
            return Err(SolveError::NonConvergence { iterations: iter });
        }
        if (u2 - u1).abs() <= cfg.x_tol * (1.0 + u2.abs()) {
            return Ok(u2);
        }
        u0 = u1;
        f0 = f1;
        u1 = u2;
        f1 = f(u1)?;
    }
    tracing::trace!(seed, last = u1, residual = f1, "secant budget exhausted");
    Err(SolveError::NonConvergence {
        iterations: cfg.max_iter,
    })
}
