//! Line helpers: tangent intersection, orthogonal projection, slope/intercept.
//!
//! - `intersect_lines`: where the two handle tangents meet (drawing marker only).
//! - `project_onto_line`: locks a drag target to the tangent direction at drag start.
//! - `LineParams`: non-vertical line `y = slope·x + intercept` used to keep a paired
//!   handle on its original tangent.

use nalgebra::{Matrix2, Vector2};

/// Determinant threshold below which two lines are treated as parallel.
const PARALLEL_EPS: f64 = 1e-12;

/// Intersection of the infinite lines `a–b` and `c–d`.
///
/// Returns `None` when the lines are parallel, coincident, or one of them
/// collapses to a point.
pub fn intersect_lines(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> Option<Vector2<f64>> {
    // a + s (b − a) = c + u (d − c)  →  [b−a, c−d] (s, u)ᵀ = c − a
    let m = Matrix2::from_columns(&[b - a, c - d]);
    if m.determinant().abs() <= PARALLEL_EPS {
        return None;
    }
    let su = m.try_inverse()? * (c - a);
    let p = a + (b - a) * su.x;
    if p.x.is_finite() && p.y.is_finite() {
        Some(p)
    } else {
        None
    }
}

/// Orthogonal projection of `p` onto the line through `a` and `b`.
///
/// `None` when `a == b` (no direction to project on).
pub fn project_onto_line(
    a: Vector2<f64>,
    b: Vector2<f64>,
    p: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let dir = b - a;
    let len2 = dir.norm_squared();
    if len2 <= 0.0 || !len2.is_finite() {
        return None;
    }
    let t = (p - a).dot(&dir) / len2;
    Some(a + dir * t)
}

/// Non-vertical line `y = slope·x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LineParams {
    /// Line through `a` and `b`; `None` if `|a.x − b.x| <= eps_vertical`.
    ///
    /// The intercept is averaged over both points so it is symmetric in `(a, b)`.
    pub fn through(a: Vector2<f64>, b: Vector2<f64>, eps_vertical: f64) -> Option<Self> {
        let dx = a.x - b.x;
        if dx.abs() <= eps_vertical {
            return None;
        }
        let slope = (a.y - b.y) / dx;
        let intercept = (a.y + b.y - slope * (a.x + b.x)) / 2.0;
        Some(Self { slope, intercept })
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    #[inline]
    pub fn point_at(&self, x: f64) -> Vector2<f64> {
        Vector2::new(x, self.y_at(x))
    }
}
