use nalgebra::Vector2;

use crate::error::SolveError;

/// Tangents shorter than this are treated as zero-length.
pub const TANGENT_EPS: f64 = 1e-12;

/// First derivative of one coordinate of a cubic Bézier.
#[inline]
pub fn derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let s = 1.0 - t;
    3.0 * s * s * (p1 - p0) + 6.0 * s * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Second derivative of one coordinate of a cubic Bézier.
#[inline]
pub fn second_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    6.0 * (1.0 - t) * (p2 - 2.0 * p1 + p0) + 6.0 * t * (p3 - 2.0 * p2 + p1)
}

/// Signed curvature of the cubic `p0..p3` at `t`.
///
/// Fails with `DegenerateTangent` when `|B'(t)| <= TANGENT_EPS`.
pub fn curvature(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    t: f64,
) -> Result<f64, SolveError> {
    Cubic::new(p0, p1, p2, p3).curvature(t)
}

/// One cubic run: `p0`/`p3` on-curve anchors, `p1`/`p2` off-curve handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub p3: Vector2<f64>,
}

impl Cubic {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Same curve traversed from `p3` to `p0`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Point on the curve (Bernstein form).
    pub fn eval(&self, t: f64) -> Vector2<f64> {
        let s = 1.0 - t;
        self.p0 * (s * s * s)
            + self.p1 * (3.0 * s * s * t)
            + self.p2 * (3.0 * s * t * t)
            + self.p3 * (t * t * t)
    }

    #[inline]
    pub fn deriv(&self, t: f64) -> Vector2<f64> {
        Vector2::new(
            derivative(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t),
            derivative(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t),
        )
    }

    #[inline]
    pub fn deriv2(&self, t: f64) -> Vector2<f64> {
        Vector2::new(
            second_derivative(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t),
            second_derivative(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t),
        )
    }

    /// Signed curvature at `t` (see module docs for the sign convention).
    pub fn curvature(&self, t: f64) -> Result<f64, SolveError> {
        let d = self.deriv(t);
        let dd = self.deriv2(t);
        let speed = d.norm();
        if !speed.is_finite() || speed <= TANGENT_EPS {
            return Err(SolveError::DegenerateTangent);
        }
        Ok((dd.x * d.y - dd.y * d.x) / (speed * speed * speed))
    }
}
