//! Stateless curvature and line helpers.

use crate::common::{cubic_from_py, map_solve_err, vec2};
use pyo3::prelude::*;

/// Signed curvature of the cubic `points` (four `(x, y)` pairs) at `t`.
#[pyfunction]
#[pyo3(signature = (points, t = 0.0))]
pub fn curvature(points: Vec<(f64, f64)>, t: f64) -> PyResult<f64> {
    let cubic = cubic_from_py(points)?;
    cubic.curvature(t).map_err(map_solve_err)
}

/// Intersection of line `a`–`b` with line `c`–`d`; `None` if parallel.
#[pyfunction]
pub fn intersection(
    a: (f64, f64),
    b: (f64, f64),
    c: (f64, f64),
    d: (f64, f64),
) -> Option<(f64, f64)> {
    harmonic::api::intersect_lines(vec2(a), vec2(b), vec2(c), vec2(d)).map(|p| (p.x, p.y))
}

#[pyfunction]
pub fn project(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> Option<(f64, f64)> {
    harmonic::api::project_onto_line(vec2(a), vec2(b), vec2(p)).map(|q| (q.x, q.y))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(curvature, m)?)?;
    m.add_function(wrap_pyfunction!(intersection, m)?)?;
    m.add_function(wrap_pyfunction!(project, m)?)?;
    Ok(())
}
