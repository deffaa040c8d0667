use harmonic::api::{Contour, Cubic, DragOutcome, Layer, Node, NodeRef, SolveError};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// `(x, y, off_curve, smooth)` as sent by the host.
pub type PyNode = (f64, f64, bool, bool);
/// `(nodes, closed)`.
pub type PyContour = (Vec<PyNode>, bool);

pub fn vec2(p: (f64, f64)) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

pub fn cubic_from_py(points: Vec<(f64, f64)>) -> PyResult<Cubic> {
    match points.as_slice() {
        &[p0, p1, p2, p3] => Ok(Cubic::new(vec2(p0), vec2(p1), vec2(p2), vec2(p3))),
        _ => Err(PyValueError::new_err(format!(
            "a cubic run needs exactly 4 points, got {}",
            points.len()
        ))),
    }
}

pub fn layer_from_py(contours: Vec<PyContour>, selection: Vec<(usize, usize)>) -> Layer {
    let contours = contours
        .into_iter()
        .map(|(nodes, closed)| {
            let nodes = nodes
                .into_iter()
                .map(|(x, y, off, smooth)| {
                    let node = if off { Node::off(x, y) } else { Node::on(x, y) };
                    if smooth {
                        node.smooth()
                    } else {
                        node
                    }
                })
                .collect();
            Contour::new(nodes, closed)
        })
        .collect();
    Layer::new(contours).with_selection(
        selection
            .into_iter()
            .map(|(c, n)| NodeRef::new(c, n))
            .collect(),
    )
}

pub fn map_solve_err(err: SolveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// `{"status": ..., "reason": str | None, "updates": [((contour, node), (x, y)), ...]}`
pub fn outcome_to_py(py: Python<'_>, outcome: &DragOutcome) -> PyResult<PyObject> {
    let (status, reason) = match outcome {
        DragOutcome::Passthrough => ("passthrough", None),
        DragOutcome::Blocked(err) => ("blocked", Some(err.to_string())),
        DragOutcome::Moved(_) => ("moved", None),
    };
    let updates: Vec<((usize, usize), (f64, f64))> = outcome
        .updates()
        .iter()
        .map(|u| {
            (
                (u.target.contour, u.target.node),
                (u.position.x, u.position.y),
            )
        })
        .collect();
    let dict = PyDict::new_bound(py);
    dict.set_item("status", status)?;
    dict.set_item("reason", reason)?;
    dict.set_item("updates", updates)?;
    Ok(dict.into_py(py))
}
