//! Stateful drag tool; the host forwards its mouse and keyboard events here.

use crate::common::{layer_from_py, outcome_to_py, vec2, PyContour};
use harmonic::api::{HarmonicTool, SolveCfg, Strategy};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "HarmonicTool")]
pub struct PyHarmonicTool {
    inner: HarmonicTool,
}

#[pymethods]
impl PyHarmonicTool {
    #[new]
    #[pyo3(signature = (strategy = "closed-form"))]
    fn new(strategy: &str) -> PyResult<Self> {
        let solver = match strategy {
            "closed-form" => Strategy::ClosedForm,
            "root-finder" => Strategy::RootFinder,
            other => {
                return Err(PyValueError::new_err(format!(
                    "unknown strategy {other:?} (expected closed-form or root-finder)"
                )))
            }
        };
        Ok(Self {
            inner: HarmonicTool::new(solver, SolveCfg::default()),
        })
    }

    /// Arm on the current selection; `True` if the tool will handle the drag.
    fn drag_start(&mut self, contours: Vec<PyContour>, selection: Vec<(usize, usize)>) -> bool {
        self.inner
            .on_drag_start(&layer_from_py(contours, selection))
    }

    /// `delta` is the cumulative offset since `drag_start`.
    #[pyo3(signature = (contours, selection, delta, modifier = false))]
    fn drag_move(
        &mut self,
        py: Python<'_>,
        contours: Vec<PyContour>,
        selection: Vec<(usize, usize)>,
        delta: (f64, f64),
        modifier: bool,
    ) -> PyResult<PyObject> {
        let layer = layer_from_py(contours, selection);
        let outcome = self.inner.on_drag_move(&layer, vec2(delta), modifier);
        outcome_to_py(py, &outcome)
    }

    fn drag_end(&mut self) {
        self.inner.on_drag_end();
    }

    /// One-shot move (arrow keys) solved against the live geometry.
    #[pyo3(signature = (contours, selection, delta, modifier = false))]
    fn nudge(
        &self,
        py: Python<'_>,
        contours: Vec<PyContour>,
        selection: Vec<(usize, usize)>,
        delta: (f64, f64),
        modifier: bool,
    ) -> PyResult<PyObject> {
        let layer = layer_from_py(contours, selection);
        let outcome = self.inner.nudge(&layer, vec2(delta), modifier);
        outcome_to_py(py, &outcome)
    }

    /// Tangent intersection of the selected handle's run, for drawing.
    fn marker(
        &self,
        contours: Vec<PyContour>,
        selection: Vec<(usize, usize)>,
    ) -> Option<(f64, f64)> {
        self.inner
            .intersection_marker(&layer_from_py(contours, selection))
            .map(|p| (p.x, p.y))
    }

    #[getter]
    fn armed(&self) -> bool {
        self.inner.session().is_some()
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyHarmonicTool>()?;
    Ok(())
}
