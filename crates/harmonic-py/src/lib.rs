//! PyO3 bindings that let a Python host editor drive the `harmonic` tool.
//!
//! Notes
//! - Keep bindings thin: the host passes its outline as plain tuples on every
//!   event and writes back the returned positions itself.
//! - All geometry and session logic stays in the `harmonic` crate.

use pyo3::prelude::*;

mod common;
mod geom;
mod tool;

#[pymodule]
fn harmonic_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", harmonic::VERSION)?;
    geom::register(m)?;
    tool::register(m)?;
    Ok(())
}
