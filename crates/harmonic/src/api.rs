//! Curated surface for the CLI and editor bindings (UNSTABLE).
//!
//! Hosts only need this module: build a `Layer`, forward drag events to a
//! `HarmonicTool`, and write back the `PositionUpdate`s it returns.

// Curvature model
pub use crate::bezier::{curvature, derivative, second_derivative, Cubic, TANGENT_EPS};
// Marker / projection helpers
pub use crate::lines::{intersect_lines, project_onto_line, LineParams};
// Solvers
pub use crate::solve::{
    initial_curvature, solve, ClosedForm, HandleSolver, PairedConstraint, RootFinder, SolveCase,
    SolveCfg, Strategy,
};
// Host model and drag handling
pub use crate::contour::{classify, Contour, Layer, Node, NodeKind, NodeRef, PositionUpdate, SegmentView};
pub use crate::session::{DragOutcome, DragSession, HarmonicTool};
// Scenario sampling
pub use crate::sample::{draw_drag, DragSample, ReplayToken, SampleCfg};
pub use crate::error::SolveError;
