//! Curvature-preserving handle moves for cubic Bézier outlines.
//!
//! Dragging one off-curve handle of a cubic run re-places the handle on the
//! other side of the run so that the curvature at the dragged handle's anchor
//! stays at the value it had when the drag started.
//!
//! Layout
//! - `bezier`: derivatives and signed curvature of a cubic run.
//! - `lines`: tangent intersection (marker), projection, slope/intercept.
//! - `solve`: `HandleSolver` with the closed-form and root-finder strategies.
//! - `contour`: host outline as index-addressable contours; case classification.
//! - `session`: drag state machine (`HarmonicTool`, `DragSession`).
//! - `sample`: seeded random drags for cross-checks and benches.
//!
//! API Policy
//! - The crate serves the CLI and the editor bindings in this workspace. There
//!   is no stable public API; prefer clarity over compatibility.

pub mod api;
pub mod bezier;
pub mod contour;
pub mod error;
pub mod lines;
pub mod sample;
pub mod session;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SolveError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bezier::{curvature, Cubic};
    pub use crate::contour::{Contour, Layer, Node, NodeKind, NodeRef, PositionUpdate};
    pub use crate::error::SolveError;
    pub use crate::lines::{intersect_lines, project_onto_line};
    pub use crate::session::{DragOutcome, DragSession, HarmonicTool};
    pub use crate::solve::{ClosedForm, HandleSolver, RootFinder, SolveCase, SolveCfg, Strategy};
    pub use nalgebra::Vector2 as Vec2;
}
