//! Cubic Bézier derivatives and signed curvature.
//!
//! Purpose
//! - Evaluate `B'(t)`, `B''(t)` and the signed curvature of one cubic run
//!   `P0..P3`. Operationally only the endpoints `t ∈ {0, 1}` are used, but
//!   every function is valid on `[0, 1]`.
//!
//! Sign convention
//! - `k = (ddx·dy − ddy·dx) / (dx² + dy²)^{3/2}`. This is the negated textbook
//!   orientation; it is the convention the closed forms in `crate::solve` invert,
//!   so both sides must agree. Do not flip one without the other.
//!
//! References
//! - Code cross-refs: `solve::{ClosedForm, RootFinder}`, `lines`

mod cubic;

pub use cubic::{curvature, derivative, second_derivative, Cubic, TANGENT_EPS};
