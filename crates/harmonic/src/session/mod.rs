//! Drag handling: arm on drag start, solve on every move, discard on end.
//!
//! State machine
//! - Idle → Armed on `on_drag_start` when exactly one qualifying off-curve node
//!   is selected and its endpoint curvature is defined. Arming snapshots the
//!   run and freezes `k0`.
//! - Armed → Armed on `on_drag_move`: target = start + cumulative delta,
//!   optional projection onto the start tangent, solve, emit two writes. The
//!   session is read-only here, so equal deltas give equal outputs.
//! - Armed → Idle on `on_drag_end`, or when the selection no longer points at
//!   the armed node (the move is then passed through).
//! - Keyboard nudges (`nudge`) never touch the session; they measure `k` on the
//!   live geometry each time.

use nalgebra::Vector2;

use crate::bezier::Cubic;
use crate::contour::{Layer, NodeRef, PositionUpdate, SegmentView};
use crate::error::SolveError;
use crate::lines::project_onto_line;
use crate::solve::{initial_curvature, HandleSolver, SolveCase, SolveCfg, Strategy};

/// Frozen state of one drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub node: NodeRef,
    pub paired: NodeRef,
    pub case: SolveCase,
    /// Run geometry at drag start.
    pub snapshot: Cubic,
    /// Endpoint curvature at drag start; never recomputed during the drag.
    pub k0: f64,
    /// Dragged node position at drag start.
    pub start: Vector2<f64>,
    pub anchor_smooth: bool,
}

impl DragSession {
    /// Snapshot `seg` and freeze its endpoint curvature.
    pub fn arm(seg: &SegmentView) -> Result<Self, SolveError> {
        let k0 = initial_curvature(seg.case, &seg.cubic)?;
        Ok(Self {
            node: seg.dragged,
            paired: seg.paired,
            case: seg.case,
            snapshot: seg.cubic,
            k0,
            start: seg.case.dragged(&seg.cubic),
            anchor_smooth: seg.anchor_smooth,
        })
    }

    #[inline]
    pub fn anchor(&self) -> Vector2<f64> {
        self.case.anchor(&self.snapshot)
    }

    /// Drag target for a cumulative `delta`, locked to the start tangent when
    /// `modifier` is held or the anchor is smooth.
    pub fn target(&self, delta: Vector2<f64>, modifier: bool) -> Vector2<f64> {
        lock_target(self.anchor(), self.start, delta, modifier || self.anchor_smooth)
    }

    /// Solve one move against the frozen snapshot and `k0`.
    pub fn resolve<S: HandleSolver + ?Sized>(
        &self,
        solver: &S,
        cfg: &SolveCfg,
        delta: Vector2<f64>,
        modifier: bool,
    ) -> Result<[PositionUpdate; 2], SolveError> {
        let target = self.target(delta, modifier);
        let paired = solver.paired_position(self.case, &self.snapshot, target, self.k0, cfg)?;
        Ok([
            PositionUpdate {
                target: self.node,
                position: target,
            },
            PositionUpdate {
                target: self.paired,
                position: paired,
            },
        ])
    }
}

fn lock_target(
    anchor: Vector2<f64>,
    start: Vector2<f64>,
    delta: Vector2<f64>,
    lock: bool,
) -> Vector2<f64> {
    let raw = start + delta;
    if !lock {
        return raw;
    }
    project_onto_line(anchor, start, raw).unwrap_or_else(|| {
        tracing::debug!("handle sits on its anchor; tangent lock skipped");
        raw
    })
}

/// Result of one move event.
#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome {
    /// Not ours: the host runs its default move.
    Passthrough,
    /// Ours, but the geometry has no curvature-preserving answer. Leave the
    /// outline unchanged (the host may alert the user).
    Blocked(SolveError),
    /// Write these positions (dragged node first, then its paired handle).
    Moved(Vec<PositionUpdate>),
}

impl DragOutcome {
    pub fn updates(&self) -> &[PositionUpdate] {
        match self {
            Self::Moved(updates) => updates,
            _ => &[],
        }
    }
}

/// Curvature-preserving move tool over a host `Layer`.
#[derive(Clone, Debug, Default)]
pub struct HarmonicTool<S: HandleSolver = Strategy> {
    solver: S,
    cfg: SolveCfg,
    session: Option<DragSession>,
}

impl<S: HandleSolver> HarmonicTool<S> {
    pub fn new(solver: S, cfg: SolveCfg) -> Self {
        Self {
            solver,
            cfg,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Arm a session for the selected node. Returns whether one was armed.
    pub fn on_drag_start(&mut self, layer: &Layer) -> bool {
        self.session = None;
        let Some(seg) = layer.selected_offcurve().and_then(|at| layer.segment_at(at)) else {
            return false;
        };
        match DragSession::arm(&seg) {
            Ok(session) => {
                tracing::debug!(
                    node = ?session.node,
                    case = ?session.case,
                    k0 = session.k0,
                    "drag armed"
                );
                self.session = Some(session);
                true
            }
            Err(err) => {
                tracing::debug!(node = ?seg.dragged, %err, "drag not armed");
                false
            }
        }
    }

    /// Handle a drag move with cumulative `delta` since drag start.
    pub fn on_drag_move(
        &mut self,
        layer: &Layer,
        delta: Vector2<f64>,
        modifier: bool,
    ) -> DragOutcome {
        let Some(session) = self.session else {
            return DragOutcome::Passthrough;
        };
        if layer.selected_offcurve() != Some(session.node) {
            tracing::debug!(node = ?session.node, "selection changed; drag session discarded");
            self.session = None;
            return DragOutcome::Passthrough;
        }
        match session.resolve(&self.solver, &self.cfg, delta, modifier) {
            Ok(updates) => {
                tracing::trace!(?delta, paired = ?updates[1].position, "drag solved");
                DragOutcome::Moved(updates.to_vec())
            }
            Err(err) => {
                tracing::debug!(?delta, %err, "drag move blocked");
                DragOutcome::Blocked(err)
            }
        }
    }

    pub fn on_drag_end(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("drag ended");
        }
    }

    /// Non-drag move (arrow keys): `k` is measured on the live geometry and
    /// the node's current position is the start.
    pub fn nudge(&self, layer: &Layer, delta: Vector2<f64>, modifier: bool) -> DragOutcome {
        let Some(seg) = layer.selected_offcurve().and_then(|at| layer.segment_at(at)) else {
            return DragOutcome::Passthrough;
        };
        let live = match DragSession::arm(&seg) {
            Ok(live) => live,
            Err(err) => {
                tracing::debug!(node = ?seg.dragged, %err, "nudge passed through");
                return DragOutcome::Passthrough;
            }
        };
        match live.resolve(&self.solver, &self.cfg, delta, modifier) {
            Ok(updates) => DragOutcome::Moved(updates.to_vec()),
            Err(err) => {
                tracing::debug!(?delta, %err, "nudge blocked");
                DragOutcome::Blocked(err)
            }
        }
    }

    /// Drawing-only query, independent of the drag state.
    pub fn intersection_marker(&self, layer: &Layer) -> Option<Vector2<f64>> {
        layer.intersection_marker()
    }
}
