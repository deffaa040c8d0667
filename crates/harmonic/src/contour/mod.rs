//! Index-addressable contours and the selection queries the tool needs.
//!
//! Purpose
//! - Hold a host's outline as ordered node lists (`Contour`) grouped in a
//!   `Layer`; "next"/"previous" are index arithmetic with wraparound on closed
//!   contours and `None` past the ends of open ones.
//! - Classify a selected off-curve node into a `SolveCase` and cut out the
//!   cubic run it belongs to.
//!
//! Conventions
//! - A node is `P1` of a run if it and its next node are off-curve, `P2` if it
//!   and its previous node are off-curve. `P1` is tested first.
//! - Positions written back by the tool go through `Layer::apply`; nothing else
//!   mutates the layer.

use nalgebra::Vector2;

use crate::bezier::Cubic;
use crate::lines::intersect_lines;
use crate::solve::SolveCase;

/// On-curve anchor or off-curve handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    OnCurve,
    OffCurve,
}

/// One outline node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: Vector2<f64>,
    pub kind: NodeKind,
    /// Host "smooth" flag; only meaningful on on-curve nodes.
    pub smooth: bool,
}

impl Node {
    #[inline]
    pub fn on(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            kind: NodeKind::OnCurve,
            smooth: false,
        }
    }
    #[inline]
    pub fn off(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            kind: NodeKind::OffCurve,
            smooth: false,
        }
    }
    #[inline]
    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }
    #[inline]
    pub fn is_off_curve(&self) -> bool {
        self.kind == NodeKind::OffCurve
    }
}

/// Ordered node list; closed contours wrap around.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    pub nodes: Vec<Node>,
    pub closed: bool,
}

impl Contour {
    pub fn new(nodes: Vec<Node>, closed: bool) -> Self {
        Self { nodes, closed }
    }

    pub fn next(&self, i: usize) -> Option<usize> {
        let n = self.nodes.len();
        if i >= n {
            return None;
        }
        if i + 1 < n {
            Some(i + 1)
        } else if self.closed && n > 1 {
            Some(0)
        } else {
            None
        }
    }

    pub fn prev(&self, i: usize) -> Option<usize> {
        let n = self.nodes.len();
        if i >= n {
            return None;
        }
        if i > 0 {
            Some(i - 1)
        } else if self.closed && n > 1 {
            Some(n - 1)
        } else {
            None
        }
    }
}

/// Address of a node inside a `Layer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub contour: usize,
    pub node: usize,
}

impl NodeRef {
    #[inline]
    pub fn new(contour: usize, node: usize) -> Self {
        Self { contour, node }
    }
}

/// A host position write: move `target` to `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionUpdate {
    pub target: NodeRef,
    pub position: Vector2<f64>,
}

/// The cubic run around a classified off-curve node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentView {
    pub case: SolveCase,
    pub cubic: Cubic,
    pub dragged: NodeRef,
    pub paired: NodeRef,
    pub anchor: NodeRef,
    pub anchor_smooth: bool,
}

/// Classify a node by its kind and its neighbours' kinds.
pub fn classify(node: &Node, next: Option<&Node>, prev: Option<&Node>) -> Option<SolveCase> {
    if !node.is_off_curve() {
        return None;
    }
    if next.is_some_and(Node::is_off_curve) {
        Some(SolveCase::P1Paired)
    } else if prev.is_some_and(Node::is_off_curve) {
        Some(SolveCase::P2Paired)
    } else {
        None
    }
}

/// Contours plus the host's current node selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    pub contours: Vec<Contour>,
    pub selection: Vec<NodeRef>,
}

impl Layer {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self {
            contours,
            selection: Vec::new(),
        }
    }

    pub fn with_selection(mut self, selection: Vec<NodeRef>) -> Self {
        self.selection = selection;
        self
    }

    pub fn node(&self, at: NodeRef) -> Option<&Node> {
        self.contours.get(at.contour)?.nodes.get(at.node)
    }

    /// Case of the node at `at`, if it qualifies.
    pub fn classify_at(&self, at: NodeRef) -> Option<SolveCase> {
        let contour = self.contours.get(at.contour)?;
        let node = contour.nodes.get(at.node)?;
        let next = contour.next(at.node).map(|i| &contour.nodes[i]);
        let prev = contour.prev(at.node).map(|i| &contour.nodes[i]);
        classify(node, next, prev)
    }

    /// The single selected node, if the selection has exactly one qualifying
    /// off-curve node.
    pub fn selected_offcurve(&self) -> Option<NodeRef> {
        match self.selection.as_slice() {
            [only] if self.classify_at(*only).is_some() => Some(*only),
            _ => None,
        }
    }

    /// Cubic run containing the off-curve node at `at`.
    ///
    /// `None` if the node does not classify, a neighbour is missing (open
    /// contour end), or either end of the run is not an on-curve anchor.
    pub fn segment_at(&self, at: NodeRef) -> Option<SegmentView> {
        let case = self.classify_at(at)?;
        let contour = &self.contours[at.contour];
        let (i0, i1, i2, i3) = match case {
            SolveCase::P1Paired => {
                let next = contour.next(at.node)?;
                (contour.prev(at.node)?, at.node, next, contour.next(next)?)
            }
            SolveCase::P2Paired => {
                let prev = contour.prev(at.node)?;
                (contour.prev(prev)?, prev, at.node, contour.next(at.node)?)
            }
        };
        if contour.nodes[i0].is_off_curve() || contour.nodes[i3].is_off_curve() {
            return None;
        }
        let idx = |i: usize| NodeRef::new(at.contour, i);
        let pos = |i: usize| contour.nodes[i].pos;
        let (paired, anchor) = match case {
            SolveCase::P1Paired => (i2, i0),
            SolveCase::P2Paired => (i1, i3),
        };
        Some(SegmentView {
            case,
            cubic: Cubic::new(pos(i0), pos(i1), pos(i2), pos(i3)),
            dragged: at,
            paired: idx(paired),
            anchor: idx(anchor),
            anchor_smooth: contour.nodes[anchor].smooth,
        })
    }

    /// Where the two handle tangents of the selected run meet.
    ///
    /// Drawing only; `None` without a qualifying selection or for parallel
    /// tangents.
    pub fn intersection_marker(&self) -> Option<Vector2<f64>> {
        let seg = self.segment_at(self.selected_offcurve()?)?;
        let c = seg.cubic;
        intersect_lines(c.p0, c.p1, c.p2, c.p3)
    }

    /// Write positions back. Unknown targets are skipped and counted.
    pub fn apply(&mut self, updates: &[PositionUpdate]) -> usize {
        let mut skipped = 0;
        for up in updates {
            match self
                .contours
                .get_mut(up.target.contour)
                .and_then(|c| c.nodes.get_mut(up.target.node))
            {
                Some(node) => node.pos = up.position,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "position updates for unknown nodes");
        }
        skipped
    }
}

#[cfg(test)]
mod tests;
