//! JSON drag scenarios: an outline, a selection, and a list of drag moves.
//!
//! Node kinds accept this crate's names (`on-curve`, `off-curve`) and the
//! host's node types (`line`, `curve`, `offcurve`).

use anyhow::{bail, Result};
use harmonic::api::{
    Contour, DragOutcome, HarmonicTool, Layer, Node, NodeKind, NodeRef, PositionUpdate, SolveCfg,
    Strategy,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum KindSpec {
    #[serde(alias = "line", alias = "curve", alias = "oncurve")]
    OnCurve,
    #[serde(alias = "offcurve")]
    OffCurve,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NodeSpec {
    pub x: f64,
    pub y: f64,
    pub kind: KindSpec,
    #[serde(default)]
    pub smooth: bool,
}

fn closed_default() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContourSpec {
    pub nodes: Vec<NodeSpec>,
    #[serde(default = "closed_default")]
    pub closed: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeRefSpec {
    pub contour: usize,
    pub node: usize,
}

/// Cumulative offset since drag start.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct MoveSpec {
    pub dx: f64,
    pub dy: f64,
    #[serde(default)]
    pub modifier: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scenario {
    pub contours: Vec<ContourSpec>,
    pub selection: Vec<NodeRefSpec>,
    pub moves: Vec<MoveSpec>,
}

impl Scenario {
    pub fn to_layer(&self) -> Result<Layer> {
        let contours: Vec<Contour> = self
            .contours
            .iter()
            .map(|c| {
                let nodes = c
                    .nodes
                    .iter()
                    .map(|n| Node {
                        pos: Vector2::new(n.x, n.y),
                        kind: match n.kind {
                            KindSpec::OnCurve => NodeKind::OnCurve,
                            KindSpec::OffCurve => NodeKind::OffCurve,
                        },
                        smooth: n.smooth,
                    })
                    .collect();
                Contour::new(nodes, c.closed)
            })
            .collect();
        let selection: Vec<NodeRef> = self
            .selection
            .iter()
            .map(|s| NodeRef::new(s.contour, s.node))
            .collect();
        let layer = Layer::new(contours).with_selection(selection);
        for at in &layer.selection {
            if layer.node(*at).is_none() {
                bail!("selection {at:?} does not name a node");
            }
        }
        Ok(layer)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateSpec {
    pub contour: usize,
    pub node: usize,
    pub x: f64,
    pub y: f64,
}

impl From<&PositionUpdate> for UpdateSpec {
    fn from(up: &PositionUpdate) -> Self {
        Self {
            contour: up.target.contour,
            node: up.target.node,
            x: up.position.x,
            y: up.position.y,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub updates: Vec<UpdateSpec>,
    /// Anchor curvature of the selected run after applying the step.
    pub curvature: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReplayReport {
    pub strategy: &'static str,
    pub armed: bool,
    pub k0: Option<f64>,
    pub steps: Vec<StepReport>,
    pub max_drift: f64,
}

/// Run drag start, every move (applied to the outline), and drag end.
pub fn replay(scenario: &Scenario, strategy: Strategy, cfg: SolveCfg) -> Result<ReplayReport> {
    let mut layer = scenario.to_layer()?;
    let mut tool = HarmonicTool::new(strategy, cfg);
    let armed = tool.on_drag_start(&layer);
    let session = tool.session().copied();
    let mut steps = Vec::with_capacity(scenario.moves.len());
    let mut max_drift: f64 = 0.0;
    for (index, mv) in scenario.moves.iter().enumerate() {
        let outcome = tool.on_drag_move(&layer, Vector2::new(mv.dx, mv.dy), mv.modifier);
        layer.apply(outcome.updates());
        let curvature = session.and_then(|s| {
            let seg = layer.segment_at(s.node)?;
            seg.cubic.curvature(s.case.curvature_t()).ok()
        });
        if let (Some(k), Some(s), DragOutcome::Moved(_)) = (curvature, session, &outcome) {
            max_drift = max_drift.max((k - s.k0).abs());
        }
        let (status, reason) = match &outcome {
            DragOutcome::Moved(_) => ("moved", None),
            DragOutcome::Blocked(err) => ("blocked", Some(err.to_string())),
            DragOutcome::Passthrough => ("passthrough", None),
        };
        tracing::info!(index, status, "replay step");
        steps.push(StepReport {
            index,
            status,
            reason,
            updates: outcome.updates().iter().map(UpdateSpec::from).collect(),
            curvature,
        });
    }
    tool.on_drag_end();
    Ok(ReplayReport {
        strategy: strategy.name(),
        armed,
        k0: session.map(|s| s.k0),
        steps,
        max_drift,
    })
}
