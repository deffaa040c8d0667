//! Walk one drag gesture through `HarmonicTool` and print the curvature drift.
//!
//! Purpose
//! - Show the host-side call order (start, moves, end) on a small closed outline
//!   and confirm that the anchor curvature stays at its drag-start value.

use harmonic::prelude::*;

fn main() {
    let mut layer = Layer::new(vec![Contour::new(
        vec![
            Node::on(0.0, 0.0),
            Node::off(10.0, 0.0),
            Node::off(20.0, 10.0),
            Node::on(20.0, 20.0),
            Node::on(0.0, 20.0),
        ],
        true,
    )])
    .with_selection(vec![NodeRef::new(0, 1)]);

    let mut tool = HarmonicTool::<Strategy>::default();
    if !tool.on_drag_start(&layer) {
        eprintln!("selection does not qualify");
        return;
    }
    let k0 = tool.session().map(|s| s.k0).unwrap_or_default();
    println!("k0={k0:.12}");

    for step in 1..=8 {
        let delta = Vec2::new(0.5 * step as f64, 0.75 * step as f64);
        match tool.on_drag_move(&layer, delta, false) {
            DragOutcome::Moved(updates) => {
                layer.apply(&updates);
                let run = layer
                    .segment_at(NodeRef::new(0, 1))
                    .map(|s| s.cubic)
                    .expect("run still present");
                let k = run.curvature(0.0).unwrap_or(f64::NAN);
                println!(
                    "step={step} p1=({:.3},{:.3}) p2=({:.3},{:.3}) drift={:.3e}",
                    run.p1.x,
                    run.p1.y,
                    run.p2.x,
                    run.p2.y,
                    (k - k0).abs()
                );
            }
            DragOutcome::Blocked(err) => println!("step={step} blocked: {err}"),
            DragOutcome::Passthrough => println!("step={step} passthrough"),
        }
    }
    tool.on_drag_end();
}
