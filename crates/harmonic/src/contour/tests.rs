use super::*;
use nalgebra::vector;

/// Closed contour: two cubic runs between three anchors plus a line back.
fn closed_glyph() -> Contour {
    Contour::new(
        vec![
            Node::on(0.0, 0.0),
            Node::off(10.0, 0.0),
            Node::off(20.0, 10.0),
            Node::on(20.0, 20.0).smooth(),
            Node::off(20.0, 30.0),
            Node::off(10.0, 40.0),
            Node::on(0.0, 40.0),
        ],
        true,
    )
}

#[test]
fn closed_contour_wraps() {
    let c = closed_glyph();
    assert_eq!(c.next(6), Some(0));
    assert_eq!(c.prev(0), Some(6));
    assert_eq!(c.next(2), Some(3));
    assert_eq!(c.next(7), None);
}

#[test]
fn open_contour_stops_at_ends() {
    let mut c = closed_glyph();
    c.closed = false;
    assert_eq!(c.next(6), None);
    assert_eq!(c.prev(0), None);
    let single = Contour::new(vec![Node::on(0.0, 0.0)], true);
    assert_eq!(single.next(0), None);
}

#[test]
fn classification_by_neighbour_kind() {
    let on = Node::on(0.0, 0.0);
    let off = Node::off(1.0, 1.0);
    assert_eq!(classify(&off, Some(&off), Some(&on)), Some(SolveCase::P1Paired));
    assert_eq!(classify(&off, Some(&on), Some(&off)), Some(SolveCase::P2Paired));
    assert_eq!(classify(&off, Some(&on), Some(&on)), None);
    assert_eq!(classify(&on, Some(&off), Some(&off)), None);
    assert_eq!(classify(&off, None, None), None);
}

#[test]
fn selection_must_be_single_qualifying_node() {
    let layer = Layer::new(vec![closed_glyph()]);
    assert_eq!(layer.selected_offcurve(), None);

    let one = layer.clone().with_selection(vec![NodeRef::new(0, 1)]);
    assert_eq!(one.selected_offcurve(), Some(NodeRef::new(0, 1)));

    let two = layer
        .clone()
        .with_selection(vec![NodeRef::new(0, 1), NodeRef::new(0, 2)]);
    assert_eq!(two.selected_offcurve(), None);

    let anchor = layer.clone().with_selection(vec![NodeRef::new(0, 3)]);
    assert_eq!(anchor.selected_offcurve(), None);

    let stale = layer.with_selection(vec![NodeRef::new(3, 0)]);
    assert_eq!(stale.selected_offcurve(), None);
}

#[test]
fn p1_segment_view() {
    let layer = Layer::new(vec![closed_glyph()]);
    let seg = layer.segment_at(NodeRef::new(0, 1)).unwrap();
    assert_eq!(seg.case, SolveCase::P1Paired);
    assert_eq!(seg.cubic.p0, vector![0.0, 0.0]);
    assert_eq!(seg.cubic.p1, vector![10.0, 0.0]);
    assert_eq!(seg.cubic.p2, vector![20.0, 10.0]);
    assert_eq!(seg.cubic.p3, vector![20.0, 20.0]);
    assert_eq!(seg.paired, NodeRef::new(0, 2));
    assert_eq!(seg.anchor, NodeRef::new(0, 0));
    assert!(!seg.anchor_smooth);
}

#[test]
fn p2_segment_view_uses_next_anchor() {
    let layer = Layer::new(vec![closed_glyph()]);
    let seg = layer.segment_at(NodeRef::new(0, 2)).unwrap();
    assert_eq!(seg.case, SolveCase::P2Paired);
    assert_eq!(seg.cubic.p0, vector![0.0, 0.0]);
    assert_eq!(seg.cubic.p3, vector![20.0, 20.0]);
    assert_eq!(seg.paired, NodeRef::new(0, 1));
    assert_eq!(seg.anchor, NodeRef::new(0, 3));
    assert!(seg.anchor_smooth);

    // the run after the smooth anchor: its P1 sees the smooth anchor as p0
    let next_run = layer.segment_at(NodeRef::new(0, 4)).unwrap();
    assert_eq!(next_run.case, SolveCase::P1Paired);
    assert!(next_run.anchor_smooth);
}

#[test]
fn open_contour_missing_neighbour_has_no_segment() {
    let open = Contour::new(
        vec![Node::off(5.0, 0.0), Node::off(10.0, 5.0), Node::on(10.0, 10.0)],
        false,
    );
    let layer = Layer::new(vec![open]);
    // P1 without a previous anchor
    assert_eq!(layer.classify_at(NodeRef::new(0, 0)), Some(SolveCase::P1Paired));
    assert!(layer.segment_at(NodeRef::new(0, 0)).is_none());
    // P2 without a run start
    assert!(layer.segment_at(NodeRef::new(0, 1)).is_none());
}

#[test]
fn run_ends_must_be_on_curve() {
    // two handles only: each node's neighbours are off-curve on both sides
    let handles = Contour::new(vec![Node::off(0.0, 0.0), Node::off(10.0, 5.0)], true);
    // three handles before an anchor: the run for node 1 starts at a handle
    let long = Contour::new(
        vec![
            Node::on(0.0, 0.0),
            Node::off(5.0, 0.0),
            Node::off(10.0, 5.0),
            Node::off(15.0, 10.0),
            Node::on(20.0, 20.0),
        ],
        false,
    );
    let layer = Layer::new(vec![handles, long]);
    for at in [NodeRef::new(0, 0), NodeRef::new(0, 1)] {
        assert!(layer.classify_at(at).is_some());
        assert!(layer.segment_at(at).is_none());
    }
    assert!(layer.segment_at(NodeRef::new(1, 2)).is_none());
    assert!(layer.segment_at(NodeRef::new(1, 3)).is_none());
    assert!(layer
        .with_selection(vec![NodeRef::new(0, 0)])
        .intersection_marker()
        .is_none());
}

#[test]
fn marker_is_tangent_intersection() {
    let layer = Layer::new(vec![closed_glyph()]).with_selection(vec![NodeRef::new(0, 1)]);
    // P0–P1 is y = 0, P2–P3 is x = 20
    let m = layer.intersection_marker().unwrap();
    assert!((m - vector![20.0, 0.0]).norm() < 1e-12);

    let parallel = Layer::new(vec![Contour::new(
        vec![
            Node::on(0.0, 0.0),
            Node::off(10.0, 0.0),
            Node::off(20.0, 10.0),
            Node::on(30.0, 10.0),
        ],
        true,
    )])
    .with_selection(vec![NodeRef::new(0, 2)]);
    assert!(parallel.intersection_marker().is_none());
    assert!(Layer::new(vec![closed_glyph()]).intersection_marker().is_none());
}

#[test]
fn apply_writes_known_nodes_only() {
    let mut layer = Layer::new(vec![closed_glyph()]);
    let skipped = layer.apply(&[
        PositionUpdate {
            target: NodeRef::new(0, 1),
            position: vector![11.0, 1.0],
        },
        PositionUpdate {
            target: NodeRef::new(0, 99),
            position: vector![0.0, 0.0],
        },
    ]);
    assert_eq!(skipped, 1);
    assert_eq!(layer.node(NodeRef::new(0, 1)).unwrap().pos, vector![11.0, 1.0]);
}
