use super::*;
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a layout with three frames: two overlapping near the origin and one far away.
fn sample_layout() -> (CanvasLayout, NodeId, NodeId, NodeId) {
    let mut layout = CanvasLayout::new();
    let a = layout.add_node(NodeFrame::new("A".into(), (0.0, 0.0)));
    let b = layout.add_node(NodeFrame::new("B".into(), (50.0, 0.0)));
    let c = layout.add_node(NodeFrame::new("C".into(), (400.0, 300.0)));
    (layout, a, b, c)
}

#[test]
fn node_frame_bounds_are_centered() {
    let node = NodeFrame::new("Frame".into(), (100.0, 200.0));
    assert_eq!(node.bounds(), Rect::new(50.0, 165.0, 100.0, 70.0));
    assert_eq!(node.bounds().center(), Point::new(100.0, 200.0));
    assert!(!node.id.is_nil());
}

#[test]
fn node_at_prefers_topmost_frame() {
    init_logging();
    let (layout, a, b, c) = sample_layout();

    // Inside both A and B; B was added later
    assert_eq!(layout.node_at((25.0, 0.0)), Some(b));
    // Only inside A
    assert_eq!(layout.node_at((-40.0, 10.0)), Some(a));
    assert_eq!(layout.node_at(egui::pos2(400.0, 300.0)), Some(c));
    assert_eq!(layout.node_at((200.0, 200.0)), None);
}

#[test]
fn node_at_includes_frame_edges() {
    let (layout, a, _, _) = sample_layout();
    // Left edge of A
    assert_eq!(layout.node_at((-50.0, 35.0)), Some(a));
    assert_eq!(layout.node_at((-50.1, 0.0)), None);
}

#[test]
fn nodes_touching_accepts_reversed_drag_rect() {
    init_logging();
    let (layout, a, b, c) = sample_layout();

    let forward = Rect::new(-100.0, -100.0, 200.0, 200.0);
    let reversed = Rect::new(100.0, 100.0, -200.0, -200.0);
    assert_eq!(layout.nodes_touching(&forward), vec![a, b]);
    assert_eq!(layout.nodes_touching(&reversed), vec![a, b]);

    let everything = Rect::new(-1000.0, -1000.0, 2000.0, 2000.0);
    assert_eq!(layout.nodes_touching(&everything), vec![a, b, c]);
}

#[test]
fn nodes_touching_ignores_empty_selection() {
    let (layout, _, _, _) = sample_layout();
    // A click without drag produces a zero-size selection
    assert!(layout.nodes_touching(&Rect::new(0.0, 0.0, 0.0, 0.0)).is_empty());
}

#[test]
fn nodes_within_requires_full_containment() {
    let (layout, a, b, _) = sample_layout();

    // Covers A entirely but only part of B
    let selection = Rect::new(-60.0, -40.0, 120.0, 80.0);
    assert_eq!(layout.nodes_within(&selection), vec![a]);
    assert_eq!(layout.nodes_touching(&selection), vec![a, b]);

    // Exact frame bounds count as contained
    assert_eq!(layout.nodes_within(&Rect::new(-50.0, -35.0, 100.0, 70.0)), vec![a]);
}

#[test]
fn group_bounds_pads_union_of_members() {
    let (layout, a, b, c) = sample_layout();

    let bounds = layout.group_bounds(&[a, b]).expect("group has members");
    // A spans x -50..50, B spans 0..100, both y -35..35
    assert_eq!(bounds, Rect::new(-75.0, -60.0, 200.0, 120.0));

    let single = layout.group_bounds(&[c]).expect("group has a member");
    assert_eq!(single, layout.node(&c).map(|n| n.bounds().expanded(25.0, 25.0)).unwrap());
}

#[test]
fn group_bounds_skips_unknown_members() {
    let (layout, a, _, _) = sample_layout();
    let missing = Uuid::new_v4();

    assert_eq!(layout.group_bounds(&[missing]), None);
    assert_eq!(layout.group_bounds(&[]), None);
    assert_eq!(
        layout.group_bounds(&[missing, a]),
        layout.group_bounds(&[a])
    );
}

#[test]
fn layout_bounds_cover_every_frame() {
    let (layout, _, _, _) = sample_layout();
    let bounds = layout.bounds().expect("layout has frames");
    assert_eq!(bounds, Rect::new(-50.0, -35.0, 500.0, 370.0));
    for node in &layout.nodes {
        assert!(bounds.contains_rect(&node.bounds()));
    }
    assert_eq!(CanvasLayout::new().bounds(), None);
}

#[test]
fn move_and_remove_nodes() {
    init_logging();
    let (mut layout, a, _, _) = sample_layout();

    layout.move_node(a, (1000.0, 1000.0)).expect("node exists");
    assert_eq!(layout.node(&a).map(|n| n.position), Some((1000.0, 1000.0)));
    assert_eq!(layout.node_at((1000.0, 1000.0)), Some(a));

    let missing = Uuid::new_v4();
    assert_eq!(
        layout.move_node(missing, (0.0, 0.0)),
        Err("Node does not exist".to_string())
    );

    assert!(layout.remove_node(&a));
    assert!(!layout.remove_node(&a));
    assert!(layout.node(&a).is_none());
    assert_eq!(layout.nodes.len(), 2);
}

#[test]
fn layout_json_round_trip() {
    let (layout, a, _, c) = sample_layout();

    let text = layout.to_json().expect("serialize layout");
    let restored = CanvasLayout::from_json(&text).expect("deserialize layout");

    assert_eq!(restored.nodes.len(), 3);
    assert_eq!(restored.node(&a).map(|n| n.position), Some((0.0, 0.0)));
    assert_eq!(restored.node(&c).map(|n| n.name.as_str()), Some("C"));
    assert_eq!(restored.bounds(), layout.bounds());
}

#[test]
fn layout_from_json_fixture() {
    let fixture = json!({
        "nodes": [
            {
                "id": "6f1c2c1e-9b0a-4c7e-8f7a-2d1b3c4d5e6f",
                "name": "Rect",
                "position": [10.0, 20.0]
            }
        ]
    });

    let layout = CanvasLayout::from_json(&fixture.to_string()).expect("valid fixture");
    assert_eq!(layout.nodes.len(), 1);
    assert_eq!(layout.nodes[0].bounds(), Rect::new(-40.0, -15.0, 100.0, 70.0));

    assert!(CanvasLayout::from_json("{\"nodes\": 5}").is_err());
}
