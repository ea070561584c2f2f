use super::*;

fn node(depth: u32, x: f64, y: f64) -> TreeNode {
    TreeNode::leaf(format!("n{depth}"), depth, x, y)
}

fn table(entries: &[(u32, f64)]) -> DepthHeights {
    let mut t = DepthHeights::new();
    for &(d, h) in entries {
        t.record(d, h, h);
    }
    t
}

#[test]
fn empty_table_reduces_to_orientation_swap() {
    let heights = DepthHeights::new();
    let spacing = DepthSpacing::new(&heights, 140.0, 0.0);
    let n = node(3, 12.5, 420.0);

    let v = resolve_position(&n, None, Orientation::Vertical, spacing, false);
    assert_eq!(v, Vec2::new(12.5, 420.0));
    let h = resolve_position(&n, None, Orientation::Horizontal, spacing, false);
    assert_eq!(h, Vec2::new(420.0, 12.5));
}

#[test]
fn depth_factor_shifts_each_level() {
    let heights = DepthHeights::new();
    let spacing = DepthSpacing::new(&heights, 140.0, 1.0);
    let n = node(2, 0.0, 280.0);
    let v = resolve_position(&n, None, Orientation::Vertical, spacing, false);
    assert_eq!(v, Vec2::new(0.0, 282.0));
}

#[test]
fn orientations_are_exact_transposes() {
    let heights = table(&[(0, 200.0), (1, 90.0), (4, 10.0)]);
    let spacing = DepthSpacing::new(&heights, 140.0, 3.0);
    for n in [node(0, 1.0, 0.0), node(2, -35.0, 280.0), node(5, 7.25, 700.0)] {
        let v = resolve_position(&n, None, Orientation::Vertical, spacing, false);
        let h = resolve_position(&n, None, Orientation::Horizontal, spacing, false);
        assert_eq!(v.x, h.y);
        assert_eq!(v.y, h.x);
    }
}

#[test]
fn taller_rows_push_deeper_rows_down() {
    // Depth 0 renders 60px taller than the baseline, depth 1 20px shorter.
    let heights = table(&[(0, 200.0), (1, 120.0)]);
    let spacing = DepthSpacing::new(&heights, 140.0, 0.0);

    assert_eq!(spacing.depth_coordinate(&node(0, 0.0, 0.0)), 0.0);
    assert_eq!(spacing.depth_coordinate(&node(1, 0.0, 140.0)), 200.0);
    assert_eq!(spacing.depth_coordinate(&node(2, 0.0, 280.0)), 320.0);
}

#[test]
fn missing_depth_contributes_nothing() {
    let heights = table(&[(2, 100.0)]);
    let spacing = DepthSpacing::new(&heights, 140.0, 0.0);
    assert_eq!(spacing.depth_coordinate(&node(2, 0.0, 280.0)), 280.0);
    assert_eq!(spacing.depth_coordinate(&node(3, 0.0, 420.0)), 380.0);
}

#[test]
fn resolving_twice_is_bit_identical() {
    let heights = table(&[(0, 133.3), (1, 97.1), (2, 151.9)]);
    let spacing = DepthSpacing::new(&heights, 140.0, 1.7);
    let n = node(3, 0.1, 420.3);
    let a = resolve_position(&n, None, Orientation::Vertical, spacing, false);
    let b = resolve_position(&n, None, Orientation::Vertical, spacing, false);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
}

#[test]
fn raising_one_depth_only_moves_strictly_deeper_nodes() {
    let before = table(&[(0, 140.0), (1, 140.0), (2, 140.0)]);
    let after = table(&[(0, 140.0), (1, 260.0), (2, 140.0)]);
    let nodes = [
        node(0, 0.0, 0.0),
        node(1, 0.0, 140.0),
        node(2, 0.0, 280.0),
        node(3, 0.0, 420.0),
    ];
    for n in &nodes {
        let a = DepthSpacing::new(&before, 140.0, 1.0).depth_coordinate(n);
        let b = DepthSpacing::new(&after, 140.0, 1.0).depth_coordinate(n);
        if n.depth <= 1 {
            assert_eq!(a, b, "depth {} must not move", n.depth);
        } else {
            assert!(b > a, "depth {} must move deeper", n.depth);
        }
    }
}

#[test]
fn translate_to_origin_anchors_on_parent_or_origin() {
    let heights = table(&[(0, 200.0)]);
    let spacing = DepthSpacing::new(&heights, 140.0, 0.0);
    let parent = node(0, 10.0, 0.0);
    let child = node(1, 50.0, 140.0);

    let anchored = resolve_position(&child, Some(&parent), Orientation::Vertical, spacing, true);
    assert_eq!(anchored, Vec2::new(10.0, 0.0));
    let anchored_h = resolve_position(&child, Some(&parent), Orientation::Horizontal, spacing, true);
    assert_eq!(anchored_h, Vec2::new(0.0, 10.0));
    let root = resolve_position(&parent, None, Orientation::Vertical, spacing, true);
    assert_eq!(root, Vec2::ZERO);
}

#[test]
fn transform_string_uses_svg_grammar() {
    assert_eq!(translate_string(Vec2::new(10.0, -2.5)), "translate(10,-2.5)");
    assert_eq!(translate_string(Vec2::new(-0.0, 0.0)), "translate(0,0)");
}

#[test]
fn depth_heights_parse_from_json_object() {
    let t: DepthHeights =
        serde_json::from_str(r#"{"0":{"height":200,"scrollHeight":210},"2":{"height":90}}"#)
            .unwrap();
    assert_eq!(t.get(0).map(|h| h.scroll_height), Some(210.0));
    assert_eq!(t.get(1), None);
    assert_eq!(t.cumulative_offset(3, 140.0), -60.0 + 50.0);
}
