use std::{cell::Cell, rc::Rc};

use super::*;

#[derive(Default)]
struct Recorder {
    clicks: Vec<String>,
    toggles: Vec<String>,
    hovers: usize,
    centered: Vec<(String, Vec2)>,
}

impl TreeEvents for Recorder {
    type Event = &'static str;

    fn on_node_click(&mut self, node: &TreeNode, evt: &&'static str) {
        self.clicks.push(format!("{}:{evt}", node.id));
    }
    fn on_node_mouse_over(&mut self, _node: &TreeNode, _evt: &&'static str) {
        self.hovers += 1;
    }
    fn on_node_toggle(&mut self, node_id: &str) {
        self.toggles.push(node_id.to_string());
    }
    fn center_node(&mut self, node: &TreeNode, at: Vec2) {
        self.centered.push((node.id.clone(), at));
    }
}

fn family() -> (TreeNode, TreeNode) {
    let child = TreeNode::leaf("child", 1, 40.0, 140.0);
    let parent = TreeNode::leaf("root", 0, 10.0, 0.0).with_child(child.clone());
    (parent, child)
}

fn vertical() -> TreeConfig {
    TreeConfig {
        orientation: Orientation::Vertical,
        depth_factor: 0.0,
        ..TreeConfig::default()
    }
}

#[test]
fn instant_mount_lands_on_resolved_position() {
    let (parent, child) = family();
    let view = NodeView::mount(&child, Some(&parent), &vertical());
    assert_eq!(view.phase(), Phase::Settled);
    assert_eq!(view.transform(), "translate(40,140)");
    assert_eq!(view.opacity(), 1.0);
}

#[test]
fn animated_mount_grows_out_of_parent() {
    let (parent, child) = family();
    let cfg = TreeConfig {
        enable_legacy_transitions: true,
        transition_duration_ms: 100.0,
        ease: crate::animation::ease::Ease::Linear,
        ..vertical()
    };
    let mut view = NodeView::mount(&child, Some(&parent), &cfg);
    assert_eq!(view.phase(), Phase::Entering);
    assert_eq!(view.transform(), "translate(10,0)");
    assert_eq!(view.opacity(), 0.0);

    view.advance(50.0);
    assert_eq!(view.transform(), "translate(25,70)");
    assert_eq!(view.opacity(), 0.5);
    view.advance(50.0);
    assert_eq!(view.phase(), Phase::Settled);
    assert_eq!(view.transform(), "translate(40,140)");
}

#[test]
fn unchanged_props_do_not_recommit() {
    let (parent, child) = family();
    let cfg = vertical();
    let mut view = NodeView::mount(&child, Some(&parent), &cfg);
    assert!(!view.set_props(&child, Some(&parent), &cfg, 0));

    let moved = TreeNode::leaf("child", 1, 60.0, 140.0);
    assert!(view.set_props(&moved, Some(&parent), &cfg, 0));
    assert_eq!(view.transform(), "translate(60,140)");

    assert!(view.set_props(&moved, Some(&parent), &cfg, 1));

    let flipped = TreeConfig {
        orientation: Orientation::Horizontal,
        ..cfg
    };
    assert!(view.set_props(&moved, Some(&parent), &flipped, 1));
    assert_eq!(view.transform(), "translate(140,60)");
}

#[test]
fn click_requests_recenter_exactly_once() {
    let (parent, child) = family();
    let mut view = NodeView::mount(&child, Some(&parent), &vertical());
    let mut rec = Recorder::default();

    assert!(!view.after_render(&mut rec));
    view.click(&"evt", &mut rec);
    assert!(view.recenter_pending());
    assert!(view.after_render(&mut rec));
    assert!(!view.after_render(&mut rec));

    assert_eq!(rec.clicks, vec!["child:evt".to_string()]);
    assert_eq!(rec.centered, vec![("child".to_string(), Vec2::new(40.0, 140.0))]);
}

#[test]
fn toggle_reports_id_and_recenters() {
    let (parent, _) = family();
    let mut view = NodeView::mount(&parent, None, &vertical());
    let mut rec = Recorder::default();
    view.toggle(&mut rec);
    view.mouse_over(&"hover", &mut rec);
    assert!(view.after_render(&mut rec));
    assert_eq!(rec.toggles, vec!["root".to_string()]);
    assert_eq!(rec.hovers, 1);
    assert_eq!(rec.centered.len(), 1);
}

#[test]
fn leave_shrinks_into_parent_and_signals_once() {
    let (parent, child) = family();
    let cfg = TreeConfig {
        enable_legacy_transitions: true,
        transition_duration_ms: 10.0,
        ..vertical()
    };
    let mut view = NodeView::mount(&child, Some(&parent), &cfg);
    view.advance(10.0);

    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    view.leave(&cfg, Some(Box::new(move |_: &NodeVisual| counter.set(counter.get() + 1))));
    assert_eq!(view.phase(), Phase::Leaving);
    view.advance(5.0);
    view.advance(5.0);
    view.advance(5.0);

    assert_eq!(fired.get(), 1);
    assert_eq!(view.phase(), Phase::Removed);
    assert_eq!(view.visual().opacity, 0.0);
    assert_eq!(view.transform(), "translate(10,0)");
}

#[test]
fn class_names_reflect_children_and_extra_class() {
    let (parent, child) = family();
    let mut cfg = vertical();
    assert_eq!(
        NodeView::mount(&parent, None, &cfg).class_name(&cfg),
        "rd3t-node"
    );
    cfg.node_class_name = Some("  team ".to_string());
    assert_eq!(
        NodeView::mount(&child, Some(&parent), &cfg).class_name(&cfg),
        "rd3t-leaf-node team"
    );
}

#[test]
fn default_element_escapes_labels_and_hooks_replace_it() {
    let mut node = TreeNode::leaf("n", 0, 0.0, 0.0);
    node.name = "A & B".to_string();
    node.attributes.insert("role".to_string(), "<lead>".to_string());
    let view = NodeView::mount(&node, None, &vertical());

    let markup = view.render_element(&RenderHooks::default());
    assert!(markup.starts_with(r#"<circle r="15"/>"#));
    assert!(markup.contains(">A &amp; B</text>"));
    assert!(markup.contains("role: &lt;lead&gt;"));

    let hooks = RenderHooks::default().with_node(|n| format!("<rect id=\"{}\"/>", n.id));
    assert_eq!(view.render_element(&hooks), "<rect id=\"n\"/>");
}
