use super::*;

fn sample() -> TreeNode {
    TreeNode::leaf("root", 0, 0.0, 0.0)
        .with_child(
            TreeNode::leaf("a", 1, -70.0, 140.0).with_child(TreeNode::leaf("a1", 2, -70.0, 280.0)),
        )
        .with_child(TreeNode::leaf("b", 1, 70.0, 140.0))
}

#[test]
fn walk_is_preorder_with_parents() {
    let root = sample();
    let ids: Vec<(Option<&str>, &str)> = root
        .walk()
        .into_iter()
        .map(|(p, n)| (p.map(|p| p.id.as_str()), n.id.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![
            (None, "root"),
            (Some("root"), "a"),
            (Some("a"), "a1"),
            (Some("root"), "b"),
        ]
    );
}

#[test]
fn links_cover_every_edge_once() {
    let root = sample();
    let links: Vec<(&str, &str)> = root
        .links()
        .iter()
        .map(|l| (l.source.id.as_str(), l.target.id.as_str()))
        .collect();
    assert_eq!(links, vec![("root", "a"), ("a", "a1"), ("root", "b")]);
}

#[test]
fn validate_rejects_depth_gaps_and_duplicates() {
    assert!(sample().validate().is_ok());

    let bad_depth = TreeNode::leaf("r", 0, 0.0, 0.0).with_child(TreeNode::leaf("c", 2, 0.0, 1.0));
    assert!(bad_depth.validate().is_err());

    let dup = TreeNode::leaf("r", 0, 0.0, 0.0).with_child(TreeNode::leaf("r", 1, 0.0, 1.0));
    assert!(dup.validate().is_err());
}

#[test]
fn validate_rejects_depth_past_the_maximum() {
    let root = TreeNode::leaf("root", u32::MAX, 0.0, 0.0)
        .with_child(TreeNode::leaf("a", 0, 0.0, 1.0));
    assert!(matches!(root.validate(), Err(TreeError::Validation(_))));

    let json = format!(
        r#"{{"id":"root","depth":{},"x":0,"y":0,"children":[{{"id":"a","depth":0,"x":0,"y":1}}]}}"#,
        u32::MAX
    );
    assert!(TreeNode::from_json_str(&json).is_err());
}

#[test]
fn json_defaults_optional_fields() {
    let root = TreeNode::from_json_str(
        r#"{"id":"r","depth":0,"x":0,"y":0,"children":[{"id":"c","depth":1,"x":5,"y":140}]}"#,
    )
    .unwrap();
    assert_eq!(root.name, "");
    assert_eq!(root.children.len(), 1);
    assert!(!root.children[0].has_children());
}

#[test]
fn detached_drops_the_subtree_only() {
    let root = sample();
    let d = root.children[0].detached();
    assert_eq!(d.id, "a");
    assert_eq!(d.depth, 1);
    assert!(d.children.is_empty());
}
