use crate::{foundation::core::Vec2, tree::model::TreeNode};

/// Host callbacks for pointer interaction and view requests.
///
/// [`TreeEvents::Event`] is the host's raw interaction event; it is passed through untouched.
/// Every method defaults to a no-op so hosts implement only what they listen to.
pub trait TreeEvents {
    type Event;

    fn on_node_click(&mut self, _node: &TreeNode, _evt: &Self::Event) {}
    fn on_node_mouse_over(&mut self, _node: &TreeNode, _evt: &Self::Event) {}
    fn on_node_mouse_out(&mut self, _node: &TreeNode, _evt: &Self::Event) {}
    /// Expand/collapse request for the node with this id.
    fn on_node_toggle(&mut self, _node_id: &str) {}

    fn on_link_click(&mut self, _source: &TreeNode, _target: &TreeNode, _evt: &Self::Event) {}
    fn on_link_mouse_over(&mut self, _source: &TreeNode, _target: &TreeNode, _evt: &Self::Event) {
    }
    fn on_link_mouse_out(&mut self, _source: &TreeNode, _target: &TreeNode, _evt: &Self::Event) {}

    /// Recenter the camera on `node`, currently drawn at `at`.
    fn center_node(&mut self, _node: &TreeNode, _at: Vec2) {}
}

/// Handler that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEvents;

impl TreeEvents for NoopEvents {
    type Event = ();
}
