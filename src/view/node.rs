use crate::{
    animation::lerp::Lerp,
    config::model::{RenderHooks, TreeConfig},
    foundation::core::{Vec2, escape_xml},
    layout::position::{Orientation, resolve_position, translate_string},
    transition::controller::{OnDone, Phase, TransitionController},
    tree::model::TreeNode,
    view::events::TreeEvents,
};

/// Radius of the default node circle.
pub const DEFAULT_NODE_RADIUS: f64 = 15.0;

/// What a node group shows: its translation and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeVisual {
    pub translate: Vec2,
    pub opacity: f64,
}

impl Lerp for NodeVisual {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// One rendered node.
///
/// Mounting grows the node out of its parent's position; leaving shrinks it back in.
/// Clicks and toggles leave a recenter request pending until the next
/// [`NodeView::after_render`].
#[derive(Debug)]
pub struct NodeView {
    node: TreeNode,
    parent: Option<TreeNode>,
    has_children: bool,
    orientation: Orientation,
    position: Vec2,
    subscriptions: u64,
    recenter_pending: bool,
    controller: TransitionController<NodeVisual>,
}

impl NodeView {
    pub fn mount(node: &TreeNode, parent: Option<&TreeNode>, config: &TreeConfig) -> Self {
        let spacing = config.spacing();
        let anchor = resolve_position(node, parent, config.orientation, spacing, true);
        let position = resolve_position(node, parent, config.orientation, spacing, false);

        let mut controller = TransitionController::new(NodeVisual {
            translate: anchor,
            opacity: 0.0,
        });
        controller.enter(
            NodeVisual {
                translate: position,
                opacity: 1.0,
            },
            config.transition_mode(),
            None,
        );

        Self {
            node: node.detached(),
            parent: parent.map(TreeNode::detached),
            has_children: node.has_children(),
            orientation: config.orientation,
            position,
            subscriptions: 0,
            recenter_pending: false,
            controller,
        }
    }

    /// Apply new props. Geometry is only re-committed when the resolved position, the
    /// orientation or the subscription token changed; returns whether it was.
    pub fn set_props(
        &mut self,
        node: &TreeNode,
        parent: Option<&TreeNode>,
        config: &TreeConfig,
        subscriptions: u64,
    ) -> bool {
        let position = resolve_position(node, parent, config.orientation, config.spacing(), false);
        let changed = position != self.position
            || config.orientation != self.orientation
            || subscriptions != self.subscriptions;

        self.node = node.detached();
        self.parent = parent.map(TreeNode::detached);
        self.has_children = node.has_children();
        if !changed {
            return false;
        }

        self.position = position;
        self.orientation = config.orientation;
        self.subscriptions = subscriptions;
        self.controller.on_geometry_changed(
            NodeVisual {
                translate: position,
                opacity: 1.0,
            },
            config.transition_mode(),
            None,
        )
    }

    pub fn click<H>(&mut self, evt: &H::Event, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        self.recenter_pending = true;
        handlers.on_node_click(&self.node, evt);
    }

    pub fn toggle<H>(&mut self, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        self.recenter_pending = true;
        handlers.on_node_toggle(&self.node.id);
    }

    pub fn mouse_over<H>(&self, evt: &H::Event, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        handlers.on_node_mouse_over(&self.node, evt);
    }

    pub fn mouse_out<H>(&self, evt: &H::Event, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        handlers.on_node_mouse_out(&self.node, evt);
    }

    /// Consume a pending recenter request. Returns whether `center_node` was called.
    pub fn after_render<H>(&mut self, handlers: &mut H) -> bool
    where
        H: TreeEvents + ?Sized,
    {
        if !std::mem::take(&mut self.recenter_pending) {
            return false;
        }
        handlers.center_node(&self.node, self.position);
        true
    }

    pub fn recenter_pending(&self) -> bool {
        self.recenter_pending
    }

    /// Fade out while moving back into the parent.
    pub fn leave(&mut self, config: &TreeConfig, on_done: Option<OnDone<NodeVisual>>) {
        let anchor = resolve_position(
            &self.node,
            self.parent.as_ref(),
            config.orientation,
            config.spacing(),
            true,
        );
        self.controller.on_remove(
            NodeVisual {
                translate: anchor,
                opacity: 0.0,
            },
            config.transition_mode(),
            on_done,
        );
    }

    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        self.controller.advance(elapsed_ms)
    }

    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn node(&self) -> &TreeNode {
        &self.node
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Resolved resting position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn visual(&self) -> NodeVisual {
        *self.controller.committed()
    }

    pub fn transform(&self) -> String {
        translate_string(self.controller.committed().translate)
    }

    pub fn opacity(&self) -> f64 {
        self.controller.committed().opacity
    }

    pub fn class_name(&self, config: &TreeConfig) -> String {
        let base = if self.has_children {
            "rd3t-node"
        } else {
            "rd3t-leaf-node"
        };
        match config.node_class_name.as_deref() {
            Some(extra) if !extra.trim().is_empty() => format!("{base} {}", extra.trim()),
            _ => base.to_string(),
        }
    }

    /// Inner markup of the node group, from the node hook or the default circle and label.
    pub fn render_element(&self, hooks: &RenderHooks) -> String {
        match &hooks.node {
            Some(render) => render(&self.node),
            None => default_node_element(&self.node),
        }
    }
}

fn default_node_element(node: &TreeNode) -> String {
    let label_x = DEFAULT_NODE_RADIUS + 5.0;
    let mut out = format!(r#"<circle r="{DEFAULT_NODE_RADIUS}"/>"#);
    out.push_str(r#"<g class="rd3t-label">"#);
    out.push_str(&format!(
        r#"<text class="rd3t-label__title" text-anchor="start" x="{label_x}">{}</text>"#,
        escape_xml(&node.name)
    ));
    for (key, value) in &node.attributes {
        out.push_str(&format!(
            r#"<text class="rd3t-label__attributes" x="{label_x}" dy="1.2em">{}: {}</text>"#,
            escape_xml(key),
            escape_xml(value)
        ));
    }
    out.push_str("</g>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/view/node.rs"]
mod tests;
