use std::{fmt, sync::Arc};

use crate::{
    animation::ease::Ease,
    foundation::core::NodeSize,
    foundation::error::{TreeError, TreeResult},
    layout::position::{DepthHeights, DepthSpacing, Orientation},
    path::generator::{CustomPathFn, DEFAULT_STEP_MARGIN, PathGeometry, PathStyle, Topology},
    transition::controller::TransitionMode,
    tree::model::{LinkDatum, TreeNode},
};

/// Host configuration for one tree view.
///
/// Everything here is plain data and round-trips through JSON. Caller-supplied functions
/// live in [`RenderHooks`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Axis mapping.
    pub orientation: Orientation,
    /// Built-in connector style. Unknown names deserialize to `diagonal`.
    pub path_func: PathStyle,
    /// Baseline node size from the hierarchy layout.
    pub node_size: NodeSize,
    /// Extra shift per depth level.
    pub depth_factor: f64,
    /// Recorded rendered heights per depth.
    pub depth_heights: DepthHeights,
    /// Animate transitions instead of applying them immediately.
    pub enable_legacy_transitions: bool,
    /// Transition duration in milliseconds.
    pub transition_duration_ms: f64,
    /// Easing used for animated transitions.
    pub ease: Ease,
    /// Gap between a `step` connector and the target node.
    pub step_margin: f64,
    /// Extra class added to every node group.
    pub node_class_name: Option<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            path_func: PathStyle::Diagonal,
            node_size: NodeSize::default(),
            depth_factor: 1.0,
            depth_heights: DepthHeights::new(),
            enable_legacy_transitions: false,
            transition_duration_ms: 500.0,
            ease: Ease::default(),
            step_margin: DEFAULT_STEP_MARGIN,
            node_class_name: None,
        }
    }
}

impl TreeConfig {
    pub fn from_json_str(s: &str) -> TreeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TreeResult<()> {
        NodeSize::new(self.node_size.x, self.node_size.y)?;
        if !self.depth_factor.is_finite() {
            return Err(TreeError::validation("depth_factor must be finite"));
        }
        if !self.step_margin.is_finite() || self.step_margin < 0.0 {
            return Err(TreeError::validation("step_margin must be finite and >= 0"));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(TreeError::validation(
                "transition_duration_ms must be finite and >= 0",
            ));
        }
        for (depth, h) in self.depth_heights.iter() {
            if !(h.height.is_finite() && h.scroll_height.is_finite()) {
                return Err(TreeError::validation(format!(
                    "depth_heights[{depth}] must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Animated when transitions are enabled, instant otherwise.
    pub fn transition_mode(&self) -> TransitionMode {
        if self.enable_legacy_transitions {
            TransitionMode::Animated {
                duration_ms: self.transition_duration_ms,
                ease: self.ease,
            }
        } else {
            TransitionMode::Instant
        }
    }

    pub fn spacing(&self) -> DepthSpacing<'_> {
        DepthSpacing::new(&self.depth_heights, self.node_size.y, self.depth_factor)
    }

    pub fn geometry(&self) -> PathGeometry<'_> {
        PathGeometry::new(self.spacing()).with_step_margin(self.step_margin)
    }

    /// The topology in effect: a custom hook wins over `path_func`.
    pub fn topology(&self, hooks: &RenderHooks) -> Topology {
        match &hooks.path {
            Some(f) => Topology::Custom(Arc::clone(f)),
            None => Topology::Builtin(self.path_func),
        }
    }
}

/// Extra class for a link, derived from the link and orientation.
pub type PathClassFn = Arc<dyn Fn(&LinkDatum<'_>, Orientation) -> String>;

/// Markup for the inside of a node group.
pub type NodeRenderFn = Arc<dyn Fn(&TreeNode) -> String>;

/// Caller-supplied functions. Their panics propagate unchanged.
#[derive(Clone, Default)]
pub struct RenderHooks {
    pub path: Option<CustomPathFn>,
    pub path_class: Option<PathClassFn>,
    pub node: Option<NodeRenderFn>,
}

impl RenderHooks {
    pub fn with_path(mut self, f: impl Fn(&LinkDatum<'_>, Orientation) -> String + 'static) -> Self {
        self.path = Some(Arc::new(f));
        self
    }

    pub fn with_path_class(
        mut self,
        f: impl Fn(&LinkDatum<'_>, Orientation) -> String + 'static,
    ) -> Self {
        self.path_class = Some(Arc::new(f));
        self
    }

    pub fn with_node(mut self, f: impl Fn(&TreeNode) -> String + 'static) -> Self {
        self.node = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for RenderHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderHooks")
            .field("path", &self.path.is_some())
            .field("path_class", &self.path_class.is_some())
            .field("node", &self.node.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
