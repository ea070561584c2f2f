//! Abstract layout coordinates to drawing-surface translations.

use std::collections::BTreeMap;

use crate::{
    foundation::core::{Vec2, push_pair},
    tree::model::TreeNode,
};

/// Axis mapping between tree depth/breadth and surface X/Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Depth grows along surface X (left to right), breadth along Y.
    #[default]
    Horizontal,
    /// Depth grows along surface Y (top down), breadth along X.
    Vertical,
}

impl Orientation {
    /// Map a `(breadth, depth)` pair to surface coordinates.
    #[inline]
    pub fn to_surface(self, breadth: f64, depth: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(depth, breadth),
            Self::Vertical => Vec2::new(breadth, depth),
        }
    }
}

/// Recorded rendered size of the nodes at one depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepthHeight {
    pub height: f64,
    #[serde(default, alias = "scrollHeight")]
    pub scroll_height: f64,
}

/// Per-depth rendered heights, keyed by depth.
///
/// A depth with no entry contributes nothing to the cumulative offset.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DepthHeights(BTreeMap<u32, DepthHeight>);

impl DepthHeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rendered height for `depth`, replacing any earlier value.
    pub fn record(&mut self, depth: u32, height: f64, scroll_height: f64) {
        self.0.insert(
            depth,
            DepthHeight {
                height,
                scroll_height,
            },
        );
    }

    pub fn get(&self, depth: u32) -> Option<&DepthHeight> {
        self.0.get(&depth)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &DepthHeight)> {
        self.0.iter().map(|(d, h)| (*d, h))
    }

    /// Sum of `baseline - height` over every recorded depth strictly shallower than `depth`.
    pub fn cumulative_offset(&self, depth: u32, baseline: f64) -> f64 {
        self.0
            .range(..depth)
            .map(|(_, h)| baseline - h.height)
            .sum()
    }
}

impl FromIterator<(u32, DepthHeight)> for DepthHeights {
    fn from_iter<I: IntoIterator<Item = (u32, DepthHeight)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything needed to correct a node's depth coordinate for variable-height rows.
#[derive(Clone, Copy, Debug)]
pub struct DepthSpacing<'a> {
    pub heights: &'a DepthHeights,
    /// Baseline node height (`node_size.y`).
    pub baseline: f64,
    /// Extra shift per depth level.
    pub depth_factor: f64,
}

impl<'a> DepthSpacing<'a> {
    pub fn new(heights: &'a DepthHeights, baseline: f64, depth_factor: f64) -> Self {
        Self {
            heights,
            baseline,
            depth_factor,
        }
    }

    /// Depth-axis coordinate after the per-level shift and the cumulative height correction.
    pub fn depth_coordinate(&self, node: &TreeNode) -> f64 {
        let shifted = node.y + self.depth_factor * f64::from(node.depth);
        shifted - self.heights.cumulative_offset(node.depth, self.baseline)
    }

    /// Surface point of `node` without any origin anchoring.
    pub fn surface_point(&self, node: &TreeNode, orientation: Orientation) -> Vec2 {
        orientation.to_surface(node.x, self.depth_coordinate(node))
    }
}

/// Resolve the translation of `node` on the drawing surface.
///
/// With `translate_to_origin` the node's own coordinates are ignored and the parent's
/// resolved position (or the origin for the root) is returned instead; this is the anchor
/// used for grow-from-parent and shrink-into-parent transitions.
pub fn resolve_position(
    node: &TreeNode,
    parent: Option<&TreeNode>,
    orientation: Orientation,
    spacing: DepthSpacing<'_>,
    translate_to_origin: bool,
) -> Vec2 {
    if translate_to_origin {
        return match parent {
            Some(parent) => spacing.surface_point(parent, orientation),
            None => Vec2::ZERO,
        };
    }
    spacing.surface_point(node, orientation)
}

/// Format a translation in the surface transform grammar: `translate(x,y)`.
pub fn translate_string(offset: Vec2) -> String {
    let mut s = String::from("translate(");
    push_pair(&mut s, offset.x, offset.y);
    s.push(')');
    s
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
