use std::collections::BTreeMap;

use crate::foundation::error::{TreeError, TreeResult};

/// One node of a laid-out hierarchy.
///
/// `x` (breadth) and `y` (depth progression) are abstract layout coordinates assigned by the
/// hierarchy layout, not surface pixels. `depth` is the distance from the root.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeNode {
    /// Stable identifier, unique within one tree.
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Root distance (root = 0).
    pub depth: u32,
    /// Breadth coordinate.
    pub x: f64,
    /// Depth-progression coordinate.
    pub y: f64,
    /// Free-form attributes shown by node renderers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Ordered children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build a childless node.
    pub fn leaf(id: impl Into<String>, depth: u32, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            depth,
            x,
            y,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Copy of this node without its subtree.
    pub fn detached(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            depth: self.depth,
            x: self.x,
            y: self.y,
            attributes: self.attributes.clone(),
            children: Vec::new(),
        }
    }

    /// Pre-order walk yielding every node together with its parent.
    pub fn walk(&self) -> Vec<(Option<&TreeNode>, &TreeNode)> {
        let mut out = Vec::new();
        let mut stack: Vec<(Option<&TreeNode>, &TreeNode)> = vec![(None, self)];
        while let Some((parent, node)) = stack.pop() {
            out.push((parent, node));
            for child in node.children.iter().rev() {
                stack.push((Some(node), child));
            }
        }
        out
    }

    /// Every parent/child edge in pre-order.
    pub fn links(&self) -> Vec<LinkDatum<'_>> {
        self.walk()
            .into_iter()
            .filter_map(|(parent, node)| parent.map(|source| LinkDatum::new(source, node)))
            .collect()
    }

    /// Check the structural invariants the geometry relies on.
    pub fn validate(&self) -> TreeResult<()> {
        let mut seen = std::collections::BTreeSet::new();
        for (parent, node) in self.walk() {
            if !(node.x.is_finite() && node.y.is_finite()) {
                return Err(TreeError::validation(format!(
                    "node '{}' has non-finite coordinates",
                    node.id
                )));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(TreeError::validation(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }
            if let Some(parent) = parent
                && parent.depth.checked_add(1) != Some(node.depth)
            {
                return Err(TreeError::validation(format!(
                    "node '{}' has depth {} but its parent '{}' has depth {}",
                    node.id, node.depth, parent.id, parent.depth
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a hierarchy from JSON.
    pub fn from_json_str(s: &str) -> TreeResult<Self> {
        let root: Self = serde_json::from_str(s)?;
        root.validate()?;
        Ok(root)
    }
}

/// Transient edge between a parent and one of its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkDatum<'a> {
    pub source: &'a TreeNode,
    pub target: &'a TreeNode,
}

impl<'a> LinkDatum<'a> {
    pub fn new(source: &'a TreeNode, target: &'a TreeNode) -> Self {
        Self { source, target }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/model.rs"]
mod tests;
