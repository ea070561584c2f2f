use std::{fmt, sync::Arc};

use crate::{
    foundation::core::Point,
    layout::position::{DepthSpacing, Orientation},
    path::command::PathData,
    tree::model::{LinkDatum, TreeNode},
};

/// Default distance the vertical `step` bend is pulled back from the depth midpoint.
pub const DEFAULT_STEP_MARGIN: f64 = 20.0;

/// Built-in connector styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PathStyle {
    /// Smooth cubic through the mid depth.
    #[default]
    Diagonal,
    Straight,
    /// One right-angle bend: depth axis first, then breadth.
    Elbow,
    /// Bend near the midpoint of the corrected depth coordinates.
    Step,
}

impl PathStyle {
    /// Parse a style name. Unknown names fall back to [`PathStyle::Diagonal`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "diagonal" => Self::Diagonal,
            "straight" => Self::Straight,
            "elbow" => Self::Elbow,
            "step" => Self::Step,
            other => {
                tracing::debug!(style = other, "unknown path style, using diagonal");
                Self::Diagonal
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Diagonal => "diagonal",
            Self::Straight => "straight",
            Self::Elbow => "elbow",
            Self::Step => "step",
        }
    }
}

impl From<String> for PathStyle {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<PathStyle> for String {
    fn from(value: PathStyle) -> Self {
        value.name().to_string()
    }
}

/// Caller-supplied path function. Its output is used verbatim.
pub type CustomPathFn = Arc<dyn Fn(&LinkDatum<'_>, Orientation) -> String>;

/// Connector topology: a built-in style or a custom function.
#[derive(Clone)]
pub enum Topology {
    Builtin(PathStyle),
    Custom(CustomPathFn),
}

impl Topology {
    pub fn custom(f: impl Fn(&LinkDatum<'_>, Orientation) -> String + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::Builtin(PathStyle::Diagonal)
    }
}

impl From<PathStyle> for Topology {
    fn from(value: PathStyle) -> Self {
        Self::Builtin(value)
    }
}

impl fmt::Debug for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(style) => f.debug_tuple("Builtin").field(style).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Depth correction inputs plus the `step` margin.
#[derive(Clone, Copy, Debug)]
pub struct PathGeometry<'a> {
    pub spacing: DepthSpacing<'a>,
    pub step_margin: f64,
}

impl<'a> PathGeometry<'a> {
    pub fn new(spacing: DepthSpacing<'a>) -> Self {
        Self {
            spacing,
            step_margin: DEFAULT_STEP_MARGIN,
        }
    }

    pub fn with_step_margin(mut self, margin: f64) -> Self {
        self.step_margin = margin;
        self
    }
}

/// Endpoint in abstract axes after depth correction.
#[derive(Clone, Copy, Debug)]
struct Endpoint {
    breadth: f64,
    depth: f64,
}

impl Endpoint {
    fn of(node: &TreeNode, spacing: &DepthSpacing<'_>) -> Self {
        Self {
            breadth: node.x,
            depth: spacing.depth_coordinate(node),
        }
    }
}

/// Produce the path description for one link.
pub fn generate_path(
    link: &LinkDatum<'_>,
    orientation: Orientation,
    topology: &Topology,
    geometry: PathGeometry<'_>,
) -> String {
    match topology {
        Topology::Custom(f) => f(link, orientation),
        Topology::Builtin(style) => build_path(link, orientation, *style, geometry).to_svg(),
    }
}

/// Build the command list for a built-in style.
///
/// Both endpoints are re-derived from the current depth table, so a link reflects the
/// latest recorded heights even when its nodes have not been re-resolved.
pub fn build_path(
    link: &LinkDatum<'_>,
    orientation: Orientation,
    style: PathStyle,
    geometry: PathGeometry<'_>,
) -> PathData {
    let s = Endpoint::of(link.source, &geometry.spacing);
    let t = Endpoint::of(link.target, &geometry.spacing);
    match style {
        PathStyle::Diagonal => diagonal(s, t, orientation),
        PathStyle::Straight => straight(s, t, orientation),
        PathStyle::Elbow => elbow(s, t, orientation),
        PathStyle::Step => step(s, t, orientation, geometry.step_margin),
    }
}

fn surface(orientation: Orientation, breadth: f64, depth: f64) -> Point {
    orientation.to_surface(breadth, depth).to_point()
}

fn diagonal(s: Endpoint, t: Endpoint, orientation: Orientation) -> PathData {
    let mid = (s.depth + t.depth) / 2.0;
    let start = surface(orientation, s.breadth, s.depth);
    PathData::new().move_to(start.x, start.y).curve_to(
        surface(orientation, s.breadth, mid),
        surface(orientation, t.breadth, mid),
        surface(orientation, t.breadth, t.depth),
    )
}

fn straight(s: Endpoint, t: Endpoint, orientation: Orientation) -> PathData {
    let start = surface(orientation, s.breadth, s.depth);
    let end = surface(orientation, t.breadth, t.depth);
    PathData::new().move_to(start.x, start.y).line_to(end.x, end.y)
}

fn elbow(s: Endpoint, t: Endpoint, orientation: Orientation) -> PathData {
    match orientation {
        Orientation::Vertical => PathData::new()
            .move_to(s.breadth, s.depth)
            .vertical_to(t.depth)
            .horizontal_to(t.breadth),
        Orientation::Horizontal => PathData::new()
            .move_to(s.depth, s.breadth)
            .horizontal_to(t.depth)
            .vertical_to(t.breadth),
    }
}

fn step(s: Endpoint, t: Endpoint, orientation: Orientation, margin: f64) -> PathData {
    let mid = s.depth + (t.depth - s.depth) / 2.0;
    match orientation {
        Orientation::Vertical => PathData::new()
            .move_to(s.breadth, s.depth)
            .vertical_to(mid - margin)
            .horizontal_to(t.breadth)
            .vertical_to(t.depth),
        Orientation::Horizontal => PathData::new()
            .move_to(s.depth, s.breadth)
            .horizontal_to(mid)
            .vertical_to(t.breadth)
            .horizontal_to(t.depth),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/generator.rs"]
mod tests;
