//! treeviz turns a laid-out hierarchy into drawable tree diagrams.
//!
//! The hierarchy layout itself (breadth/depth assignment) happens elsewhere; nodes arrive with
//! abstract `x` (breadth), `y` (depth progression) and `depth`. This crate provides:
//!
//! 1. **Position resolution**: abstract coordinates to surface translations, with
//!    orientation swap and per-depth height correction ([`resolve_position`]).
//! 2. **Connector paths**: diagonal, straight, elbow and step connectors or a custom
//!    function ([`generate_path`]).
//! 3. **Transitions**: a per-element enter / update / exit state machine that applies
//!    changes instantly or animates them over a duration ([`TransitionController`]).
//!
//! [`NodeView`] and [`LinkView`] wire the three together for one element, [`Scene`] keeps a
//! keyed set of them in step with a changing tree, and [`render_svg`] writes a standalone
//! SVG document.
//!
//! Geometry is pure and deterministic: identical inputs give bit-identical output.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod layout;
mod path;
mod render;
mod transition;
mod tree;
mod view;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use config::model::{NodeRenderFn, PathClassFn, RenderHooks, TreeConfig};
pub use foundation::core::{BezPath, NodeSize, Point, Rect, Vec2};
pub use foundation::error::{TreeError, TreeResult};
pub use layout::position::{
    DepthHeight, DepthHeights, DepthSpacing, Orientation, resolve_position, translate_string,
};
pub use path::command::{PathCommand, PathData};
pub use path::generator::{
    CustomPathFn, DEFAULT_STEP_MARGIN, PathGeometry, PathStyle, Topology, build_path,
    generate_path,
};
pub use render::scene::Scene;
pub use render::svg::{render_svg, scene_to_svg};
pub use transition::controller::{OnDone, Phase, TransitionController, TransitionMode};
pub use tree::model::{LinkDatum, TreeNode};
pub use view::events::{NoopEvents, TreeEvents};
pub use view::link::LinkView;
pub use view::node::{DEFAULT_NODE_RADIUS, NodeView, NodeVisual};
