use crate::{
    config::model::{RenderHooks, TreeConfig},
    foundation::core::{Point, Rect, escape_xml, fmt_num},
    foundation::error::TreeResult,
    path::generator::{Topology, build_path},
    render::scene::Scene,
    tree::model::TreeNode,
};

const STYLESHEET: &str = ".rd3t-link{fill:none;stroke:#000}\
.rd3t-node circle{fill:#777;stroke:#000}\
.rd3t-leaf-node circle{fill:#fff;stroke:#000}";

/// Lay out, settle and serialize a whole tree as a standalone SVG document.
#[tracing::instrument(skip_all, fields(root = %root.id))]
pub fn render_svg(root: &TreeNode, config: &TreeConfig, hooks: &RenderHooks) -> TreeResult<String> {
    let mut scene = Scene::new(config.clone(), hooks.clone())?;
    scene.sync(root)?;
    scene.settle();
    Ok(scene_to_svg(&scene))
}

/// Serialize the scene as it currently looks, mid-transition values included.
///
/// Links are written first so nodes paint on top.
pub fn scene_to_svg(scene: &Scene) -> String {
    let config = scene.config();
    let hooks = scene.hooks();
    let bounds = scene_bounds(scene);

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" class="rd3t-svg" viewBox=""#);
    out.push_str(&format!(
        "{} {} {} {}",
        fmt_num(bounds.x0),
        fmt_num(bounds.y0),
        fmt_num(bounds.width()),
        fmt_num(bounds.height())
    ));
    out.push_str("\">");
    out.push_str("<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>");
    out.push_str(r#"<g class="rd3t-g">"#);

    for link in scene.links() {
        out.push_str(&format!(
            r#"<path class="{}" d="{}" style="opacity: {}" data-source-id="{}" data-target-id="{}"/>"#,
            escape_xml(&link.class_name(config, hooks)),
            escape_xml(&link.path(config, hooks)),
            fmt_num(link.opacity()),
            escape_xml(link.source_id()),
            escape_xml(link.target_id()),
        ));
    }

    for node in scene.nodes() {
        out.push_str(&format!(
            r#"<g id="{}" class="{}" transform="{}" style="opacity: {}">"#,
            escape_xml(node.id()),
            escape_xml(&node.class_name(config)),
            node.transform(),
            fmt_num(node.opacity()),
        ));
        out.push_str(&node.render_element(hooks));
        out.push_str("</g>");
    }

    out.push_str("</g></svg>");
    out
}

/// Union of node boxes (baseline size around each resting position) and built-in
/// connector bounds.
fn scene_bounds(scene: &Scene) -> Rect {
    let config = scene.config();
    let size = (config.node_size.x, config.node_size.y);

    let mut bounds: Option<Rect> = None;
    let mut grow = |r: Rect| {
        bounds = Some(match bounds {
            Some(b) => b.union(r),
            None => r,
        });
    };

    for node in scene.nodes() {
        grow(Rect::from_center_size(node.position().to_point(), size));
    }
    if let Topology::Builtin(style) = config.topology(scene.hooks()) {
        for link in scene.links() {
            grow(build_path(&link.datum(), config.orientation, style, config.geometry()).bounding_box());
        }
    }

    bounds.unwrap_or_else(|| Rect::from_origin_size(Point::ZERO, (0.0, 0.0)))
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
