use std::collections::BTreeMap;

use crate::{
    config::model::{RenderHooks, TreeConfig},
    foundation::error::TreeResult,
    transition::controller::Phase,
    tree::model::{LinkDatum, TreeNode},
    view::{events::TreeEvents, link::LinkView, node::NodeView},
};

/// Keyed set of node and link views for one tree.
///
/// [`Scene::sync`] reconciles the views against a new hierarchy: new ids mount, known ids
/// receive new props, vanished ids leave and stay drawn until their exit finishes.
#[derive(Debug)]
pub struct Scene {
    config: TreeConfig,
    hooks: RenderHooks,
    nodes: Vec<NodeView>,
    links: Vec<LinkView>,
    subscriptions: u64,
}

impl Scene {
    pub fn new(config: TreeConfig, hooks: RenderHooks) -> TreeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            hooks,
            nodes: Vec::new(),
            links: Vec::new(),
            subscriptions: 0,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn hooks(&self) -> &RenderHooks {
        &self.hooks
    }

    /// Replace the config. Views pick it up on the next [`Scene::sync`].
    pub fn set_config(&mut self, config: TreeConfig) -> TreeResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Force every node to re-commit its geometry on the next sync.
    pub fn bump_subscriptions(&mut self) {
        self.subscriptions = self.subscriptions.wrapping_add(1);
    }

    #[tracing::instrument(skip_all, fields(root = %root.id))]
    pub fn sync(&mut self, root: &TreeNode) -> TreeResult<()> {
        root.validate()?;

        let mut old_nodes: BTreeMap<String, NodeView> = self
            .nodes
            .drain(..)
            .map(|v| (v.id().to_string(), v))
            .collect();
        let mut old_links: BTreeMap<String, LinkView> =
            self.links.drain(..).map(|v| (v.key(), v)).collect();

        let mut mounted = 0usize;
        for (parent, node) in root.walk() {
            let view = match old_nodes.remove(&node.id) {
                Some(mut view) if view.phase() != Phase::Leaving => {
                    view.set_props(node, parent, &self.config, self.subscriptions);
                    view
                }
                _ => {
                    mounted += 1;
                    NodeView::mount(node, parent, &self.config)
                }
            };
            self.nodes.push(view);
        }

        for link in root.links() {
            let key = link_key(&link);
            let view = match old_links.remove(&key) {
                Some(mut view) if view.phase() != Phase::Leaving => {
                    view.set_props(&link);
                    view
                }
                _ => LinkView::mount(&link, &self.config),
            };
            self.links.push(view);
        }

        let mut leaving = 0usize;
        for (_, mut view) in old_nodes {
            if view.phase() != Phase::Leaving {
                view.leave(&self.config, None);
                leaving += 1;
            }
            self.nodes.push(view);
        }
        for (_, mut view) in old_links {
            if view.phase() != Phase::Leaving {
                view.leave(&self.config, None);
            }
            self.links.push(view);
        }

        self.prune();
        tracing::debug!(
            nodes = self.nodes.len(),
            links = self.links.len(),
            mounted,
            leaving,
            "scene synced"
        );
        Ok(())
    }

    /// Advance every in-flight transition and drop elements whose exit finished.
    pub fn advance(&mut self, elapsed_ms: f64) {
        tracing::trace!(elapsed_ms, "advance scene");
        for view in &mut self.nodes {
            view.advance(elapsed_ms);
        }
        for view in &mut self.links {
            view.advance(elapsed_ms);
        }
        self.prune();
    }

    /// Run every in-flight transition to completion.
    pub fn settle(&mut self) {
        self.advance(f64::INFINITY);
    }

    pub fn is_settled(&self) -> bool {
        self.nodes.iter().all(|v| v.phase() == Phase::Settled)
            && self.links.iter().all(|v| v.phase() == Phase::Settled)
    }

    /// Deliver pending recenter requests. Returns how many fired.
    pub fn after_render<H>(&mut self, handlers: &mut H) -> usize
    where
        H: TreeEvents + ?Sized,
    {
        let mut fired = 0;
        for view in &mut self.nodes {
            if view.after_render(&mut *handlers) {
                fired += 1;
            }
        }
        fired
    }

    pub fn nodes(&self) -> &[NodeView] {
        &self.nodes
    }

    pub fn links(&self) -> &[LinkView] {
        &self.links
    }

    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|v| v.id() == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeView> {
        self.nodes.iter_mut().find(|v| v.id() == id)
    }

    pub fn link(&self, source_id: &str, target_id: &str) -> Option<&LinkView> {
        self.links
            .iter()
            .find(|v| v.source_id() == source_id && v.target_id() == target_id)
    }

    fn prune(&mut self) {
        self.nodes.retain(|v| v.phase() != Phase::Removed);
        self.links.retain(|v| v.phase() != Phase::Removed);
    }
}

fn link_key(link: &LinkDatum<'_>) -> String {
    format!("{}->{}", link.source.id, link.target.id)
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
