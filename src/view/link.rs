use crate::{
    config::model::{RenderHooks, TreeConfig},
    path::generator::generate_path,
    transition::controller::{OnDone, Phase, TransitionController},
    tree::model::{LinkDatum, TreeNode},
    view::events::TreeEvents,
};

/// One rendered connector between a parent and a child.
///
/// The path is not cached: it is derived on every render from the stored endpoints and the
/// current config, so a changed depth table shows up without re-mounting.
#[derive(Debug)]
pub struct LinkView {
    source: TreeNode,
    target: TreeNode,
    controller: TransitionController<f64>,
}

impl LinkView {
    /// Mount with opacity 0 and fade in.
    pub fn mount(link: &LinkDatum<'_>, config: &TreeConfig) -> Self {
        let mut controller = TransitionController::new(0.0);
        controller.enter(1.0, config.transition_mode(), None);
        Self {
            source: link.source.detached(),
            target: link.target.detached(),
            controller,
        }
    }

    /// Refresh the stored endpoints. Opacity is untouched.
    pub fn set_props(&mut self, link: &LinkDatum<'_>) {
        self.source = link.source.detached();
        self.target = link.target.detached();
    }

    pub fn datum(&self) -> LinkDatum<'_> {
        LinkDatum::new(&self.source, &self.target)
    }

    /// Stable key: `source->target`.
    pub fn key(&self) -> String {
        format!("{}->{}", self.source.id, self.target.id)
    }

    pub fn source_id(&self) -> &str {
        &self.source.id
    }

    pub fn target_id(&self) -> &str {
        &self.target.id
    }

    pub fn path(&self, config: &TreeConfig, hooks: &RenderHooks) -> String {
        generate_path(
            &self.datum(),
            config.orientation,
            &config.topology(hooks),
            config.geometry(),
        )
    }

    pub fn class_name(&self, config: &TreeConfig, hooks: &RenderHooks) -> String {
        let mut classes = vec!["rd3t-link".to_string()];
        if let Some(f) = &hooks.path_class {
            classes.push(f(&self.datum(), config.orientation));
        }
        classes.join(" ").trim().to_string()
    }

    pub fn click<H>(&self, evt: &H::Event, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        handlers.on_link_click(&self.source, &self.target, evt);
    }

    pub fn mouse_over<H>(&self, evt: &H::Event, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        handlers.on_link_mouse_over(&self.source, &self.target, evt);
    }

    pub fn mouse_out<H>(&self, evt: &H::Event, handlers: &mut H)
    where
        H: TreeEvents + ?Sized,
    {
        handlers.on_link_mouse_out(&self.source, &self.target, evt);
    }

    /// Fade out; `on_done` fires once the link may be removed.
    pub fn leave(&mut self, config: &TreeConfig, on_done: Option<OnDone<f64>>) {
        self.controller
            .on_remove(0.0, config.transition_mode(), on_done);
    }

    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        self.controller.advance(elapsed_ms)
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn opacity(&self) -> f64 {
        *self.controller.committed()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/link.rs"]
mod tests;
