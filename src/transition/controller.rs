//! Per-element enter / update / exit lifecycle.
//!
//! A [`TransitionController`] owns the last committed visual value of one rendered element
//! (node or link) and at most one in-flight transition. The host drives time through
//! [`TransitionController::advance`]; nothing here blocks or schedules on its own.
//!
//! - Instant transitions commit the target and fire the completion callback before the
//!   request returns.
//! - Animated transitions interpolate from the last committed value and fire their
//!   callback exactly once, when progress reaches 1.
//! - A request that arrives while another is in flight supersedes it: the new transition
//!   starts from the last committed value and the earlier callback is dropped unfired.

use crate::animation::{ease::Ease, lerp::Lerp};

/// Completion callback, invoked with the committed final value.
pub type OnDone<V> = Box<dyn FnOnce(&V)>;

/// How a transition is applied.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TransitionMode {
    Instant,
    Animated { duration_ms: f64, ease: Ease },
}

impl TransitionMode {
    pub fn animated(duration_ms: f64) -> Self {
        Self::Animated {
            duration_ms,
            ease: Ease::default(),
        }
    }

    fn effective_duration(self) -> Option<(f64, Ease)> {
        match self {
            Self::Instant => None,
            Self::Animated { duration_ms, ease } if duration_ms > 0.0 => Some((duration_ms, ease)),
            Self::Animated { .. } => None,
        }
    }
}

/// Lifecycle phase of one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Entering,
    Settled,
    Leaving,
    Removed,
}

struct Active<V> {
    from: V,
    to: V,
    duration_ms: f64,
    elapsed_ms: f64,
    ease: Ease,
    then: Phase,
    on_done: Option<OnDone<V>>,
}

/// Three-phase state machine for one rendered element.
pub struct TransitionController<V> {
    phase: Phase,
    committed: V,
    active: Option<Active<V>>,
}

impl<V> TransitionController<V>
where
    V: Lerp + Clone,
{
    /// A freshly mounted element showing `initial` (typically transparent, at its anchor).
    pub fn new(initial: V) -> Self {
        Self {
            phase: Phase::Entering,
            committed: initial,
            active: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last committed value; what the surface currently shows.
    pub fn committed(&self) -> &V {
        &self.committed
    }

    /// Target of the in-flight transition, if any.
    pub fn target(&self) -> Option<&V> {
        self.active.as_ref().map(|a| &a.to)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// `Entering -> Settled`.
    pub fn enter(&mut self, target: V, mode: TransitionMode, on_done: Option<OnDone<V>>) {
        if matches!(self.phase, Phase::Leaving | Phase::Removed) {
            tracing::debug!(phase = ?self.phase, "enter ignored for a leaving element");
            return;
        }
        self.begin(target, mode, Phase::Settled, on_done);
    }

    /// `Settled -> Settled` with new geometry. Returns `false` when the element is already
    /// leaving, in which case nothing changes.
    pub fn on_geometry_changed(
        &mut self,
        target: V,
        mode: TransitionMode,
        on_done: Option<OnDone<V>>,
    ) -> bool {
        if matches!(self.phase, Phase::Leaving | Phase::Removed) {
            return false;
        }
        self.begin(target, mode, Phase::Settled, on_done);
        true
    }

    /// `Settled -> Leaving -> Removed`.
    pub fn on_remove(&mut self, target: V, mode: TransitionMode, on_done: Option<OnDone<V>>) {
        if self.phase == Phase::Removed {
            return;
        }
        self.phase = Phase::Leaving;
        self.begin(target, mode, Phase::Removed, on_done);
    }

    /// Drop any in-flight transition without firing its callback. The committed value stays.
    ///
    /// The phase still moves on as if the transition had finished, so a leaving element
    /// ends up `Removed` and an entering one `Settled`.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::trace!(then = ?active.then, "in-flight transition cancelled");
            self.phase = active.then;
        }
    }

    /// Advance the in-flight transition by `elapsed_ms`.
    ///
    /// Returns `true` if a transition completed during this step.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.elapsed_ms += elapsed_ms.max(0.0);
        let progress = (active.elapsed_ms / active.duration_ms).min(1.0);
        if progress < 1.0 {
            self.committed = V::lerp(&active.from, &active.to, active.ease.apply(progress));
            return false;
        }

        let Some(done) = self.active.take() else {
            return false;
        };
        self.finish(done.to, done.then, done.on_done);
        true
    }

    fn begin(&mut self, target: V, mode: TransitionMode, then: Phase, on_done: Option<OnDone<V>>) {
        if self.active.take().is_some() {
            tracing::debug!("superseding in-flight transition");
        }
        match mode.effective_duration() {
            None => self.finish(target, then, on_done),
            Some((duration_ms, ease)) => {
                self.active = Some(Active {
                    from: self.committed.clone(),
                    to: target,
                    duration_ms,
                    elapsed_ms: 0.0,
                    ease,
                    then,
                    on_done,
                });
            }
        }
    }

    fn finish(&mut self, value: V, then: Phase, on_done: Option<OnDone<V>>) {
        self.committed = value;
        self.phase = then;
        if let Some(cb) = on_done {
            cb(&self.committed);
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for TransitionController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("phase", &self.phase)
            .field("committed", &self.committed)
            .field("animating", &self.active.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/controller.rs"]
mod tests;
