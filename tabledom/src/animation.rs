use std::collections::HashMap;
use std::time::Instant;

use crate::transitions::TransitionConfig;

/// A single reveal in flight.
#[derive(Debug, Clone, Copy)]
struct ActiveReveal {
    start: Instant,
    config: TransitionConfig,
}

/// Tracks show animations for elements that were just inserted.
///
/// Reveals are cosmetic: nothing waits on them, and an element that is not
/// tracked is considered fully shown.
#[derive(Debug, Default)]
pub struct RevealState {
    active: HashMap<String, ActiveReveal>,
    /// Reduced motion flag - when true, reveals complete instantly.
    reduced_motion: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Start revealing the element with the given ID.
    pub fn start(&mut self, id: impl Into<String>, config: TransitionConfig, now: Instant) {
        let id = id.into();
        if self.reduced_motion {
            log::trace!("[reveal] {id} shown instantly (reduced motion)");
            return;
        }
        log::trace!("[reveal] start {id} over {:?}", config.duration);
        self.active.insert(id, ActiveReveal { start: now, config });
    }

    /// Stop tracking an element (e.g. because it was removed).
    pub fn forget(&mut self, id: &str) {
        if self.active.remove(id).is_some() {
            log::trace!("[reveal] forget {id}");
        }
    }

    /// Check whether a reveal is still tracked for the element.
    pub fn is_tracking(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Eased reveal progress in 0.0..=1.0.
    pub fn progress(&self, id: &str, now: Instant) -> f32 {
        let Some(reveal) = self.active.get(id) else {
            return 1.0;
        };

        let duration = reveal.config.duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(reveal.start).as_secs_f32();
        let t = (elapsed / duration).clamp(0.0, 1.0);
        reveal.config.easing.apply(t)
    }

    /// Drop reveals that have completed.
    pub fn prune(&mut self, now: Instant) {
        let before = self.active.len();
        self.active
            .retain(|_, r| now.saturating_duration_since(r.start) < r.config.duration);
        let pruned = before - self.active.len();
        if pruned > 0 {
            log::trace!("[reveal] pruned {pruned} finished reveals");
        }
    }
}
