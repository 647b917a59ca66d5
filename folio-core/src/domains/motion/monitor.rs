//! Reads and follows `prefers-reduced-motion`

use crate::ports::MotionQueryPort;
use crate::types::ListenerId;
use serde::Serialize;

/// The user's reduced-motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MotionPreference {
    /// Whether the user asked for reduced motion
    pub reduced: bool,
}

/// Observes `prefers-reduced-motion` for the lifetime of the page.
///
/// A host without the capability leaves `reduced = false`: full animation
/// rather than an error.
#[derive(Debug, Default)]
pub struct MotionPreferenceMonitor {
    preference: MotionPreference,
    listener: Option<ListenerId>,
    supported: bool,
}

impl MotionPreferenceMonitor {
    /// Monitor that has not read the preference yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the preference once and subscribe to changes.
    pub fn init<M: MotionQueryPort + ?Sized>(
        &mut self,
        query: &mut M,
    ) -> MotionPreference {
        self.dispose(query);

        match query.prefers_reduced_motion() {
            Some(reduced) => {
                self.supported = true;
                self.preference = MotionPreference { reduced };
                self.listener = query.watch_reduced_motion();
            }
            None => {
                tracing::warn!(
                    "reduced-motion query unsupported; assuming full motion"
                );
                self.supported = false;
                self.preference = MotionPreference::default();
            }
        }
        self.preference
    }

    /// Apply a change notification. Returns whether the value changed.
    pub fn on_change(&mut self, reduced: bool) -> bool {
        if self.preference.reduced == reduced {
            return false;
        }
        tracing::debug!(reduced, "reduced-motion preference changed");
        self.preference.reduced = reduced;
        true
    }

    /// Drop the change subscription.
    pub fn dispose<M: MotionQueryPort + ?Sized>(&mut self, query: &mut M) {
        if let Some(id) = self.listener.take() {
            query.unwatch_reduced_motion(id);
        }
    }

    /// Current preference.
    pub fn preference(&self) -> MotionPreference {
        self.preference
    }

    /// Shorthand for `preference().reduced`.
    pub fn reduced(&self) -> bool {
        self.preference.reduced
    }

    /// Whether the host exposes the query.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Whether a change subscription is active.
    pub fn is_watching(&self) -> bool {
        self.listener.is_some()
    }
}
