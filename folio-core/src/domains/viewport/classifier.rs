//! Breakpoint classification and the debounced classifier

use crate::ports::WindowPort;
use crate::types::{DeviceClass, ListenerId, ListenerKind};
use serde::Serialize;

/// Classify a viewport width. Widths up to and including
/// `compact_max_width_px` are compact.
pub fn classify(width_px: u32, compact_max_width_px: u32) -> DeviceClass {
    DeviceClass::from_compact(width_px <= compact_max_width_px)
}

/// Latest classification of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    /// Width at or below the breakpoint
    pub is_compact: bool,
    /// Width the classification was computed from
    pub width_px: u32,
}

impl ViewportState {
    /// Classification as a [`DeviceClass`].
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_compact(self.is_compact)
    }
}

/// Result of applying a debounced resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reclassified {
    /// Classification before the resize
    pub previous: ViewportState,
    /// Classification after the resize
    pub current: ViewportState,
}

impl Reclassified {
    /// Whether downstream consumers need to react.
    pub fn class_changed(&self) -> bool {
        self.previous.is_compact != self.current.is_compact
    }
}

/// Owns [`ViewportState`] and the resize listener.
///
/// Debounce timing lives in the runtime's timer table; the classifier only
/// remembers the last width seen since the previous reclassification.
#[derive(Debug)]
pub struct ViewportClassifier {
    compact_max_width_px: u32,
    state: ViewportState,
    pending_width: Option<u32>,
    resize_listener: Option<ListenerId>,
    reclassifications: u64,
}

impl ViewportClassifier {
    /// Unbound classifier using the given breakpoint.
    pub fn new(compact_max_width_px: u32) -> Self {
        Self {
            compact_max_width_px,
            state: ViewportState::default(),
            pending_width: None,
            resize_listener: None,
            reclassifications: 0,
        }
    }

    /// Classify the current width synchronously and bind the resize
    /// listener. Calling it again rebinds rather than stacking listeners.
    pub fn init<W: WindowPort + ?Sized>(
        &mut self,
        window: &mut W,
    ) -> ViewportState {
        self.dispose(window);

        let width_px = window.inner_width();
        self.state = ViewportState {
            is_compact: classify(width_px, self.compact_max_width_px)
                .is_compact(),
            width_px,
        };
        self.resize_listener = Some(window.add_listener(ListenerKind::Resize));

        tracing::debug!(
            width_px,
            is_compact = self.state.is_compact,
            "initial viewport classification"
        );
        self.state
    }

    /// Record a resize notification. The caller (re)arms the debounce
    /// timer; only the last width before it fires is used.
    pub fn on_resize(&mut self, width_px: u32) {
        if self.resize_listener.is_none() {
            tracing::trace!(width_px, "resize ignored: classifier not bound");
            return;
        }
        self.pending_width = Some(width_px);
    }

    /// Apply the pending width, if any. Called when the debounce fires.
    pub fn settle(&mut self) -> Option<Reclassified> {
        let width_px = self.pending_width.take()?;
        let previous = self.state;
        self.state = ViewportState {
            is_compact: classify(width_px, self.compact_max_width_px)
                .is_compact(),
            width_px,
        };
        self.reclassifications += 1;

        let change = Reclassified {
            previous,
            current: self.state,
        };
        if change.class_changed() {
            tracing::debug!(
                width_px,
                is_compact = self.state.is_compact,
                "viewport device class changed"
            );
        }
        Some(change)
    }

    /// Unbind the resize listener and drop any pending width.
    pub fn dispose<W: WindowPort + ?Sized>(&mut self, window: &mut W) {
        self.pending_width = None;
        if let Some(id) = self.resize_listener.take() {
            window.remove_listener(id);
        }
    }

    /// Latest classification.
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Whether the latest classification is compact.
    pub fn is_compact(&self) -> bool {
        self.state.is_compact
    }

    /// Whether a resize awaits its debounce.
    pub fn has_pending_resize(&self) -> bool {
        self.pending_width.is_some()
    }

    /// Whether the resize listener is bound.
    pub fn is_bound(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// Number of debounced reclassifications applied so far.
    pub fn reclassifications(&self) -> u64 {
        self.reclassifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessPage;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(classify(768, 768), DeviceClass::Compact);
        assert_eq!(classify(769, 768), DeviceClass::Wide);
        assert_eq!(classify(0, 768), DeviceClass::Compact);
        assert_eq!(classify(u32::MAX, 768), DeviceClass::Wide);
    }

    #[test]
    fn classify_agrees_with_threshold_for_all_widths() {
        for width in (0..2000).step_by(7).chain([767, 768, 769]) {
            assert_eq!(classify(width, 768).is_compact(), width <= 768);
        }
    }

    #[test]
    fn init_classifies_synchronously_and_binds_once() {
        let mut page = HeadlessPage::new(700, 800.0);
        let mut classifier = ViewportClassifier::new(768);

        let state = classifier.init(&mut page);
        assert!(state.is_compact);
        assert_eq!(state.width_px, 700);

        classifier.init(&mut page);
        assert_eq!(page.listener_count(ListenerKind::Resize), 1);
    }

    #[test]
    fn settle_uses_last_width_and_reports_class_change() {
        let mut page = HeadlessPage::new(1280, 800.0);
        let mut classifier = ViewportClassifier::new(768);
        classifier.init(&mut page);

        classifier.on_resize(600);
        classifier.on_resize(1000);
        classifier.on_resize(500);

        let change = classifier.settle().expect("pending width");
        assert!(change.class_changed());
        assert_eq!(change.current.width_px, 500);
        assert_eq!(classifier.reclassifications(), 1);
        assert!(classifier.settle().is_none());
    }

    #[test]
    fn dispose_unbinds_and_drops_pending() {
        let mut page = HeadlessPage::new(1280, 800.0);
        let mut classifier = ViewportClassifier::new(768);
        classifier.init(&mut page);
        classifier.on_resize(500);

        classifier.dispose(&mut page);
        assert_eq!(page.listener_count(ListenerKind::Resize), 0);
        assert!(classifier.settle().is_none());

        classifier.on_resize(400);
        assert!(!classifier.has_pending_resize());
    }
}
