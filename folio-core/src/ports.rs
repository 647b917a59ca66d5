//! Environment ports
//!
//! Each trait covers one capability the host (browser bridge, native shell,
//! [`HeadlessPage`](crate::headless::HeadlessPage)) must provide. The state
//! machines only ever talk to the environment through these seams, which
//! keeps them deterministic and testable without a DOM.

use crate::types::{
    ListenerId, ListenerKind, NavigationState, Rect, ScrollIntoViewOptions,
    ScrollMetrics,
};

/// Window geometry and listener registration.
pub trait WindowPort {
    /// Current viewport width in CSS pixels.
    fn inner_width(&self) -> u32;

    /// Current document scroll geometry.
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Bind a listener; the host starts delivering the matching events.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Unbind a listener. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);
}

/// Element queries and scrolling.
pub trait DocumentPort {
    /// Bounding rect of the element with the given id, in viewport
    /// coordinates. `None` when the element is not in the document.
    fn bounding_rect(&self, anchor: &str) -> Option<Rect>;

    /// Scroll the element with the given id into view. Returns `false`
    /// when the element is not in the document.
    fn scroll_into_view(
        &mut self,
        anchor: &str,
        options: ScrollIntoViewOptions,
    ) -> bool;
}

/// The `prefers-reduced-motion` media query.
///
/// Hosts without media query support return `None` from both queries.
#[cfg_attr(test, mockall::automock)]
pub trait MotionQueryPort {
    /// Current value of the preference, if the capability exists.
    fn prefers_reduced_motion(&self) -> Option<bool>;

    /// Subscribe to change notifications.
    fn watch_reduced_motion(&mut self) -> Option<ListenerId>;

    /// Drop a subscription made by `watch_reduced_motion`.
    fn unwatch_reduced_motion(&mut self, id: ListenerId);
}

/// Session history with an application payload per entry.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryPort {
    /// Path of the current entry.
    fn current_path(&self) -> String;

    /// Payload of the current entry.
    fn current_state(&self) -> NavigationState;

    /// Push a new entry.
    fn push(&mut self, path: &str, state: NavigationState);

    /// Replace the current entry's path and payload without adding an
    /// entry.
    fn replace(&mut self, path: &str, state: NavigationState);

    /// Replace the current entry's payload, keeping its path.
    fn replace_state(&mut self, state: NavigationState);
}

/// Everything the navigation runtime consumes.
pub trait Environment:
    WindowPort + DocumentPort + MotionQueryPort + HistoryPort
{
}

impl<T> Environment for T where
    T: WindowPort + DocumentPort + MotionQueryPort + HistoryPort
{
}
