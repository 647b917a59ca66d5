//! In-memory page implementing every environment port
//!
//! Sections are laid out as vertical boxes in document coordinates; bounding
//! rects are derived from the current scroll offset the same way a browser
//! reports them. Scrolling is instantaneous regardless of the requested
//! behavior. History is a simple entry stack with a cursor.

use crate::constants::restoration::ROOT_PATH;
use crate::ports::{DocumentPort, HistoryPort, MotionQueryPort, WindowPort};
use crate::types::{
    ListenerId, ListenerKind, NavigationState, Rect, ScrollIntoViewOptions,
    ScrollMetrics,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Serializable description of a page, used by scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Viewport width
    pub width: u32,
    /// Visible viewport height
    pub height: f32,
    /// `null` models a host without the reduced-motion query
    pub reduced_motion: Option<bool>,
    /// Sections in document order
    pub sections: Vec<SectionLayout>,
    /// Content below the last section (footer)
    pub trailing_height: f32,
    /// Initial location path
    pub path: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800.0,
            reduced_motion: Some(false),
            sections: Vec::new(),
            trailing_height: 0.0,
            path: ROOT_PATH.to_string(),
        }
    }
}

/// One section box. Without `top` it is stacked below the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Element id, also the anchor name
    pub id: String,
    /// Box height
    pub height: f32,
    /// Absolute document offset
    #[serde(default)]
    pub top: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
struct SectionBox {
    id: String,
    top: f32,
    height: f32,
}

/// A session history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Location path
    pub path: String,
    /// Application payload
    pub state: NavigationState,
}

/// A recorded `scroll_into_view` call that found its target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollRequest {
    /// Element id that was scrolled to
    pub anchor: String,
    /// Options the request was made with
    pub options: ScrollIntoViewOptions,
    /// Offset the page ended up at
    pub scroll_y: f32,
}

/// Deterministic stand-in for a browser page: stacked section boxes, a
/// scroll offset, a session history and listener bookkeeping.
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    width: u32,
    client_height: f32,
    scroll_y: f32,
    sections: Vec<SectionBox>,
    trailing_height: f32,
    reduced_motion: Option<bool>,
    history: Vec<HistoryEntry>,
    cursor: usize,
    listeners: BTreeMap<ListenerId, ListenerKind>,
    motion_watchers: BTreeSet<ListenerId>,
    next_listener: u64,
    scroll_requests: Vec<ScrollRequest>,
    replace_count: usize,
}

impl HeadlessPage {
    /// Empty page at `/` with reduced-motion support and no preference.
    pub fn new(width: u32, client_height: f32) -> Self {
        Self {
            width,
            client_height,
            scroll_y: 0.0,
            sections: Vec::new(),
            trailing_height: 0.0,
            reduced_motion: Some(false),
            history: vec![HistoryEntry {
                path: ROOT_PATH.to_string(),
                state: NavigationState::default(),
            }],
            cursor: 0,
            listeners: BTreeMap::new(),
            motion_watchers: BTreeSet::new(),
            next_listener: 1,
            scroll_requests: Vec::new(),
            replace_count: 0,
        }
    }

    /// Build a page from a scenario layout.
    pub fn from_layout(layout: &PageLayout) -> Self {
        let mut page = Self::new(layout.width, layout.height)
            .with_reduced_motion(layout.reduced_motion)
            .with_trailing(layout.trailing_height)
            .with_path(&layout.path);
        for section in &layout.sections {
            page = match section.top {
                Some(top) => page.with_section_at(&section.id, top, section.height),
                None => page.with_section(&section.id, section.height),
            };
        }
        page
    }

    /// Append a section directly below the lowest one.
    pub fn with_section(self, id: &str, height: f32) -> Self {
        let top = self.content_bottom();
        self.with_section_at(id, top, height)
    }

    /// Add a section at an absolute document offset.
    pub fn with_section_at(mut self, id: &str, top: f32, height: f32) -> Self {
        self.sections.push(SectionBox {
            id: id.to_string(),
            top,
            height,
        });
        self
    }

    /// Set the height of content below the last section.
    pub fn with_trailing(mut self, height: f32) -> Self {
        self.trailing_height = height;
        self
    }

    /// Replace the initial history entry's path.
    pub fn with_path(mut self, path: &str) -> Self {
        if let Some(entry) = self.history.get_mut(self.cursor) {
            entry.path = path.to_string();
        }
        self
    }

    /// Set the payload of the initial history entry.
    pub fn with_state(mut self, state: NavigationState) -> Self {
        if let Some(entry) = self.history.get_mut(self.cursor) {
            entry.state = state;
        }
        self
    }

    /// `None` models a host without the reduced-motion query.
    pub fn with_reduced_motion(mut self, reduced: Option<bool>) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Scroll to `y`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.scroll_metrics().max_scroll());
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Change the viewport width. The runtime learns of it through a
    /// `Resized` event.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Change the preference value. Has no effect on a host without the
    /// capability.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.reduced_motion.is_some() {
            self.reduced_motion = Some(reduced);
        }
    }

    /// Bound listeners of `kind`.
    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    /// Active reduced-motion subscriptions.
    pub fn motion_watch_count(&self) -> usize {
        self.motion_watchers.len()
    }

    /// Every successful `scroll_into_view` call, oldest first.
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Number of `replace_state` calls.
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    /// Entries in the session history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Step back one entry. Returns the entry now current.
    pub fn back(&mut self) -> Option<HistoryEntry> {
        self.cursor = self.cursor.checked_sub(1)?;
        self.history.get(self.cursor).cloned()
    }

    /// Step forward one entry. Returns the entry now current.
    pub fn forward(&mut self) -> Option<HistoryEntry> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        self.history.get(self.cursor).cloned()
    }

    fn content_bottom(&self) -> f32 {
        self.sections
            .iter()
            .map(|s| s.top + s.height)
            .fold(0.0, f32::max)
    }

    fn section(&self, anchor: &str) -> Option<&SectionBox> {
        self.sections.iter().find(|s| s.id == anchor)
    }

    fn allocate_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        id
    }
}

impl WindowPort for HeadlessPage {
    fn inner_width(&self) -> u32 {
        self.width
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y: self.scroll_y,
            scroll_height: self.content_bottom() + self.trailing_height,
            client_height: self.client_height,
        }
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let id = self.allocate_listener();
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

impl DocumentPort for HeadlessPage {
    fn bounding_rect(&self, anchor: &str) -> Option<Rect> {
        self.section(anchor).map(|s| {
            Rect::new(s.top - self.scroll_y, s.top + s.height - self.scroll_y)
        })
    }

    fn scroll_into_view(
        &mut self,
        anchor: &str,
        options: ScrollIntoViewOptions,
    ) -> bool {
        let Some(top) = self.section(anchor).map(|s| s.top) else {
            tracing::debug!(anchor, "scroll target not in document");
            return false;
        };
        self.scroll_to(top);
        self.scroll_requests.push(ScrollRequest {
            anchor: anchor.to_string(),
            options,
            scroll_y: self.scroll_y,
        });
        true
    }
}

impl MotionQueryPort for HeadlessPage {
    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion
    }

    fn watch_reduced_motion(&mut self) -> Option<ListenerId> {
        self.reduced_motion?;
        let id = self.allocate_listener();
        self.motion_watchers.insert(id);
        Some(id)
    }

    fn unwatch_reduced_motion(&mut self, id: ListenerId) {
        self.motion_watchers.remove(&id);
    }
}

impl HistoryPort for HeadlessPage {
    fn current_path(&self) -> String {
        self.history
            .get(self.cursor)
            .map(|entry| entry.path.clone())
            .unwrap_or_else(|| ROOT_PATH.to_string())
    }

    fn current_state(&self) -> NavigationState {
        self.history
            .get(self.cursor)
            .map(|entry| entry.state)
            .unwrap_or_default()
    }

    fn push(&mut self, path: &str, state: NavigationState) {
        self.history.truncate(self.cursor + 1);
        self.history.push(HistoryEntry {
            path: path.to_string(),
            state,
        });
        self.cursor = self.history.len() - 1;
    }

    fn replace(&mut self, path: &str, state: NavigationState) {
        match self.history.get_mut(self.cursor) {
            Some(entry) => {
                entry.path = path.to_string();
                entry.state = state;
            }
            None => self.push(path, state),
        }
    }

    fn replace_state(&mut self, state: NavigationState) {
        self.replace_count += 1;
        if let Some(entry) = self.history.get_mut(self.cursor) {
            entry.state = state;
        }
    }
}
