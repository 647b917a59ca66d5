//! Shared value types exchanged between the state machines and the host

use crate::constants::restoration::{PROJECT_PATH_PREFIX, ROOT_PATH};
use crate::error::ParseSectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level page section, in document order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing hero
    #[default]
    Home,
    /// About
    About,
    /// Project grid, the restoration target
    Projects,
    /// Contact form
    Contact,
}

impl Section {
    /// Fixed scan order; earlier entries win ties.
    pub const ORDER: [Section; 4] =
        [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// DOM id of the section's anchor element.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// `#anchor` form used by nav links.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Section for an element id.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ORDER.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_anchor(&s.to_ascii_lowercase())
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Binary device class derived from viewport width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Width at or below the breakpoint
    Compact,
    /// Width above the breakpoint
    Wide,
}

impl DeviceClass {
    /// Map a compact flag to a class.
    pub fn from_compact(is_compact: bool) -> Self {
        if is_compact { Self::Compact } else { Self::Wide }
    }

    /// Whether this is [`DeviceClass::Compact`].
    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

/// Vertical extent of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the viewport top to the top edge
    pub top: f32,
    /// Distance from the viewport top to the bottom edge
    pub bottom: f32,
}

impl Rect {
    /// Rect between `top` and `bottom`.
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Vertical size.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether a horizontal line `line` px below the viewport top crosses
    /// this rect (edges inclusive).
    pub fn spans(&self, line: f32) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Document scroll geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset
    pub scroll_y: f32,
    /// Full document height
    pub scroll_height: f32,
    /// Visible viewport height
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Identifier of a project detail page (`/projects/<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which page the router currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum View {
    /// The single-page portfolio
    #[default]
    Root,
    /// `/projects/<id>`
    ProjectDetail(ProjectId),
    /// Any other path
    Other(String),
}

impl View {
    /// Classify a location path. Query strings and fragments are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path.is_empty() || path == ROOT_PATH {
            return Self::Root;
        }

        match path.strip_prefix(PROJECT_PATH_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Self::ProjectDetail(ProjectId(id.to_string()))
            }
            _ => Self::Other(path.to_string()),
        }
    }

    /// Whether this is the portfolio page.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

/// Application payload carried on a history entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationState {
    /// Restoration intent: scroll the projects anchor into view on arrival
    pub scroll_to_projects: bool,
}

impl NavigationState {
    /// Payload produced by the detail view's "back to projects" action.
    pub fn restore_projects() -> Self {
        Self {
            scroll_to_projects: true,
        }
    }

    /// Payload with no intent.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether arriving with this payload should restore scroll.
    pub fn has_restoration_intent(&self) -> bool {
        self.scroll_to_projects
    }
}

/// How the current history entry was reached.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    /// A new entry pushed by the application
    #[default]
    Push,
    /// The current entry replaced by the application
    Replace,
    /// Back/forward traversal
    Traverse,
    /// Page reload at the same URL
    Reload,
}

impl NavigationKind {
    /// Whether this transition may carry a fresh restoration intent.
    pub fn may_arm_restoration(self) -> bool {
        matches!(self, Self::Push | Self::Replace)
    }
}

/// Scroll animation style.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll
    #[default]
    Smooth,
    /// Jump
    Instant,
}

/// Where the target lands in the viewport.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    /// Top edge
    #[default]
    Start,
    /// Centered
    Center,
    /// Bottom edge
    End,
    /// Least movement
    Nearest,
}

/// Options for bringing an anchor into view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct ScrollIntoViewOptions {
    /// Animation style
    pub behavior: ScrollBehavior,
    /// Vertical alignment
    pub block: ScrollBlock,
}

impl ScrollIntoViewOptions {
    /// Smooth scroll, anchor aligned to the viewport top.
    pub const SMOOTH_START: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };
}

/// Handle of a bound environment listener.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct ListenerId(pub u64);

/// Environment notifications the subsystem can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    /// Window resize
    Resize,
    /// Document scroll
    Scroll,
}
