//! Events accepted by the navigation runtime

use crate::types::{NavigationKind, NavigationState, Section};
use serde::{Deserialize, Serialize};

/// Host notifications and user intents handled by the navigation runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEvent {
    // Environment observers
    /// Viewport width changed
    Resized { width: u32 },
    /// Document scrolled
    Scrolled,
    /// `prefers-reduced-motion` flipped
    ReducedMotionChanged { reduced: bool },

    // Routing
    /// The router moved to `path`
    Navigated {
        path: String,
        #[serde(default)]
        state: NavigationState,
        #[serde(default)]
        kind: NavigationKind,
    },
    /// Detail view's "back to projects" action
    BackToProjects,

    // Navigation bar
    /// Compact menu button pressed
    MenuToggled,
    /// A navigation bar entry was chosen
    MenuItemSelected { section: Section },

    /// Re-render of the root view without a navigation
    Reevaluate,
}

impl NavEvent {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resized { .. } => "Nav::Resized",
            Self::Scrolled => "Nav::Scrolled",
            Self::ReducedMotionChanged { .. } => "Nav::ReducedMotionChanged",
            Self::Navigated { .. } => "Nav::Navigated",
            Self::BackToProjects => "Nav::BackToProjects",
            Self::MenuToggled => "Nav::MenuToggled",
            Self::MenuItemSelected { .. } => "Nav::MenuItemSelected",
            Self::Reevaluate => "Nav::Reevaluate",
        }
    }
}
