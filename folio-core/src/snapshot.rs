//! Read model of the navigation state

use crate::domains::animation::{
    AnimationProfile, DecorativeMotion, ParallaxOffsets, ScrollProgress,
};
use crate::domains::menu::{self, NavItem};
use crate::domains::restoration::RestorationState;
use crate::state::NavState;
use crate::timers::TimerSlot;
use crate::types::{Section, View};
use serde::Serialize;

/// Point-in-time view of everything the subsystem exposes to consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSnapshot {
    /// Highlighted navigation section
    pub active_section: Section,
    /// Compact layout in effect
    pub is_compact: bool,
    /// Width of the last classification
    pub width_px: u32,
    /// Reduced-motion preference
    pub reduced_motion: bool,
    /// Entrance animation parameters
    pub animation: AnimationProfile,
    /// Decorative effect toggles
    pub decor: DecorativeMotion,
    /// Routed view
    pub view: View,
    /// Restoration coordinator state
    pub restoration: RestorationState,
    /// Scroll progress bar
    pub progress: ScrollProgress,
    /// Background layer offsets
    pub parallax: ParallaxOffsets,
    /// Navigation bar entries
    pub nav_items: Vec<NavItem>,
    /// Compact menu open
    pub menu_open: bool,
    /// Whether the scroll spy listens to scroll events
    pub scroll_listener_bound: bool,
    /// Armed timers
    pub pending_timers: Vec<TimerSlot>,
}

impl NavSnapshot {
    /// Read the current state of every component.
    pub fn capture(state: &NavState) -> Self {
        let device = state.device_class();
        let viewport = state.viewport.state();
        let active = state.spy.active();

        Self {
            active_section: active,
            is_compact: viewport.is_compact,
            width_px: viewport.width_px,
            reduced_motion: state.motion.reduced(),
            animation: state.profile.profile(),
            decor: state.decor,
            view: state.view.clone(),
            restoration: state.restoration.state(),
            progress: state.progress,
            parallax: ParallaxOffsets::from_progress(state.progress, device),
            nav_items: menu::items(active),
            menu_open: state.menu.is_open(),
            scroll_listener_bound: state.spy.is_enabled(),
            pending_timers: state
                .timers
                .pending()
                .into_iter()
                .map(|timer| timer.slot)
                .collect(),
        }
    }
}
