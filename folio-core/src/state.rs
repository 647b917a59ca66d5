//! Component state owned by the runtime

use crate::config::NavConfig;
use crate::domains::animation::{
    AnimationProfileSelector, DecorativeMotion, ScrollProgress,
};
use crate::domains::menu::NavMenu;
use crate::domains::motion::MotionPreferenceMonitor;
use crate::domains::restoration::ScrollRestorationCoordinator;
use crate::domains::scroll_spy::ScrollSpy;
use crate::domains::viewport::ViewportClassifier;
use crate::timers::DeferredTimers;
use crate::types::{DeviceClass, View};

/// Everything the navigation runtime owns, one field per component.
///
/// Each component is the single writer of its own state; the update
/// handlers only route signals between them.
#[derive(Debug)]
pub struct NavState {
    /// Compact/wide classification and the resize listener
    pub viewport: ViewportClassifier,
    /// Reduced-motion preference
    pub motion: MotionPreferenceMonitor,
    /// Entrance animation parameters
    pub profile: AnimationProfileSelector,
    /// Decorative effect toggles
    pub decor: DecorativeMotion,
    /// Scroll progress bar
    pub progress: ScrollProgress,
    /// Active-section tracking
    pub spy: ScrollSpy,
    /// Back-to-projects scroll restoration
    pub restoration: ScrollRestorationCoordinator,
    /// Compact menu open state
    pub menu: NavMenu,
    /// View the router currently shows
    pub view: View,
    /// Resize debounce and restoration settle timers
    pub timers: DeferredTimers,
}

impl NavState {
    /// Fresh state from configuration; listeners bind in the initial pass.
    pub fn new(config: &NavConfig) -> Self {
        Self {
            viewport: ViewportClassifier::new(config.compact_max_width_px()),
            motion: MotionPreferenceMonitor::new(),
            profile: AnimationProfileSelector::new(DeviceClass::Wide),
            decor: DecorativeMotion::select(DeviceClass::Wide, false),
            progress: ScrollProgress::default(),
            spy: ScrollSpy::new(config.activation_line_px()),
            restoration: ScrollRestorationCoordinator::default(),
            menu: NavMenu::new(),
            view: View::Root,
            timers: DeferredTimers::new(),
        }
    }

    /// Current device class.
    pub fn device_class(&self) -> DeviceClass {
        self.viewport.state().device_class()
    }

    /// Whether the viewport is classified compact.
    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }
}
