//! Compiled defaults for navigation, scroll tracking and motion parameters
//!
//! Every value here can be overridden at runtime through
//! [`NavConfig`](crate::config::NavConfig); accessors fall back to these
//! constants when no override is present.

/// Viewport classification
pub mod viewport {
    /// Widest viewport (inclusive, CSS pixels) still treated as compact
    pub const COMPACT_MAX_WIDTH_PX: u32 = 768;

    /// Trailing debounce window applied to resize notifications
    pub const RESIZE_DEBOUNCE_MS: u64 = 100;
}

/// Active-section tracking
pub mod scroll_spy {
    /// Distance from the viewport top at which a section becomes active.
    ///
    /// Derived from the rendered height of the fixed navigation header
    /// (64px) plus breathing room. Re-derive if the header changes.
    pub const ACTIVATION_LINE_PX: f32 = 100.0;
}

/// One-shot scroll restoration
pub mod restoration {
    /// Delay between arriving at the root view and scrolling, so layout can
    /// settle first
    pub const SETTLE_DELAY_MS: u64 = 100;

    /// Root path the detail view navigates back to
    pub const ROOT_PATH: &str = "/";

    /// Path prefix of project detail views
    pub const PROJECT_PATH_PREFIX: &str = "/projects/";
}

/// Entrance and stagger animation timings
pub mod animation {
    /// Wide viewports
    pub mod wide {
        /// Upward travel of entering content
        pub const ENTRANCE_OFFSET_PX: f32 = 20.0;
        /// Entrance fade duration
        pub const ENTRANCE_DURATION_SEC: f32 = 0.3;
        /// Delay between staggered children
        pub const STAGGER_GAP_SEC: f32 = 0.1;
    }

    /// Compact viewports
    pub mod compact {
        /// Upward travel of entering content
        pub const ENTRANCE_OFFSET_PX: f32 = 10.0;
        /// Entrance fade duration
        pub const ENTRANCE_DURATION_SEC: f32 = 0.1;
        /// Delay between staggered children
        pub const STAGGER_GAP_SEC: f32 = 0.0;
    }
}

/// Decorative (non-essential) motion
pub mod decor {
    /// Upward lift applied to project cards on hover
    pub const CARD_HOVER_LIFT_PX: f32 = 5.0;

    /// In-view margin used when revealing content; negative values delay
    /// the reveal until the element is this far inside the viewport
    pub const REVEAL_MARGIN_PX: f32 = -100.0;

    /// Parallax travel of the three background layers over a full scroll
    pub const PARALLAX_DEPTHS_PX: [f32; 3] = [-50.0, -25.0, -35.0];
}
