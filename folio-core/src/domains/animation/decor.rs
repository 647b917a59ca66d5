//! Decorative effect toggles

use crate::constants::decor::{CARD_HOVER_LIFT_PX, REVEAL_MARGIN_PX};
use crate::types::DeviceClass;
use serde::Serialize;

/// Which decorative effects run, and how strongly.
///
/// Reduced motion switches ambient loops off entirely instead of scaling
/// them; compact viewports additionally drop parallax and hover lift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeMotion {
    /// Looping background blobs and gradient shimmer
    pub ambient_enabled: bool,
    /// Scroll-linked background layer offsets
    pub parallax_enabled: bool,
    /// Lift applied to hovered project cards
    pub card_hover_lift_px: f32,
    /// Margin applied to in-view reveal triggers
    pub reveal_margin_px: f32,
}

impl DecorativeMotion {
    /// Toggles for a device class and motion preference.
    pub fn select(device: DeviceClass, reduced_motion: bool) -> Self {
        match device {
            DeviceClass::Compact => Self {
                ambient_enabled: false,
                parallax_enabled: false,
                card_hover_lift_px: 0.0,
                reveal_margin_px: 0.0,
            },
            DeviceClass::Wide => Self {
                ambient_enabled: !reduced_motion,
                parallax_enabled: true,
                card_hover_lift_px: CARD_HOVER_LIFT_PX,
                reveal_margin_px: REVEAL_MARGIN_PX,
            },
        }
    }
}
