//! Entrance animation profiles per device class

use crate::constants::animation::{compact, wide};
use crate::types::DeviceClass;
use serde::{Deserialize, Serialize};

/// Easing curve for entrance animations
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    /// Constant speed
    Linear,
    /// Quadratic acceleration
    EaseIn,
    /// Quadratic deceleration
    #[default]
    EaseOut,
    /// Accelerate then decelerate
    EaseInOut,
}

impl EasingKind {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

impl std::fmt::Display for EasingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::EaseIn => write!(f, "ease-in"),
            Self::EaseOut => write!(f, "ease-out"),
            Self::EaseInOut => write!(f, "ease-in-out"),
        }
    }
}

/// Entrance and stagger parameters handed to content components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationProfile {
    /// Distance content travels upward while fading in
    pub entrance_offset_px: f32,
    /// Fade-in duration
    pub entrance_duration_sec: f32,
    /// Delay between successive children of a staggered container
    pub stagger_gap_sec: f32,
    /// Entrance curve
    pub easing: EasingKind,
}

impl AnimationProfile {
    /// Profile for wide viewports.
    pub const WIDE: Self = Self {
        entrance_offset_px: wide::ENTRANCE_OFFSET_PX,
        entrance_duration_sec: wide::ENTRANCE_DURATION_SEC,
        stagger_gap_sec: wide::STAGGER_GAP_SEC,
        easing: EasingKind::EaseOut,
    };

    /// Profile for compact viewports.
    pub const COMPACT: Self = Self {
        entrance_offset_px: compact::ENTRANCE_OFFSET_PX,
        entrance_duration_sec: compact::ENTRANCE_DURATION_SEC,
        stagger_gap_sec: compact::STAGGER_GAP_SEC,
        easing: EasingKind::EaseOut,
    };

    /// Profile for a device class. Pure.
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Wide => Self::WIDE,
            DeviceClass::Compact => Self::COMPACT,
        }
    }

    /// Remaining vertical offset of the `index`-th staggered child at
    /// `elapsed_sec` after its container started revealing.
    pub fn entrance_offset_at(&self, index: usize, elapsed_sec: f32) -> f32 {
        let local = elapsed_sec - self.stagger_gap_sec * index as f32;
        if local <= 0.0 {
            return self.entrance_offset_px;
        }
        if self.entrance_duration_sec <= 0.0 {
            return 0.0;
        }
        let t = local / self.entrance_duration_sec;
        self.entrance_offset_px * (1.0 - self.easing.apply(t))
    }

    /// Time until the last of `children` staggered children settles.
    pub fn total_reveal_sec(&self, children: usize) -> f32 {
        let gaps = children.saturating_sub(1) as f32;
        self.stagger_gap_sec * gaps + self.entrance_duration_sec
    }
}

/// Recomputes the profile only when the device class changes.
#[derive(Debug)]
pub struct AnimationProfileSelector {
    device: DeviceClass,
    profile: AnimationProfile,
    evaluations: u64,
}

impl AnimationProfileSelector {
    /// Selector starting on `device`.
    pub fn new(device: DeviceClass) -> Self {
        Self {
            device,
            profile: AnimationProfile::for_device(device),
            evaluations: 1,
        }
    }

    /// Feed the current device class. Returns the new profile when it was
    /// recomputed, `None` when the class is unchanged.
    pub fn update(&mut self, device: DeviceClass) -> Option<AnimationProfile> {
        if device == self.device {
            return None;
        }
        self.device = device;
        self.profile = AnimationProfile::for_device(device);
        self.evaluations += 1;
        tracing::debug!(%device, "animation profile reselected");
        Some(self.profile)
    }

    /// Current profile.
    pub fn profile(&self) -> AnimationProfile {
        self.profile
    }

    /// How many times the profile was computed.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
