//! Motion intensity derived from device class and motion preference
//!
//! - [`AnimationProfile`]: entrance/stagger timings, a pure function of the
//!   device class
//! - [`DecorativeMotion`]: ambient, parallax and hover effects, gated by
//!   device class and the reduced-motion preference
//! - [`ScrollProgress`] / [`ParallaxOffsets`]: scroll-linked values for the
//!   progress bar and background layers

pub mod decor;
pub mod profile;
pub mod progress;

pub use decor::DecorativeMotion;
pub use profile::{AnimationProfile, AnimationProfileSelector, EasingKind};
pub use progress::{ParallaxOffsets, ScrollProgress};
