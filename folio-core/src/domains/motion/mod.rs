//! Reduced-motion preference observer

pub mod monitor;

pub use monitor::{MotionPreference, MotionPreferenceMonitor};
