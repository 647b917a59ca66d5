//! Active-section tracking driven by scroll position

pub mod spy;

pub use spy::{ScrollSpy, SpyTransition, find_active, should_track};
