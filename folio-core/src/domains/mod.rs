//! Navigation components, one directory per concern

pub mod animation;
pub mod menu;
pub mod motion;
pub mod restoration;
pub mod scroll_spy;
pub mod viewport;
