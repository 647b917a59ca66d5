//! Viewport classification: compact vs. wide, with trailing resize debounce

pub mod classifier;

pub use classifier::{
    Reclassified, ViewportClassifier, ViewportState, classify,
};
