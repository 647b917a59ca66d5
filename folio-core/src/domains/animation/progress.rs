//! Scroll progress bar and parallax layer offsets

use crate::constants::decor::PARALLAX_DEPTHS_PX;
use crate::types::{DeviceClass, ScrollMetrics};
use serde::Serialize;

/// How far the document has been scrolled, for the top progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollProgress {
    /// In `[0, 1]`; always 0 on compact viewports
    pub fraction: f32,
}

impl ScrollProgress {
    /// Sample from scroll geometry.
    pub fn sample(metrics: ScrollMetrics, device: DeviceClass) -> Self {
        if device.is_compact() {
            return Self::default();
        }
        let max = metrics.max_scroll();
        if max <= 0.0 {
            return Self::default();
        }
        Self {
            fraction: (metrics.scroll_y / max).clamp(0.0, 1.0),
        }
    }
}

/// Vertical offsets of the three background layers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ParallaxOffsets {
    /// Offsets from back to front
    pub layers: [f32; 3],
}

impl ParallaxOffsets {
    /// Offsets for a progress value.
    pub fn from_progress(progress: ScrollProgress, device: DeviceClass) -> Self {
        if device.is_compact() {
            return Self::default();
        }
        Self {
            layers: PARALLAX_DEPTHS_PX.map(|depth| depth * progress.fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f32) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            scroll_height: 3000.0,
            client_height: 1000.0,
        }
    }

    #[test]
    fn fraction_is_clamped() {
        let wide = DeviceClass::Wide;
        assert_eq!(ScrollProgress::sample(metrics(0.0), wide).fraction, 0.0);
        assert_eq!(ScrollProgress::sample(metrics(1000.0), wide).fraction, 0.5);
        assert_eq!(ScrollProgress::sample(metrics(2500.0), wide).fraction, 1.0);
        assert_eq!(ScrollProgress::sample(metrics(-40.0), wide).fraction, 0.0);
    }

    #[test]
    fn unscrollable_document_reports_zero() {
        let flat = ScrollMetrics {
            scroll_y: 0.0,
            scroll_height: 600.0,
            client_height: 800.0,
        };
        assert_eq!(ScrollProgress::sample(flat, DeviceClass::Wide).fraction, 0.0);
    }

    #[test]
    fn compact_pins_progress_and_parallax() {
        let progress = ScrollProgress::sample(metrics(1000.0), DeviceClass::Compact);
        assert_eq!(progress.fraction, 0.0);

        let offsets = ParallaxOffsets::from_progress(
            ScrollProgress { fraction: 1.0 },
            DeviceClass::Compact,
        );
        assert_eq!(offsets.layers, [0.0; 3]);
    }

    #[test]
    fn parallax_scales_with_progress() {
        let offsets = ParallaxOffsets::from_progress(
            ScrollProgress { fraction: 0.5 },
            DeviceClass::Wide,
        );
        assert_eq!(offsets.layers, [-25.0, -12.5, -17.5]);
    }
}
