//! Scroll-bound decorations and the initial loading overlay.

use crate::core::viewport::ViewportMetrics;

/// Page scroll progress in percent, 0 for pages that do not scroll.
pub fn scroll_progress(metrics: ViewportMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Vertical translation of the hero background.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Shown,
    Fading,
    Gone,
}

impl LoadingPhase {
    /// Advance one step; `Gone` is terminal.
    pub fn next(self) -> Self {
        match self {
            LoadingPhase::Shown => LoadingPhase::Fading,
            LoadingPhase::Fading | LoadingPhase::Gone => LoadingPhase::Gone,
        }
    }
}
