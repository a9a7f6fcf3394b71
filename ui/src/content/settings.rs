//! Timings and thresholds for every animated or timed behaviour on the site.
//!
//! All fields default to the production values, so `site.json` only needs to
//! list the ones it overrides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Testimonial autoplay period.
    pub autoplay_ms: u64,
    /// How long a notification stays on screen before sliding out.
    pub notice_display_ms: u64,
    /// Delay between inserting a notification and sliding it in.
    pub notice_enter_ms: u64,
    /// Slide-out duration before a notification is removed.
    pub notice_exit_ms: u64,
    /// Simulated contact form round trip.
    pub submit_latency_ms: u64,
    /// Per-index stagger for project reveal.
    pub filter_stagger_ms: u64,
    /// Fade-out duration before a filtered project leaves the layout.
    pub filter_hide_ms: u64,
    /// Per-index stagger for scroll reveal transitions.
    pub reveal_stagger_ms: u64,
    /// Fraction of an element that must be inside the viewport to reveal it.
    pub reveal_threshold: f64,
    /// Pixels trimmed off the bottom of the viewport for reveal checks.
    pub reveal_bottom_margin: f64,
    /// Scroll offset after which the navbar switches to its compact style.
    pub nav_scrolled_px: f64,
    /// Height of the fixed navbar, subtracted from anchor scroll targets.
    pub nav_offset_px: f64,
    pub parallax_speed: f64,
    /// Loading screen: time before fading out, then time until it is removed.
    pub loading_visible_ms: u64,
    pub loading_fade_ms: u64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            autoplay_ms: 5000,
            notice_display_ms: 5000,
            notice_enter_ms: 100,
            notice_exit_ms: 300,
            submit_latency_ms: 2000,
            filter_stagger_ms: 100,
            filter_hide_ms: 300,
            reveal_stagger_ms: 100,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            nav_scrolled_px: 100.0,
            nav_offset_px: 80.0,
            parallax_speed: 0.5,
            loading_visible_ms: 2500,
            loading_fade_ms: 500,
        }
    }
}
