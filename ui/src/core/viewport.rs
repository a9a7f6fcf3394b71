//! Window scroll metrics and scrolling.
//!
//! Metrics are re-read on every event in [`WATCHED_EVENTS`]: scrolling moves
//! `scroll_y`, resizing or rotating the device changes both heights.
//!
//! On wasm these read straight from `web_sys::window()`; native builds (tests,
//! server rendering) see a zero-sized, non-scrolling window.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Window events after which [`on_change`] listeners receive fresh metrics.
pub const WATCHED_EVENTS: [&str; 2] = ["scroll", "resize"];

impl ViewportMetrics {
    /// Take over `next`. Returns whether anything changed.
    pub fn refresh(&mut self, next: ViewportMetrics) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ViewportMetrics, WATCHED_EVENTS};
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    pub fn snapshot() -> ViewportMetrics {
        let Some(window) = web_sys::window() else {
            return ViewportMetrics::default();
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|doc| doc.body())
            .map(|body| body.scroll_height() as f64)
            .unwrap_or(0.0);
        ViewportMetrics {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    pub fn scroll_to(top: f64) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    pub fn element_top(id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let element: web_sys::HtmlElement = element.dyn_into().ok()?;
        Some(element.offset_top() as f64)
    }

    pub fn on_change(mut callback: impl FnMut(ViewportMetrics) + 'static) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = Closure::<dyn FnMut()>::new(move || callback(snapshot()));
        for event in WATCHED_EVENTS {
            if window
                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!(event, "failed to attach window listener");
            }
        }
        // Lives for the whole page; the site shell is never torn down.
        listener.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{element_top, on_change, scroll_to, snapshot};

#[cfg(not(target_arch = "wasm32"))]
pub fn snapshot() -> ViewportMetrics {
    ViewportMetrics::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to(_top: f64) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_top(_id: &str) -> Option<f64> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_change(_callback: impl FnMut(ViewportMetrics) + 'static) {}
