use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::timing;
use crate::site::use_site;

use super::state::{intersection_ratio, stagger_delay_ms, ElementBox, RevealKind, RevealState};

/// Wraps `children` in an element of group `kind` that animates in the first
/// time at least the configured fraction of it scrolls into view. `index` is the
/// element's position within its group and drives the stagger delay.
#[component]
pub fn Reveal(
    kind: RevealKind,
    index: usize,
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let site = use_site();
    let settings = &site.catalog.settings;
    let threshold = settings.reveal_threshold;
    let bottom_margin = settings.reveal_bottom_margin;
    let delay = timing::css_seconds(stagger_delay_ms(index, settings.reveal_stagger_ms));

    let mut state = use_signal(RevealState::default);
    let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);
    let viewport = site.viewport;

    use_effect(move || {
        let metrics = viewport();
        let Some(handle) = mounted() else {
            return;
        };
        if state.peek().is_visible() {
            return;
        }
        spawn(async move {
            let Ok(rect) = handle.get_client_rect().await else {
                return;
            };
            let ratio = intersection_ratio(
                ElementBox {
                    top: rect.origin.y,
                    height: rect.size.height,
                },
                metrics.viewport_height,
                bottom_margin,
            );
            if state.with_mut(|s| s.observe(ratio, threshold)) {
                tracing::trace!(group = kind.class(), index, "revealed");
            }
        });
    });

    let visible = if state().is_visible() { " visible" } else { "" };
    let (group, animation) = (kind.class(), kind.animation());

    rsx! {
        div {
            id: if id.is_empty() { None } else { Some(id.clone()) },
            class: "{group} {animation}{visible} {class}",
            style: "transition-delay: {delay}; {style}",
            onmounted: move |evt| mounted.set(Some(evt.data())),
            {children}
        }
    }
}
