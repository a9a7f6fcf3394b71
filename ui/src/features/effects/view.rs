use dioxus::prelude::*;

use crate::core::{platform, timing};
use crate::features::language::Localized;
use crate::site::use_site;
use crate::t;

use super::state::{scroll_progress, LoadingPhase};

/// Thin bar at the top of the window tracking how far the page is scrolled.
#[component]
pub fn ScrollProgress() -> Element {
    let site = use_site();
    let percent = scroll_progress((site.viewport)());

    rsx! {
        div { class: "scroll-progress", style: "width: {percent}%;" }
    }
}

/// Full-screen overlay shown while the page settles, then faded out and removed.
#[component]
pub fn LoadingScreen() -> Element {
    let site = use_site();
    let visible_ms = site.catalog.settings.loading_visible_ms;
    let fade_ms = site.catalog.settings.loading_fade_ms;
    let mut phase = use_signal(LoadingPhase::default);

    use_hook(move || {
        platform::spawn_future(async move {
            timing::sleep_ms(visible_ms).await;
            phase.with_mut(|p| *p = p.next());
            timing::sleep_ms(fade_ms).await;
            phase.with_mut(|p| *p = p.next());
        });
    });

    let current = phase();
    if current == LoadingPhase::Gone {
        return rsx! {};
    }

    let opacity = if current == LoadingPhase::Shown { "1" } else { "0" };
    let label = t!("loading-label");
    let fade = timing::css_seconds(fade_ms);

    rsx! {
        div {
            id: "loading-screen",
            class: "loading-screen",
            role: "progressbar",
            aria_label: "{label}",
            style: "opacity: {opacity}; transition: opacity {fade} ease;",
            div { class: "loading-screen__inner",
                i { class: "fas fa-hard-hat loading-screen__icon" }
                p { class: "loading-screen__text", Localized { id: "loading-text" } }
            }
        }
    }
}
