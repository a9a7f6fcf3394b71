use dioxus::prelude::*;

use crate::core::viewport;
use crate::features::language::{LanguageButtons, Localized};
use crate::site::use_site;
use crate::t;

use super::state::{anchor_scroll_top, NavState};

/// Section anchors in page order: (element id, catalog text id).
const SECTIONS: [(&str, &str); 6] = [
    ("home", "nav-home"),
    ("services", "nav-services"),
    ("about", "nav-about"),
    ("projects", "nav-projects"),
    ("testimonials", "nav-testimonials"),
    ("contact", "nav-contact"),
];

/// Smooth-scroll to the section with `id`, leaving room for the fixed navbar.
pub(crate) fn scroll_to_section(id: &str, nav_offset: f64) {
    match viewport::element_top(id) {
        Some(top) => viewport::scroll_to(anchor_scroll_top(top, nav_offset)),
        None => tracing::debug!(id, "anchor target not found"),
    }
}

#[component]
pub fn Navbar() -> Element {
    let site = use_site();
    let settings = &site.catalog.settings;
    let (threshold, nav_offset) = (settings.nav_scrolled_px, settings.nav_offset_px);
    let mut nav = use_signal(NavState::default);
    let viewport = site.viewport;

    use_effect(move || {
        let scroll_y = viewport().scroll_y;
        if nav.peek().is_scrolled() != (scroll_y > threshold) {
            nav.with_mut(|state| state.on_scroll(scroll_y, threshold));
        }
    });

    let state = nav();
    let menu_label = t!("nav-menu-toggle");
    let expanded = state.is_menu_open().to_string();

    rsx! {
        header {
            id: "navbar",
            class: if state.is_scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "container navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_section("home", nav_offset);
                    },
                    i { class: "fas fa-hard-hat" }
                    span { "Ironline" }
                }

                ul {
                    id: "nav-menu",
                    class: if state.is_menu_open() { "nav-menu active" } else { "nav-menu" },
                    for (anchor, text_id) in SECTIONS {
                        li { key: "{anchor}",
                            a {
                                class: "nav-link",
                                href: "#{anchor}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    nav.with_mut(|state| state.close_menu());
                                    scroll_to_section(anchor, nav_offset);
                                },
                                Localized { id: text_id }
                            }
                        }
                    }
                }

                LanguageButtons {}

                button {
                    id: "hamburger",
                    r#type: "button",
                    class: if state.is_menu_open() { "hamburger active" } else { "hamburger" },
                    aria_label: "{menu_label}",
                    aria_expanded: "{expanded}",
                    onclick: move |_| nav.with_mut(|state| state.toggle_menu()),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
