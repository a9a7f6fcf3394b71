use dioxus::prelude::*;

use crate::features::effects::parallax_offset;
use crate::features::language::Localized;
use crate::features::nav::scroll_to_section;
use crate::site::use_site;

const HERO_VIDEO: &str = "/assets/media/hero.mp4";
const HERO_POSTER: &str = "/assets/media/hero.jpg";

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let settings = &site.catalog.settings;
    let nav_offset = settings.nav_offset_px;
    let offset = parallax_offset((site.viewport)().scroll_y, settings.parallax_speed);


    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-video",
                video {
                    src: HERO_VIDEO,
                    poster: HERO_POSTER,
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                    playsinline: true,
                    style: "transform: translateY({offset}px);",
                }
                div { class: "hero-overlay" }
            }
            div { class: "container hero-content",
                h1 { class: "hero-title", Localized { id: "hero-title" } }
                p { class: "hero-subtitle", Localized { id: "hero-subtitle" } }
                div { class: "hero-buttons",
                    a {
                        class: "btn btn-primary",
                        href: "#contact",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll_to_section("contact", nav_offset);
                        },
                        Localized { id: "hero-cta-primary" }
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "#projects",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll_to_section("projects", nav_offset);
                        },
                        Localized { id: "hero-cta-secondary" }
                    }
                }
            }
        }
    }
}
