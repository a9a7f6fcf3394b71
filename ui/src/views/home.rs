use dioxus::prelude::*;

use crate::features::carousel::Testimonials;
use crate::features::contact::Contact;
use crate::features::filter::Projects;
use crate::features::language::Localized;
use crate::features::reveal::{Reveal, RevealKind};
use crate::site::use_site;
use crate::Hero;

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Services {}
        About {}
        Projects {}
        Testimonials {}
        Contact {}
    }
}

#[component]
fn Services() -> Element {
    let site = use_site();

    rsx! {
        section { id: "services", class: "services",
            div { class: "container",
                Reveal { kind: RevealKind::SectionTitle, index: 0,
                    h2 { Localized { id: "services-title" } }
                    p { class: "section-subtitle", Localized { id: "services-subtitle" } }
                }
                div { class: "services-grid",
                    for (index, service) in site.catalog.services.iter().enumerate() {
                        Reveal { key: "{index}", kind: RevealKind::ServiceCard, index: index,
                            div { class: "service-card__icon",
                                i { class: "{service.icon}" }
                            }
                            h3 { Localized { id: service.title.as_str() } }
                            p { Localized { id: service.body.as_str() } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    let site = use_site();

    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                Reveal { kind: RevealKind::SectionTitle, index: 1,
                    h2 { Localized { id: "about-title" } }
                }
                div { class: "about-content",
                    Reveal { kind: RevealKind::AboutText, index: 0,
                        p { Localized { id: "about-text-1" } }
                        p { Localized { id: "about-text-2" } }
                    }
                    div { class: "timeline",
                        for (index, entry) in site.catalog.timeline.iter().enumerate() {
                            Reveal { key: "{entry.year}", kind: RevealKind::TimelineItem, index: index,
                                span { class: "timeline-item__year", "{entry.year}" }
                                div { class: "timeline-item__body",
                                    h4 { Localized { id: entry.title.as_str() } }
                                    p { Localized { id: entry.body.as_str() } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
