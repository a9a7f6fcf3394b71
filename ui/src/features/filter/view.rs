use dioxus::prelude::*;

use crate::core::{platform, timing};
use crate::features::language::Localized;
use crate::features::reveal::{Reveal, RevealKind};
use crate::site::use_site;

use super::state::{ItemPhase, ProjectFilter, Transition};

#[component]
pub fn Projects() -> Element {
    let site = use_site();
    let catalog = site.catalog;
    let settings = &catalog.settings;
    let (stagger_ms, hide_ms) = (settings.filter_stagger_ms, settings.filter_hide_ms);

    let mut filter = use_signal(|| {
        ProjectFilter::new(
            catalog.projects.iter().map(|p| p.category.as_str()),
            stagger_ms,
            hide_ms,
        )
    });
    // Inline opacity would fight the scroll reveal, so it is only written once
    // the visitor has used the filter.
    let mut touched = use_signal(|| false);

    let mut select = move |value: String| {
        touched.set(true);
        let transitions = filter.with_mut(|f| f.select(&value));
        tracing::debug!(filter = %value, pending = transitions.len(), "project filter selected");
        for transition in transitions {
            queue_settle(filter, transition);
        }
    };

    let state = filter();
    let styled = touched();

    rsx! {
        section { id: "projects", class: "projects",
            div { class: "container",
                Reveal { kind: RevealKind::SectionTitle, index: 2,
                    h2 { Localized { id: "projects-title" } }
                }

                div { class: "project-filters",
                    for option in catalog.filters.iter() {
                        button {
                            key: "{option.value}",
                            r#type: "button",
                            class: if state.is_active(&option.value) { "filter-btn active" } else { "filter-btn" },
                            "data-filter": "{option.value}",
                            onclick: {
                                let value = option.value.clone();
                                move |_| select(value.clone())
                            },
                            Localized { id: option.label.as_str() }
                        }
                    }
                }

                div { class: "projects-grid",
                    for (index, project) in catalog.projects.iter().enumerate() {
                        Reveal {
                            key: "{project.id}",
                            kind: RevealKind::ProjectItem,
                            index: index,
                            style: item_style(state.phase(index), styled),
                            div { class: "project-item__media",
                                img {
                                    src: "{project.image}",
                                    alt: site.text(&project.title),
                                    loading: "lazy",
                                }
                                span { class: "project-item__category", "{project.category}" }
                            }
                            div { class: "project-item__body",
                                h3 { Localized { id: project.title.as_str() } }
                                p {
                                    i { class: "fas fa-map-marker-alt" }
                                    " "
                                    Localized { id: project.location.as_str() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn item_style(phase: Option<ItemPhase>, styled: bool) -> String {
    let Some(phase) = phase else {
        return String::new();
    };
    if !styled {
        return String::new();
    }
    let display = if phase.in_layout() { "block" } else { "none" };
    let (opacity, offset) = if phase.is_shown() {
        ("1", "0")
    } else {
        ("0", "20px")
    };
    format!("display: {display}; opacity: {opacity}; transform: translateY({offset});")
}

fn queue_settle(mut filter: Signal<ProjectFilter>, transition: Transition) {
    platform::spawn_future(async move {
        timing::sleep_ms(transition.wait_ms).await;
        if !filter.with_mut(|f| f.settle(transition.item, transition.generation)) {
            tracing::trace!(item = transition.item, "superseded filter transition dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_items_carry_no_inline_style() {
        assert_eq!(item_style(Some(ItemPhase::Visible), false), "");
    }

    #[test]
    fn styles_follow_phase() {
        assert_eq!(
            item_style(Some(ItemPhase::Revealing), true),
            "display: block; opacity: 0; transform: translateY(20px);"
        );
        assert_eq!(
            item_style(Some(ItemPhase::Visible), true),
            "display: block; opacity: 1; transform: translateY(0);"
        );
        assert_eq!(
            item_style(Some(ItemPhase::Hidden), true),
            "display: none; opacity: 0; transform: translateY(20px);"
        );
    }
}
