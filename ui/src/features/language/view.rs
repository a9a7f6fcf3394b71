use dioxus::prelude::*;

use crate::site::use_site;
use crate::t;

use super::state::Rendered;

/// One button per catalog language; the active one carries `active`.
#[component]
pub fn LanguageButtons() -> Element {
    let site = use_site();
    let current = site.current_language();
    let label = t!("nav-language-label");

    rsx! {
        div { class: "language-switcher", role: "group", aria_label: "{label}",
            for lang in site.catalog.languages.iter() {
                button {
                    key: "{lang.code}",
                    r#type: "button",
                    class: if lang.code == current { "lang-btn active" } else { "lang-btn" },
                    "data-lang": "{lang.code}",
                    onclick: {
                        let code = lang.code.clone();
                        move |_| site.switch_language(code.clone())
                    },
                    "{lang.label}"
                }
            }
        }
    }
}

/// Body of catalog element `id`, placed the way its text target asks: markup is
/// injected as HTML, labels become a plain text node. Placeholder texts belong in
/// an attribute and render nothing here.
#[component]
pub fn Localized(id: &'static str) -> Element {
    let site = use_site();
    match site.rendered(id) {
        Rendered::Markup(html) => rsx! {
            span { class: "l10n", dangerous_inner_html: "{html}" }
        },
        Rendered::Text(text) => rsx! { "{text}" },
        Rendered::Placeholder(_) | Rendered::Missing => {
            tracing::debug!(id, "no body text for element");
            rsx! {}
        }
    }
}
