use dioxus::prelude::*;

use crate::site::use_site;
use crate::t;

#[component]
pub fn NotFound() -> Element {
    // Chrome strings come from Fluent; reading the language keeps them in sync.
    let site = use_site();
    let _lang = site.current_language();

    rsx! {
        section { class: "not-found",
            div { class: "container",
                h1 { {t!("not-found-title")} }
                p { {t!("not-found-body")} }
                a { class: "btn btn-primary", href: "/", {t!("not-found-home")} }
            }
        }
    }
}
