//! Site-wide state shared through context, and the shell every page renders in.

use dioxus::prelude::*;

use crate::content::{self, LangCode, SiteCatalog};
use crate::core::viewport::{self, ViewportMetrics};
use crate::features::effects::{LoadingScreen, ScrollProgress};
use crate::features::nav::Navbar;
use crate::features::notify::{use_notifications, NotificationToast, Notifications};
use crate::features::language::{LanguageSwitcher, Localized, Rendered};
use crate::i18n;
use crate::t;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
const ICONS_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Controllers and data owned by the shell, handed to every section.
#[derive(Clone, Copy, PartialEq)]
pub struct Site {
    pub catalog: &'static SiteCatalog,
    pub language: Signal<LanguageSwitcher>,
    pub viewport: Signal<ViewportMetrics>,
    pub notifications: Notifications,
}

impl Site {
    /// Displayed text for a catalog id. Subscribes the caller to language changes.
    pub fn text(&self, id: &str) -> String {
        self.language.read().text(id)
    }

    /// Placement-aware content for a catalog id. Subscribes the caller to language changes.
    pub fn rendered(&self, id: &str) -> Rendered {
        self.language.read().rendered(id)
    }

    pub fn current_language(&self) -> LangCode {
        self.language.read().current().clone()
    }

    /// Apply a language to the catalog text and the Fluent chrome strings.
    pub fn switch_language(&self, code: LangCode) {
        let mut language = self.language;
        let catalog = self.catalog;
        let updated = language.with_mut(|switcher| switcher.switch(&code, catalog));
        match i18n::set_site_language(&code) {
            Ok(true) => {}
            Ok(false) => tracing::debug!(%code, "no UI string bundle for language"),
            Err(err) => tracing::warn!(%code, "failed switching UI strings: {err}"),
        }
        tracing::info!(%code, updated, "language switched");
    }
}

pub fn use_site() -> Site {
    use_context::<Site>()
}

/// Page chrome: stylesheet, loading screen, progress bar, navbar, footer and the
/// notification slot. Renders an error panel when the content catalog is broken.
#[component]
pub fn SiteShell(children: Element) -> Element {
    i18n::init();

    match content::catalog() {
        Ok(catalog) => rsx! {
            SiteProvider { catalog, {children} }
        },
        Err(err) => {
            tracing::error!("site content unavailable: {err}");
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "content-error",
                    p { {t!("content-error")} }
                }
            }
        }
    }
}

#[component]
fn SiteProvider(catalog: &'static SiteCatalog, children: Element) -> Element {
    let language = use_signal(|| LanguageSwitcher::new(catalog));
    let mut viewport = use_signal(viewport::snapshot);
    let notifications = use_notifications(&catalog.settings);

    use_hook(move || {
        viewport::on_change(move |metrics| {
            let mut current = *viewport.peek();
            if current.refresh(metrics) {
                viewport.set(current);
            }
        })
    });

    let site = use_context_provider(|| Site {
        catalog,
        language,
        viewport,
        notifications,
    });

    let lang = site.current_language();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ICONS_CSS }

        div { class: "site", lang: "{lang}",
            LoadingScreen {}
            ScrollProgress {}
            Navbar {}
            main { {children} }
            Footer {}
            NotificationToast { notifications }
        }
    }
}

#[component]
fn Footer() -> Element {
    // Fluent string: subscribe to language switches.
    let _lang = use_site().current_language();
    let rights = t!("footer-rights");

    rsx! {
        footer { class: "footer",
            div { class: "container footer__inner",
                span { class: "footer__brand", "Ironline Construction" }
                span { class: "footer__tagline", Localized { id: "footer-tagline" } }
                span { class: "footer__rights", "© Ironline Construction. {rights}" }
            }
        }
    }
}
