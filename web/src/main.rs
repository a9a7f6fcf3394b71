use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::{Home, NotFound as NotFoundPage};
use ui::SiteShell;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    init_logging();
    dioxus::launch(App);
}

/// Install the dioxus tracing subscriber at `INFO`. A subscriber that is
/// already installed stays in place.
fn init_logging() {
    let _ = dioxus::logger::init(Level::INFO);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Routes render inside the shared site chrome.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        NotFoundPage {}
    }
}
