use dioxus::prelude::*;

use crate::content::SiteSettings;
use crate::core::{platform, timing};
use crate::t;

use super::state::{NoticePhase, NoticeSink, Notifier, Severity};

/// Handle for showing toasts from anywhere in the tree.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifications {
    state: Signal<Notifier>,
    enter_ms: u64,
    display_ms: u64,
    exit_ms: u64,
}

impl Notifications {
    pub fn state(&self) -> Signal<Notifier> {
        self.state
    }

    /// Replace any visible toast with `message`, then run its slide-in and
    /// auto-dismiss timers.
    pub fn present(&self, message: impl Into<String>, severity: Severity) {
        let mut state = self.state;
        let message = message.into();
        tracing::debug!(?severity, %message, "presenting notification");
        let id = state.with_mut(|notifier| notifier.present(message, severity));

        let enter_ms = self.enter_ms;
        platform::spawn_future(async move {
            timing::sleep_ms(enter_ms).await;
            state.with_mut(|notifier| notifier.reveal(id));
        });

        let handle = *self;
        let display_ms = self.display_ms;
        platform::spawn_future(async move {
            timing::sleep_ms(display_ms).await;
            handle.close(id);
        });
    }

    /// Slide the toast out and remove it once the exit animation has run. Safe to
    /// call for a toast that is already gone.
    pub fn close(&self, id: u64) {
        let mut state = self.state;
        if !state.with_mut(|notifier| notifier.dismiss(id)) {
            return;
        }
        let exit_ms = self.exit_ms;
        platform::spawn_future(async move {
            timing::sleep_ms(exit_ms).await;
            if state.with_mut(|notifier| notifier.remove(id)) {
                tracing::debug!(id, "notification removed");
            }
        });
    }
}

impl NoticeSink for Notifications {
    fn notify(&mut self, message: String, severity: Severity) {
        self.present(message, severity);
    }
}

pub fn use_notifications(settings: &SiteSettings) -> Notifications {
    let state = use_signal(Notifier::new);
    let (enter_ms, display_ms, exit_ms) = (
        settings.notice_enter_ms,
        settings.notice_display_ms,
        settings.notice_exit_ms,
    );
    use_hook(move || Notifications {
        state,
        enter_ms,
        display_ms,
        exit_ms,
    })
}

#[component]
pub fn NotificationToast(notifications: Notifications) -> Element {
    let state = notifications.state();
    let Some(notice) = state.read().current().cloned() else {
        return rsx! {};
    };

    let id = notice.id;
    let offset = if notice.on_screen() { "0" } else { "100%" };
    let leaving = if notice.phase == NoticePhase::Leaving {
        " notification--leaving"
    } else {
        ""
    };

    let severity_class = notice.severity.class();
    let color = notice.severity.color();

    rsx! {
        div {
            key: "{id}",
            class: "notification {severity_class}{leaving}",
            role: "status",
            style: "background: {color}; transform: translateX({offset});",
            div { class: "notification-content",
                i { class: notice.severity.icon() }
                span { "{notice.message}" }
                button {
                    r#type: "button",
                    class: "notification-close",
                    aria_label: t!("notify-close"),
                    onclick: move |_| notifications.close(id),
                    "×"
                }
            }
        }
    }
}
