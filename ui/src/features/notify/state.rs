//! Single-slot toast notifications.
//!
//! At most one notice exists. Timers in the view refer to a notice by id, so a
//! timer belonging to a replaced or already removed notice finds nothing to do.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "fas fa-info-circle",
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Inserted off-screen, waiting for the slide-in.
    Entering,
    Shown,
    /// Sliding out; removed when the exit timer fires.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: NoticePhase,
}

impl Notice {
    /// Whether the toast sits at its on-screen position.
    pub fn on_screen(&self) -> bool {
        self.phase == NoticePhase::Shown
    }
}

/// Anything that can put a notice on screen.
pub trait NoticeSink {
    fn notify(&mut self, message: String, severity: Severity);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notifier {
    current: Option<Notice>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replace whatever is showing with a new notice and return its id.
    pub fn present(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(Notice {
            id: self.next_id,
            message: message.into(),
            severity,
            phase: NoticePhase::Entering,
        });
        self.next_id
    }

    /// Slide the notice in. False if `id` is no longer current.
    pub fn reveal(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(notice) if notice.id == id && notice.phase == NoticePhase::Entering => {
                notice.phase = NoticePhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation (auto-dismiss or close button). Returns true when
    /// the caller should schedule removal; a notice already leaving is not
    /// re-dismissed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(notice) if notice.id == id && notice.phase != NoticePhase::Leaving => {
                notice.phase = NoticePhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop the notice if it is still the current one.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}

impl NoticeSink for Notifier {
    fn notify(&mut self, message: String, severity: Severity) {
        self.present(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_notice_replaces_first() {
        let mut notifier = Notifier::new();
        let first = notifier.present("Please fill in all fields", Severity::Error);
        let second = notifier.present("Message sent", Severity::Success);
        assert_ne!(first, second);

        let current = notifier.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.phase, NoticePhase::Entering);

        // Timers of the replaced notice are no-ops.
        assert!(!notifier.reveal(first));
        assert!(!notifier.dismiss(first));
        assert!(!notifier.remove(first));
        assert_eq!(notifier.current().map(|n| n.id), Some(second));
    }

    #[test]
    fn full_lifecycle() {
        let mut notifier = Notifier::new();
        let id = notifier.present("hello", Severity::Info);
        assert!(!notifier.current().unwrap().on_screen());
        assert!(notifier.reveal(id));
        assert!(notifier.current().unwrap().on_screen());
        assert!(notifier.dismiss(id));
        assert_eq!(notifier.current().unwrap().phase, NoticePhase::Leaving);
        assert!(notifier.remove(id));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn close_then_auto_dismiss_is_idempotent() {
        let mut notifier = Notifier::new();
        let id = notifier.present("hello", Severity::Info);
        notifier.reveal(id);

        // Close button.
        assert!(notifier.dismiss(id));
        assert!(notifier.remove(id));

        // Auto-dismiss timer fires afterwards.
        assert!(!notifier.dismiss(id));
        assert!(!notifier.remove(id));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn dismiss_while_leaving_does_not_reschedule() {
        let mut notifier = Notifier::new();
        let id = notifier.present("hello", Severity::Info);
        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));
        // Reveal after dismissal must not bring it back on screen.
        assert!(!notifier.reveal(id));
    }

    #[test]
    fn severity_styles() {
        assert_eq!(Severity::Success.color(), "#10b981");
        assert_eq!(Severity::Error.color(), "#ef4444");
        assert_eq!(Severity::Info.color(), "#3b82f6");
        assert_eq!(Severity::default(), Severity::Info);
        assert!(Severity::Error.icon().ends_with("exclamation-circle"));
    }
}
