mod state;
pub use state::{Notice, NoticePhase, NoticeSink, Notifier, Severity};

mod view;
pub use view::{use_notifications, NotificationToast, Notifications};
