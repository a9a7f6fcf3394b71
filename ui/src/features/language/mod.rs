mod state;
pub use state::{AppliedText, LanguageSwitcher, Rendered};

mod view;
pub use view::{LanguageButtons, Localized};
