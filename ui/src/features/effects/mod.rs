mod state;
pub use state::{parallax_offset, scroll_progress, LoadingPhase};

mod view;
pub use view::{LoadingScreen, ScrollProgress};
