mod state;
pub use state::{anchor_scroll_top, NavState};

mod view;
pub(crate) use view::scroll_to_section;
pub use view::Navbar;
