mod state;
pub use state::{ItemPhase, ProjectFilter, Transition, ALL};

mod view;
pub use view::Projects;
