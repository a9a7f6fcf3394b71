mod state;
pub use state::{intersection_ratio, stagger_delay_ms, ElementBox, RevealKind, RevealState};

mod view;
pub use view::Reveal;
