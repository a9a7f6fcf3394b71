//! Interactive page features. Each pairs a pure `state` module (unit tested,
//! no DOM) with the Dioxus `view` that wires it to events and timers.

pub mod carousel;
pub mod contact;
pub mod effects;
pub mod filter;
pub mod language;
pub mod nav;
pub mod notify;
pub mod reveal;
