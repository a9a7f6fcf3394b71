//! Shared UI crate for the Ironline Construction site. Controllers, content and
//! views live here; platform crates only launch them.

pub mod content;
pub mod core;
pub mod features;
pub mod i18n;
pub mod site;
pub mod views;

mod hero;
pub use hero::Hero;

pub use site::{use_site, Site, SiteShell};
