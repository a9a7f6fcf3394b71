//! Typed site content: every localized string, project, testimonial and timing
//! the views need, loaded once from the embedded `content/site.json`.

mod catalog;
mod settings;

pub use catalog::{
    catalog, ContactItem, ContentError, FilterOption, LangCode, LanguageOption, LocalizedText,
    ProjectEntry, ServiceEntry, SiteCatalog, TestimonialEntry, TextTarget, TimelineEntry,
};
pub use settings::SiteSettings;
