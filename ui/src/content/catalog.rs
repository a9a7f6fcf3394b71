use std::collections::{BTreeMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use super::settings::SiteSettings;

const CATALOG_FILE: &str = "site.json";

#[derive(Embed)]
#[folder = "content"]
struct SiteContent;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("embedded content file `{0}` is missing")]
    Missing(&'static str),
    #[error("content file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content catalog is invalid: {0}")]
    Invalid(String),
}

/// Site language code as written in the catalog (`en`, `al`, `mk`).
///
/// Not validated: switching to a code no element defines
/// changes nothing on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangCode(String);

impl LangCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LangCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Where a localized string lands on its element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTarget {
    /// `placeholder` attribute of an input or textarea.
    Placeholder,
    /// Plain text content of a button or link.
    Label,
    /// Rendered as markup.
    #[default]
    Markup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub id: String,
    #[serde(default)]
    pub target: TextTarget,
    pub variants: BTreeMap<LangCode, String>,
}

impl LocalizedText {
    pub fn variant(&self, lang: &LangCode) -> Option<&str> {
        self.variants
            .get(lang)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: LangCode,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub category: String,
    pub image: String,
    pub title: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialEntry {
    pub author: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub icon: String,
    pub title: String,
    pub value: String,
}

/// Everything the views render. Fields holding text (titles, bodies, labels)
/// are ids into `texts`; names, years, URLs and categories are literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCatalog {
    #[serde(default)]
    pub settings: SiteSettings,
    pub languages: Vec<LanguageOption>,
    pub texts: Vec<LocalizedText>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub filters: Vec<FilterOption>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub testimonials: Vec<TestimonialEntry>,
    #[serde(default)]
    pub contact: Vec<ContactItem>,
}

impl SiteCatalog {
    /// Load and validate the embedded catalog.
    pub fn load() -> Result<Self, ContentError> {
        let file = SiteContent::get(CATALOG_FILE).ok_or(ContentError::Missing(CATALOG_FILE))?;
        Self::from_json(&String::from_utf8_lossy(&file.data))
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.languages.is_empty() {
            return Err(ContentError::Invalid("no languages declared".into()));
        }

        let mut seen = HashSet::new();
        for text in &self.texts {
            if !seen.insert(text.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "text id `{}` is defined twice",
                    text.id
                )));
            }
        }

        let mut filters = HashSet::new();
        for filter in &self.filters {
            if !filters.insert(filter.value.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "filter `{}` is listed twice",
                    filter.value
                )));
            }
        }

        Ok(())
    }

    /// The language the page markup is authored in (first declared).
    pub fn default_language(&self) -> &LangCode {
        &self.languages[0].code
    }

    pub fn text(&self, id: &str) -> Option<&LocalizedText> {
        self.texts.iter().find(|text| text.id == id)
    }

    /// Every text id referenced from a structured section (services, projects...).
    pub fn referenced_text_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for service in &self.services {
            ids.extend([service.title.as_str(), service.body.as_str()]);
        }
        for entry in &self.timeline {
            ids.extend([entry.title.as_str(), entry.body.as_str()]);
        }
        for filter in &self.filters {
            ids.push(filter.label.as_str());
        }
        for project in &self.projects {
            ids.extend([project.title.as_str(), project.location.as_str()]);
        }
        for testimonial in &self.testimonials {
            ids.extend([testimonial.role.as_str(), testimonial.quote.as_str()]);
        }
        for item in &self.contact {
            ids.push(item.title.as_str());
        }
        ids
    }
}

static CATALOG: Lazy<Result<SiteCatalog, ContentError>> = Lazy::new(SiteCatalog::load);

/// Process-wide catalog, parsed on first access.
pub fn catalog() -> Result<&'static SiteCatalog, &'static ContentError> {
    CATALOG.as_ref()
}
