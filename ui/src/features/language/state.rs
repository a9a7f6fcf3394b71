//! Active-language bookkeeping for the text catalog.

use std::collections::HashMap;

use crate::content::{LangCode, SiteCatalog, TextTarget};

/// Text currently shown by one localized element.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedText {
    pub target: TextTarget,
    pub text: String,
}

/// What a view puts on the page for one localized element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Inner HTML of the element.
    Markup(String),
    /// Escaped text content.
    Text(String),
    /// Value of a `placeholder` attribute; the element body stays empty.
    Placeholder(String),
    /// The element never received a variant.
    Missing,
}

/// Holds the current language and the text each localized element displays.
///
/// Switching only overwrites elements that define a variant for the requested
/// code; everything else keeps showing what it showed before.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSwitcher {
    current: LangCode,
    applied: HashMap<String, AppliedText>,
}

impl LanguageSwitcher {
    /// Start out showing the catalog's default language.
    pub fn new(catalog: &SiteCatalog) -> Self {
        let current = catalog.default_language().clone();
        let mut switcher = Self {
            current: current.clone(),
            applied: HashMap::new(),
        };
        switcher.switch(&current, catalog);
        switcher
    }

    pub fn current(&self) -> &LangCode {
        &self.current
    }

    /// Whether the language button for `code` carries the active flag.
    pub fn is_active(&self, code: &LangCode) -> bool {
        &self.current == code
    }

    /// Apply `code` to every element that has a variant for it. Returns the
    /// number of elements whose text was replaced.
    pub fn switch(&mut self, code: &LangCode, catalog: &SiteCatalog) -> usize {
        self.current = code.clone();
        let mut updated = 0;
        for entry in &catalog.texts {
            let Some(text) = entry.variant(code) else {
                continue;
            };
            self.applied.insert(
                entry.id.clone(),
                AppliedText {
                    target: entry.target,
                    text: text.to_string(),
                },
            );
            updated += 1;
        }
        updated
    }

    /// How the element `id` should be filled, following its text target.
    pub fn rendered(&self, id: &str) -> Rendered {
        let Some(applied) = self.applied.get(id) else {
            return Rendered::Missing;
        };
        let text = applied.text.clone();
        match applied.target {
            TextTarget::Markup => Rendered::Markup(text),
            TextTarget::Label => Rendered::Text(text),
            TextTarget::Placeholder => Rendered::Placeholder(text),
        }
    }

    /// Displayed text for `id`, empty when the element never received one.
    pub fn text(&self, id: &str) -> String {
        self.applied
            .get(id)
            .map(|applied| applied.text.clone())
            .unwrap_or_default()
    }
}
