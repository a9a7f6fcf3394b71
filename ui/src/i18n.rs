//! Fluent bundles for the site's fixed UI strings.
//!
//! Marketing copy lives in the content catalog (`content/site.json`); this
//! module only covers the chrome around it: notification texts, the pending
//! submit label, aria labels and the not-found page. Bundles are embedded from
//! `i18n/<locale>/ironline-ui.ftl`; `en-US` is the fallback and the reference
//! for the other locales.
//!
//! The site's own language codes (`en`, `al`, `mk`) are mapped to Fluent locales
//! by [`locale_for`]. Codes without a bundle leave the current selection alone.
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::content::LangCode;

pub use i18n_embed_fl::fl;

/// Look up a chrome string through the shared loader: `t!("contact-sending")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

/// Bundle file stem: `i18n/<locale>/ironline-ui.ftl`.
const DOMAIN: &str = "ironline-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Site language codes paired with the Fluent locale that backs them.
const SITE_LOCALES: [(&str, &str); 3] = [("en", "en-US"), ("al", "sq-AL"), ("mk", "mk-MK")];

/// Load the bundles matching the visitor's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested_languages()) {
            tracing::warn!("falling back to en-US strings: {err}");
        }
    });
}

pub fn locale_for(code: &LangCode) -> Option<LanguageIdentifier> {
    SITE_LOCALES
        .iter()
        .find(|(site, _)| *site == code.as_str())
        .and_then(|(_, tag)| tag.parse().ok())
}

/// Point the loader at the bundle for `code`. Returns `false`, leaving the
/// selection untouched, when the code has no bundle.
pub fn set_site_language(code: &LangCode) -> Result<bool, I18nEmbedError> {
    let Some(locale) = locale_for(code) else {
        return Ok(false);
    };
    let chosen = i18n_embed::select(&*LOADER, &Localizations, &[locale])?;
    tracing::debug!(%code, ?chosen, "fluent bundle selected");
    Ok(true)
}

/// Locales that ship an embedded bundle.
pub fn bundled_locales() -> BTreeSet<String> {
    Localizations::iter()
        .filter_map(|path| path.split_once('/').map(|(dir, _)| dir.to_string()))
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
