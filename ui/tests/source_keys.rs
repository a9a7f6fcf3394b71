//! Guards the string ids used in Rust sources against typos:
//! - every `t!("...")` key exists in the fallback Fluent bundle
//! - every `.text("...")` / `Localized { id: "..." }` id exists in the content catalog
//! - every id referenced from structured catalog sections exists too
//!
//! Only direct literal arguments are recognised; ids built at runtime (e.g. from
//! catalog entries) are covered by the structured-section check instead.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ui::content::{catalog, LangCode};
use ui::features::language::{LanguageSwitcher, Rendered};

const FALLBACK_FTL: &str = include_str!("../i18n/en-US/ironline-ui.ftl");

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Literal first arguments of every `needle"` occurrence, e.g. `t!("` or `.text("`.
fn literal_args(content: &str, needle: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut rest = content;
    while let Some(pos) = rest.find(needle) {
        rest = &rest[pos + needle.len()..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
        }
    }
    found
}

fn scan_sources(needle: &str) -> BTreeSet<String> {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    rust_sources(&src_root)
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        // Unit-test modules use throwaway fixtures, not real ids.
        .flat_map(|content| {
            let production = content.split("#[cfg(test)]").next().unwrap_or_default();
            literal_args(production, needle)
        })
        .collect()
}

fn fallback_keys() -> BTreeSet<String> {
    FALLBACK_FTL
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim().to_string()))
        .collect()
}

#[test]
fn translation_keys_exist_in_fallback() {
    let referenced = scan_sources("t!(\"");
    assert!(!referenced.is_empty(), "no t!() calls found - scanner broken?");

    let known = fallback_keys();
    let missing: Vec<_> = referenced.difference(&known).cloned().collect();
    assert!(
        missing.is_empty(),
        "t!() keys missing from en-US/ironline-ui.ftl:\n  {}",
        missing.join("\n  ")
    );

    let unused: Vec<_> = known.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("NOTE: fallback keys not referenced from src: {}", unused.join(", "));
    }
}

#[test]
fn catalog_ids_used_in_source_exist() {
    let catalog = catalog().expect("embedded catalog loads");
    let mut referenced = scan_sources(".text(\"");
    referenced.extend(scan_sources("Localized { id: \""));
    assert!(
        referenced.contains("hero-title"),
        "Localized ids not found - scanner broken?"
    );

    let missing: Vec<_> = referenced
        .iter()
        .filter(|id| catalog.text(id).is_none())
        .cloned()
        .collect();
    assert!(
        missing.is_empty(),
        "text ids missing from content/site.json:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn structured_sections_reference_known_texts() {
    let catalog = catalog().expect("embedded catalog loads");
    let missing: Vec<_> = catalog
        .referenced_text_ids()
        .into_iter()
        .filter(|id| catalog.text(id).is_none())
        .collect();
    assert!(missing.is_empty(), "dangling text ids: {missing:?}");
}

#[test]
fn every_text_has_a_default_language_variant() {
    let catalog = catalog().expect("embedded catalog loads");
    let default = catalog.default_language();
    let missing: Vec<_> = catalog
        .texts
        .iter()
        .filter(|text| text.variant(default).is_none())
        .map(|text| text.id.as_str())
        .collect();
    assert!(missing.is_empty(), "no {default} text for: {missing:?}");
}

#[test]
fn project_categories_have_filters() {
    let catalog = catalog().expect("embedded catalog loads");
    for project in &catalog.projects {
        assert!(
            catalog.filters.iter().any(|f| f.value == project.category),
            "project {} uses unfiltered category {}",
            project.id,
            project.category
        );
    }
    assert!(catalog.languages.iter().any(|l| l.code == LangCode::from("mk")));
}

#[test]
fn form_fields_use_placeholder_texts() {
    let catalog = catalog().expect("embedded catalog loads");
    let switcher = LanguageSwitcher::new(catalog);
    for id in ["form-name", "form-email", "form-phone", "form-message"] {
        assert!(
            matches!(switcher.rendered(id), Rendered::Placeholder(_)),
            "{id} should target a placeholder"
        );
    }
    // Highlighted titles carry markup and must not be escaped.
    assert!(matches!(
        switcher.rendered("hero-title"),
        Rendered::Markup(html) if html.contains("<span>")
    ));
    assert!(matches!(switcher.rendered("form-submit"), Rendered::Text(_)));
}
