//! Every bundle must define exactly the message ids of the en-US fallback, once each.
//!
//! Adding a locale: create `ui/i18n/<locale>/ironline-ui.ftl` with every en-US id,
//! list it in `BUNDLES`, and map a site language code to it in `i18n.rs`.

use std::collections::{BTreeMap, BTreeSet};

const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/ironline-ui.ftl"));

const BUNDLES: &[(&str, &str)] = &[
    ("sq-AL", include_str!("../i18n/sq-AL/ironline-ui.ftl")),
    ("mk-MK", include_str!("../i18n/mk-MK/ironline-ui.ftl")),
];

/// Message id defined on this line, if any. Comments, attributes (`.attr`),
/// terms (`-term`) and continuation lines yield nothing.
fn message_id(line: &str) -> Option<&str> {
    if line.starts_with([' ', '\t', '#', '.', '-']) {
        return None;
    }
    let (id, _) = line.split_once('=')?;
    let id = id.trim();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(id)
}

/// Id → number of definitions.
fn definitions(src: &str) -> BTreeMap<&str, usize> {
    let mut ids = BTreeMap::new();
    for id in src.lines().filter_map(message_id) {
        *ids.entry(id).or_insert(0) += 1;
    }
    ids
}

#[test]
fn fallback_bundle_is_not_empty() {
    assert!(
        definitions(FALLBACK.1).len() >= 10,
        "en-US bundle looks truncated"
    );
}

#[test]
fn bundles_match_fallback_ids() {
    let expected: BTreeSet<&str> = definitions(FALLBACK.1).into_keys().collect();
    let mut report = Vec::new();

    for (locale, src) in BUNDLES {
        let ids: BTreeSet<&str> = definitions(src).into_keys().collect();
        let missing: Vec<_> = expected.difference(&ids).copied().collect();
        let unknown: Vec<_> = ids.difference(&expected).copied().collect();
        if !missing.is_empty() {
            report.push(format!("{locale} missing: {}", missing.join(", ")));
        }
        if !unknown.is_empty() {
            report.push(format!("{locale} unknown to en-US: {}", unknown.join(", ")));
        }
    }

    assert!(report.is_empty(), "bundle ids drifted:\n{}", report.join("\n"));
}

#[test]
fn no_bundle_defines_an_id_twice() {
    let duplicated: Vec<String> = std::iter::once(&FALLBACK)
        .chain(BUNDLES)
        .flat_map(|(locale, src)| {
            definitions(src)
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(move |(id, count)| format!("{locale}: {id} x{count}"))
        })
        .collect();

    assert!(duplicated.is_empty(), "duplicate ids:\n{}", duplicated.join("\n"));
}

#[test]
fn parser_skips_non_messages() {
    assert_eq!(message_id("notify-sent = Sent"), Some("notify-sent"));
    assert_eq!(message_id("# notify-sent = Sent"), None);
    assert_eq!(message_id("    .aria-label = Close"), None);
    assert_eq!(message_id("-brand = Ironline"), None);
    assert_eq!(message_id("continued text"), None);
}
