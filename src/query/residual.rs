//! Residual ship name extraction.
//!
//! Removes every phrase the classification passes can recognize from the
//! lower-cased query; whatever is left is used as a name search term.
//! Removal runs in a fixed order (tiers, supership, types, nations,
//! categories) and then folds leftover separators into single spaces.

use super::vocabulary::{
    loose_alternation, nation_aliases, roman_alternation, BAND_NOUNS, CATEGORY_KEYWORDS,
    RANGE_SEPARATOR, TIER_BANDS, TYPE_ALIASES,
};
use regex::Regex;
use std::sync::LazyLock;

/// Punctuation that separates keywords and is dropped with them
const SEPARATORS: [char; 5] = [',', ';', '-', '–', '—'];

static STRIP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let number = format!("(?:[0-9]+|{})", roman_alternation());
    let sep = RANGE_SEPARATOR;
    let qualifiers = TIER_BANDS
        .iter()
        .flat_map(|band| band.qualifiers.iter().copied());
    let types = TYPE_ALIASES
        .iter()
        .flat_map(|(_, aliases)| aliases.iter().copied());
    let categories = CATEGORY_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied());

    let mut sources = vec![
        // Bands
        format!(
            r"\b{}\s*{}\b",
            loose_alternation(qualifiers),
            loose_alternation(BAND_NOUNS.iter().copied())
        ),
        // Ranges, most specific spelling first
        format!(r"\btier\s*{number}\s*{sep}\s*tier\s*{number}\b"),
        format!(r"\btier\s*{number}\s*{sep}\s*{number}\b"),
        format!(r"\bt[0-9]+\s*{sep}\s*[0-9]+\b"),
        // Single tiers
        format!(r"\btier\s*{number}\b"),
        r"\bt[0-9]+\b".to_string(),
        r"\bsuper\s*ships?\b".to_string(),
        // Plural forms are dropped along with the alias
        format!(r"\b{}s?\b", loose_alternation(types)),
    ];
    // Nations go one alias at a time, in table order
    sources.extend(
        nation_aliases().map(|alias| format!(r"\b{}\b", regex::escape(alias))),
    );
    sources.push(format!(r"\b{}\b", loose_alternation(categories)));

    sources
        .iter()
        .map(|source| Regex::new(source).expect("strip pattern is valid"))
        .collect()
});

/// Strip recognized keywords from a lower-cased query.
///
/// The result has single spaces between words and no surrounding
/// whitespace; it is empty when nothing but keywords was typed.
pub fn strip_keywords(query: &str) -> String {
    let mut cleaned = query.to_string();
    for re in STRIP_PATTERNS.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }

    cleaned
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
