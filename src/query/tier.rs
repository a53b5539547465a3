//! Tier extraction.
//!
//! Tiers are resolved by a priority-ordered rule chain:
//!
//! 1. **band** - "high tier", "mid lvl", "low tier", "superships"
//! 2. **range** - "tier 7-10", "t5-8", "tier 3 to tier 6"
//! 3. **single** - "tier 8", "t8", "tier viii"
//!
//! The first rule producing any tier wins; later rules are not consulted.
//! So "high tier t3" resolves to 8..=11 and never includes 3.

use super::types::{push_unique, Tier};
use super::vocabulary::{
    band_pattern, roman_alternation, roman_to_number, RANGE_SEPARATOR, SUPERSHIP_PATTERN,
    SUPERSHIP_TIER, TIER_BANDS,
};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use tracing::trace;

/// A tier rule maps the lower-cased query to the tiers it recognizes
pub type TierRule = fn(&str) -> Vec<Tier>;

/// Rules in priority order
pub const TIER_RULES: &[(&str, TierRule)] = &[
    ("band", band_tiers),
    ("range", range_tiers),
    ("single", single_tiers),
];

static BAND_PATTERNS: LazyLock<Vec<(&'static str, Regex, RangeInclusive<u8>)>> =
    LazyLock::new(|| {
        let mut bands: Vec<_> = TIER_BANDS
            .iter()
            .map(|band| {
                let re = Regex::new(&band_pattern(band)).expect("band pattern is valid");
                (band.name, re, band.tiers.clone())
            })
            .collect();
        bands.push((
            "supership",
            Regex::new(SUPERSHIP_PATTERN).expect("supership pattern is valid"),
            SUPERSHIP_TIER..=SUPERSHIP_TIER,
        ));
        bands
    });

static RANGE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    let sep = RANGE_SEPARATOR;
    [
        Regex::new(&format!(r"tier\s*([0-9]+)\s*{sep}\s*([0-9]+)")),
        Regex::new(&format!(r"t([0-9]+)\s*{sep}\s*([0-9]+)")),
        Regex::new(&format!(r"tier\s*([0-9]+)\s*{sep}\s*tier\s*([0-9]+)")),
    ]
    .map(|re| re.expect("range pattern is valid"))
});

static SINGLE_NUMERIC_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [Regex::new(r"tier\s*([0-9]+)"), Regex::new(r"t([0-9]+)")]
        .map(|re| re.expect("single tier pattern is valid"))
});

static SINGLE_ROMAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"tier\s*({})\b", roman_alternation()))
        .expect("roman tier pattern is valid")
});

/// Run the rule chain over a lower-cased query
pub fn extract_tiers(query: &str) -> Vec<Tier> {
    for (name, rule) in TIER_RULES {
        let tiers = rule(query);
        if !tiers.is_empty() {
            trace!(rule = *name, ?tiers, "tier rule matched");
            return tiers;
        }
    }
    Vec::new()
}

/// Band keywords; the first band found decides
pub fn band_tiers(query: &str) -> Vec<Tier> {
    BAND_PATTERNS
        .iter()
        .find(|(_, re, _)| re.is_match(query))
        .map(|(_, _, tiers)| tiers.clone().filter_map(Tier::new).collect())
        .unwrap_or_default()
}

/// Explicit ranges; every valid range found is expanded and merged
pub fn range_tiers(query: &str) -> Vec<Tier> {
    let mut tiers = Vec::new();

    for re in RANGE_PATTERNS.iter() {
        for caps in re.captures_iter(query) {
            let start = Tier::from_digits(&caps[1]);
            let end = Tier::from_digits(&caps[2]);
            if let (Some(start), Some(end)) = (start, end) {
                for tier in Tier::span(start, end) {
                    push_unique(&mut tiers, tier);
                }
            }
        }
    }

    tiers
}

/// Single tier mentions, numeric forms before roman numerals
pub fn single_tiers(query: &str) -> Vec<Tier> {
    let mut tiers = Vec::new();

    for re in SINGLE_NUMERIC_PATTERNS.iter() {
        for caps in re.captures_iter(query) {
            if let Some(tier) = Tier::from_digits(&caps[1]) {
                push_unique(&mut tiers, tier);
            }
        }
    }

    for caps in SINGLE_ROMAN_PATTERN.captures_iter(query) {
        if let Some(tier) = roman_to_number(&caps[1]).and_then(Tier::new) {
            push_unique(&mut tiers, tier);
        }
    }

    tiers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tiers: Vec<Tier>) -> Vec<u8> {
        tiers.into_iter().map(Tier::value).collect()
    }

    #[test]
    fn test_high_band() {
        assert_eq!(values(extract_tiers("high tier")), vec![8, 9, 10, 11]);
        assert_eq!(values(extract_tiers("top tier ships")), vec![8, 9, 10, 11]);
        assert_eq!(values(extract_tiers("high lvl")), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_mid_band() {
        assert_eq!(values(extract_tiers("mid tier")), vec![5, 6, 7]);
        assert_eq!(values(extract_tiers("middle tier")), vec![5, 6, 7]);
        assert_eq!(values(extract_tiers("mid lvl dd")), vec![5, 6, 7]);
    }

    #[test]
    fn test_low_band() {
        assert_eq!(values(extract_tiers("low tier")), vec![1, 2, 3, 4]);
        assert_eq!(values(extract_tiers("bottom tier")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_band_without_space() {
        assert_eq!(values(extract_tiers("hightier")), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_supership() {
        assert_eq!(values(extract_tiers("superships")), vec![11]);
        assert_eq!(values(extract_tiers("super ship")), vec![11]);
        assert_eq!(values(extract_tiers("tier 11")), vec![11]);
    }

    #[test]
    fn test_band_checked_before_supership() {
        assert_eq!(values(extract_tiers("low tier supership")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_band_overrides_single() {
        assert_eq!(values(extract_tiers("high tier t3")), vec![8, 9, 10, 11]);
        assert_eq!(values(extract_tiers("high tier tier 3")), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_range_dash() {
        assert_eq!(values(extract_tiers("tier 7-10")), vec![7, 8, 9, 10]);
        assert_eq!(values(extract_tiers("tier 7 - 10")), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_range_dash_glyphs() {
        assert_eq!(values(extract_tiers("tier 5–6")), vec![5, 6]);
        assert_eq!(values(extract_tiers("tier 5—6")), vec![5, 6]);
    }

    #[test]
    fn test_range_short_form() {
        assert_eq!(values(extract_tiers("t5-8")), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_range_with_to() {
        assert_eq!(values(extract_tiers("tier 3 to 6")), vec![3, 4, 5, 6]);
        assert_eq!(values(extract_tiers("tier 3 to tier 6")), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        // Falls through to single-tier scanning
        assert_eq!(values(extract_tiers("tier 10-7")), vec![10]);
    }

    #[test]
    fn test_range_rejects_out_of_bounds() {
        assert!(range_tiers("tier 0-3").is_empty());
        assert!(range_tiers("tier 9-12").is_empty());
    }

    #[test]
    fn test_multiple_ranges_are_merged() {
        assert_eq!(values(extract_tiers("tier 5-6 or t6-8")), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_range_suppresses_single() {
        assert_eq!(values(extract_tiers("tier 2-3 tier 9")), vec![2, 3]);
    }

    #[test]
    fn test_single_tier() {
        assert_eq!(values(extract_tiers("tier 10")), vec![10]);
        assert_eq!(values(extract_tiers("tier10")), vec![10]);
        assert_eq!(values(extract_tiers("t8")), vec![8]);
    }

    #[test]
    fn test_single_tier_priority_order() {
        // "tier N" matches are collected before "tN" matches
        assert_eq!(values(extract_tiers("t9 tier 8")), vec![8, 9]);
    }

    #[test]
    fn test_single_tier_dedup() {
        assert_eq!(values(extract_tiers("tier 6 or t6")), vec![6]);
    }

    #[test]
    fn test_single_tier_out_of_range() {
        assert!(extract_tiers("tier 0").is_empty());
        assert!(extract_tiers("tier 15").is_empty());
        assert!(extract_tiers("t99999999999").is_empty());
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(values(extract_tiers("tier iv")), vec![4]);
        assert_eq!(values(extract_tiers("tier viii")), vec![8]);
        assert_eq!(values(extract_tiers("tier ix")), vec![9]);
        assert_eq!(values(extract_tiers("tier x")), vec![10]);
        assert_eq!(values(extract_tiers("tier i")), vec![1]);
    }

    #[test]
    fn test_roman_numeral_requires_tier_prefix() {
        assert!(extract_tiers("vii").is_empty());
        assert!(extract_tiers("king george v").is_empty());
    }

    #[test]
    fn test_roman_numeral_must_end_word() {
        assert!(extract_tiers("tier vanguard").is_empty());
    }

    #[test]
    fn test_no_tier() {
        assert!(extract_tiers("bismarck").is_empty());
        assert!(extract_tiers("").is_empty());
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<&str> = TIER_RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["band", "range", "single"]);
    }
}
