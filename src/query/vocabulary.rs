//! Keyword tables shared by the matching and stripping passes.
//!
//! Each table is ordered: matching walks it front to back, and the residual
//! name pass removes exactly the phrases listed here. Keep additions in one
//! place so both passes stay in sync.

use super::types::{Category, Nation, ShipType};
use std::ops::RangeInclusive;

/// A tier band keyword such as "high tier" or "low lvl"
#[derive(Debug)]
pub struct TierBand {
    pub name: &'static str,
    /// Leading words; any of them followed by a [`BAND_NOUNS`] word
    pub qualifiers: &'static [&'static str],
    pub tiers: RangeInclusive<u8>,
}

/// Words that close a band phrase
pub const BAND_NOUNS: &[&str] = &["tier", "lvl"];

pub const TIER_BANDS: &[TierBand] = &[
    TierBand {
        name: "high",
        qualifiers: &["high", "top"],
        tiers: 8..=11,
    },
    TierBand {
        name: "mid",
        qualifiers: &["middle", "mid"],
        tiers: 5..=7,
    },
    TierBand {
        name: "low",
        qualifiers: &["bottom", "low"],
        tiers: 1..=4,
    },
];

/// Supership mentions; checked after the bands
pub const SUPERSHIP_PATTERN: &str = r"super\s*ship|tier\s*11";
pub const SUPERSHIP_TIER: u8 = 11;

/// Separators accepted between the two ends of a tier range
pub const RANGE_SEPARATOR: &str = r"(?:-|–|—|to)";

/// Roman numerals usable after "tier", longest spellings first so an
/// alternation built from this table never stops at a prefix
pub const ROMAN_NUMERALS: &[(&str, u8)] = &[
    ("viii", 8),
    ("vii", 7),
    ("iii", 3),
    ("ix", 9),
    ("iv", 4),
    ("vi", 6),
    ("ii", 2),
    ("i", 1),
    ("v", 5),
    ("x", 10),
];

pub const TYPE_ALIASES: &[(ShipType, &[&str])] = &[
    (ShipType::Battleship, &["battleship", "battle ship", "bb"]),
    (ShipType::Cruiser, &["cruiser", "ca", "cl"]),
    (ShipType::Destroyer, &["destroyer", "dd"]),
    (ShipType::AirCarrier, &["carrier", "aircraft carrier", "cv"]),
    (ShipType::Submarine, &["submarine", "sub", "ss"]),
];

pub const NATION_ALIASES: &[(Nation, &[&str])] = &[
    (Nation::Japan, &["japan", "japanese", "jpn", "ijn"]),
    (Nation::Usa, &["usa", "american", "america", "us", "usn"]),
    (Nation::Ussr, &["ussr", "soviet", "russian", "russia", "vmf"]),
    (Nation::Germany, &["germany", "german", "kriegsmarine"]),
    (Nation::Uk, &["uk", "british", "britain", "royal navy", "rn"]),
    (Nation::France, &["france", "french"]),
    (Nation::PanAsia, &["pan asia", "pan-asia", "panasia", "asian"]),
    (Nation::Italy, &["italy", "italian", "regia marina"]),
    (Nation::Commonwealth, &["commonwealth"]),
    (Nation::PanAmerica, &["pan america", "pan-america", "panamerica"]),
    (Nation::Europe, &["europe", "european"]),
    (Nation::Netherlands, &["netherlands", "dutch"]),
    (Nation::Spain, &["spain", "spanish"]),
    (Nation::Portugal, &["portugal", "portuguese"]),
];

pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Premium, &["premium"]),
    (Category::Special, &["special", "promo", "event", "reward"]),
    (
        Category::TechTree,
        &["tech tree", "standard", "regular", "researchable", "silver"],
    ),
];

/// Convert a lower-case roman numeral (I..X) to its value
pub fn roman_to_number(roman: &str) -> Option<u8> {
    ROMAN_NUMERALS
        .iter()
        .find(|(numeral, _)| *numeral == roman)
        .map(|(_, value)| *value)
}

/// Alternation of every roman numeral in [`ROMAN_NUMERALS`]
pub fn roman_alternation() -> String {
    ROMAN_NUMERALS
        .iter()
        .map(|(numeral, _)| *numeral)
        .collect::<Vec<_>>()
        .join("|")
}

/// Regex source for a keyword whose words may be separated by any amount of
/// whitespace, including none ("battle ship", "battleship")
pub fn loose_phrase(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s*")
}

/// Non-capturing alternation of loose phrases
pub fn loose_alternation<'a>(phrases: impl IntoIterator<Item = &'a str>) -> String {
    let parts: Vec<String> = phrases.into_iter().map(loose_phrase).collect();
    format!("(?:{})", parts.join("|"))
}

/// Regex source for one band, e.g. `(?:high|top)\s*(?:tier|lvl)`
pub fn band_pattern(band: &TierBand) -> String {
    format!(
        r"{}\s*{}",
        loose_alternation(band.qualifiers.iter().copied()),
        loose_alternation(BAND_NOUNS.iter().copied())
    )
}

/// Every alias of every nation in table order
pub fn nation_aliases() -> impl Iterator<Item = &'static str> {
    NATION_ALIASES
        .iter()
        .flat_map(|(_, aliases)| aliases.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_nation_table_covers_all_codes() {
        assert_eq!(NATION_ALIASES.len(), 14);
        for (nation, aliases) in NATION_ALIASES {
            assert!(!aliases.is_empty(), "{nation} has no aliases");
        }
    }

    #[test]
    fn test_roman_to_number() {
        assert_eq!(roman_to_number("i"), Some(1));
        assert_eq!(roman_to_number("iv"), Some(4));
        assert_eq!(roman_to_number("viii"), Some(8));
        assert_eq!(roman_to_number("x"), Some(10));
        assert_eq!(roman_to_number("xi"), None);
        assert_eq!(roman_to_number(""), None);
    }

    #[test]
    fn test_roman_table_is_longest_first() {
        // No numeral may appear after a longer numeral that it prefixes
        for (i, (later, _)) in ROMAN_NUMERALS.iter().enumerate() {
            for (earlier, _) in &ROMAN_NUMERALS[..i] {
                assert!(!later.starts_with(earlier), "{earlier} shadows {later}");
            }
        }
    }

    #[test]
    fn test_loose_phrase() {
        let re = Regex::new(&loose_phrase("battle ship")).unwrap();
        assert!(re.is_match("battle ship"));
        assert!(re.is_match("battleship"));
        assert!(re.is_match("battle   ship"));
        assert!(!re.is_match("battle-ship"));
    }

    #[test]
    fn test_loose_phrase_escapes() {
        let re = Regex::new(&loose_phrase("pan-asia")).unwrap();
        assert!(re.is_match("pan-asia"));
        let re = Regex::new(&loose_phrase("a.b")).unwrap();
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn test_band_pattern() {
        let re = Regex::new(&band_pattern(&TIER_BANDS[0])).unwrap();
        assert!(re.is_match("high tier"));
        assert!(re.is_match("top lvl"));
        assert!(re.is_match("hightier"));
        assert!(!re.is_match("mid tier"));
    }
}
