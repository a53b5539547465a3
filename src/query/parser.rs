use super::residual::strip_keywords;
use super::tier::extract_tiers;
use super::types::{push_unique, Category, Nation, SearchFilters, ShipType};
use super::vocabulary::{loose_alternation, CATEGORY_KEYWORDS, NATION_ALIASES, TYPE_ALIASES};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Type aliases are plain substring tests, not word bounded
static TYPE_PATTERNS: LazyLock<Vec<(ShipType, Regex)>> = LazyLock::new(|| {
    TYPE_ALIASES
        .iter()
        .map(|(ship_type, aliases)| {
            let re = Regex::new(&loose_alternation(aliases.iter().copied()))
                .expect("type pattern is valid");
            (*ship_type, re)
        })
        .collect()
});

/// One word-bounded pattern per nation alias, in table order
static NATION_PATTERNS: LazyLock<Vec<(Nation, Vec<Regex>)>> = LazyLock::new(|| {
    NATION_ALIASES
        .iter()
        .map(|(nation, aliases)| {
            let patterns = aliases
                .iter()
                .map(|alias| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(alias)))
                        .expect("nation pattern is valid")
                })
                .collect();
            (*nation, patterns)
        })
        .collect()
});

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| {
            let re = Regex::new(&format!(
                r"\b{}\b",
                loose_alternation(keywords.iter().copied())
            ))
            .expect("category pattern is valid");
            (*category, re)
        })
        .collect()
});

/// Parse a free-text search phrase into structured filters.
///
/// Never fails: every input, including an empty one, yields a valid
/// (possibly empty) [`SearchFilters`].
pub fn parse_query(input: &str) -> SearchFilters {
    QueryInterpreter::new(input).interpret()
}

/// Query interpreter
struct QueryInterpreter<'a> {
    /// Trimmed input with its original case
    original: &'a str,
    /// Trimmed, lower-cased input every pass runs over
    lowered: String,
}

impl<'a> QueryInterpreter<'a> {
    fn new(input: &'a str) -> Self {
        let original = input.trim();
        Self {
            original,
            lowered: original.to_lowercase(),
        }
    }

    fn interpret(&self) -> SearchFilters {
        let mut filters = SearchFilters::default();
        if self.lowered.is_empty() {
            return filters;
        }

        filters.tiers = extract_tiers(&self.lowered);
        filters.types = extract_types(&self.lowered);
        filters.nations = extract_nations(&self.lowered);
        filters.categories = extract_categories(&self.lowered);

        // Nothing recognized: the whole query is a name, case preserved
        filters.ship_name = if filters.has_classification() {
            strip_keywords(&self.lowered)
        } else {
            self.original.to_string()
        };

        debug!(query = self.original, ?filters, "parsed search query");
        filters
    }
}

/// Ship classes mentioned anywhere in the query
pub fn extract_types(query: &str) -> Vec<ShipType> {
    TYPE_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(query))
        .map(|(ship_type, _)| *ship_type)
        .collect()
}

/// Nations whose aliases appear as whole words
pub fn extract_nations(query: &str) -> Vec<Nation> {
    let mut nations = Vec::new();
    for (nation, patterns) in NATION_PATTERNS.iter() {
        if patterns.iter().any(|re| re.is_match(query)) {
            push_unique(&mut nations, *nation);
        }
    }
    nations
}

/// Acquisition categories mentioned as whole words
pub fn extract_categories(query: &str) -> Vec<Category> {
    CATEGORY_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(query))
        .map(|(category, _)| *category)
        .collect()
}
