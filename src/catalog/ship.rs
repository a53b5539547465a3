use crate::query::{Category, SearchFilters};
use serde::{Deserialize, Serialize};

/// One ship as described by the encyclopedia data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub ship_id: u64,
    pub name: String,
    pub tier: u8,
    /// Ship class label, e.g. "Battleship" or "AirCarrier"
    #[serde(rename = "type")]
    pub ship_type: String,
    /// Nation code, e.g. "japan" or "pan_asia"
    pub nation: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_special: bool,
}

impl ShipRecord {
    /// Acquisition category; premium wins over special
    pub fn category(&self) -> Category {
        if self.is_premium {
            Category::Premium
        } else if self.is_special {
            Category::Special
        } else {
            Category::TechTree
        }
    }

    /// Check the ship against every non-empty filter set.
    ///
    /// `name_lower` is the lower-cased residual name; empty means any name.
    pub fn matches(&self, filters: &SearchFilters, name_lower: &str) -> bool {
        if !filters.tiers.is_empty() && !filters.tiers.iter().any(|t| t.value() == self.tier) {
            return false;
        }
        if !filters.types.is_empty()
            && !filters.types.iter().any(|t| t.as_str() == self.ship_type)
        {
            return false;
        }
        if !filters.nations.is_empty()
            && !filters.nations.iter().any(|n| n.as_str() == self.nation)
        {
            return false;
        }
        if !filters.categories.is_empty() && !filters.categories.contains(&self.category()) {
            return false;
        }
        name_lower.is_empty() || self.name.to_lowercase().contains(name_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn ship(name: &str, tier: u8, ship_type: &str, nation: &str) -> ShipRecord {
        ShipRecord {
            ship_id: 1,
            name: name.to_string(),
            tier,
            ship_type: ship_type.to_string(),
            nation: nation.to_string(),
            is_premium: false,
            is_special: false,
        }
    }

    #[test]
    fn test_category() {
        let mut s = ship("Atago", 8, "Cruiser", "japan");
        assert_eq!(s.category(), Category::TechTree);
        s.is_special = true;
        assert_eq!(s.category(), Category::Special);
        s.is_premium = true;
        assert_eq!(s.category(), Category::Premium);
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let s = ship("Atago", 8, "Cruiser", "japan");
        assert!(s.matches(&SearchFilters::default(), ""));
    }

    #[test]
    fn test_matches_all_sets() {
        let s = ship("Yamato", 10, "Battleship", "japan");
        let f = parse_query("high tier japanese battleship");
        assert!(s.matches(&f, &f.ship_name));

        let f = parse_query("german battleship");
        assert!(!s.matches(&f, &f.ship_name));

        let f = parse_query("tier 8 battleship");
        assert!(!s.matches(&f, &f.ship_name));
    }

    #[test]
    fn test_category_filter() {
        let mut s = ship("Atago", 8, "Cruiser", "japan");
        s.is_premium = true;
        assert!(s.matches(&parse_query("premium"), ""));
        assert!(!s.matches(&parse_query("silver"), ""));
    }

    #[test]
    fn test_name_substring_is_case_insensitive() {
        let s = ship("Des Moines", 10, "Cruiser", "usa");
        assert!(s.matches(&SearchFilters::default(), "moines"));
        assert!(!s.matches(&SearchFilters::default(), "worcester"));
    }

    #[test]
    fn test_deserialize_type_key() {
        let s: ShipRecord = serde_json::from_str(
            r#"{"ship_id":4179506160,"name":"Hood","tier":7,"type":"Battleship","nation":"uk"}"#,
        )
        .unwrap();
        assert_eq!(s.ship_type, "Battleship");
        assert!(!s.is_premium);
    }
}
