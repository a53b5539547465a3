//! Filter labels produced by the query interpreter.
//!
//! Every label has a stable string form (`as_str`) which is also its JSON
//! representation, so a serialized [`SearchFilters`] reads exactly like the
//! catalog values it is matched against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest tier in the progression
pub const MIN_TIER: u8 = 1;
/// Highest tier; reserved for superships
pub const MAX_TIER: u8 = 11;

/// A ship tier in `MIN_TIER..=MAX_TIER`.
///
/// Serialized as a string label (`"8"`), not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tier(u8);

impl Tier {
    /// Create a tier, rejecting values outside the progression
    pub fn new(value: u8) -> Option<Self> {
        (MIN_TIER..=MAX_TIER).contains(&value).then_some(Self(value))
    }

    /// Parse a run of ASCII digits. Leading zeros are accepted and overflow
    /// is treated as out of range.
    pub fn from_digits(digits: &str) -> Option<Self> {
        digits.parse::<u8>().ok().and_then(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All tiers in `start..=end`; empty if the bounds are reversed
    pub fn span(start: Tier, end: Tier) -> impl Iterator<Item = Tier> {
        (start.0..=end.0).map(Tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        tier.to_string()
    }
}

impl TryFrom<String> for Tier {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Tier::from_digits(&label).ok_or_else(|| format!("invalid tier label: {label}"))
    }
}

/// Ship class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    Battleship,
    Cruiser,
    Destroyer,
    AirCarrier,
    Submarine,
}

impl ShipType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Destroyer => "Destroyer",
            ShipType::AirCarrier => "AirCarrier",
            ShipType::Submarine => "Submarine",
        }
    }
}

/// Nation of origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nation {
    Japan,
    Usa,
    Ussr,
    Germany,
    Uk,
    France,
    PanAsia,
    Italy,
    Commonwealth,
    PanAmerica,
    Europe,
    Netherlands,
    Spain,
    Portugal,
}

impl Nation {
    pub fn as_str(self) -> &'static str {
        match self {
            Nation::Japan => "japan",
            Nation::Usa => "usa",
            Nation::Ussr => "ussr",
            Nation::Germany => "germany",
            Nation::Uk => "uk",
            Nation::France => "france",
            Nation::PanAsia => "pan_asia",
            Nation::Italy => "italy",
            Nation::Commonwealth => "commonwealth",
            Nation::PanAmerica => "pan_america",
            Nation::Europe => "europe",
            Nation::Netherlands => "netherlands",
            Nation::Spain => "spain",
            Nation::Portugal => "portugal",
        }
    }
}

/// How a ship is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Bought with real currency
    Premium,
    /// Event, promo or reward ship
    Special,
    /// Researched along a standard line
    TechTree,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Premium => "premium",
            Category::Special => "special",
            Category::TechTree => "tech_tree",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(ShipType, Nation, Category);

/// Structured filters extracted from a free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Tier labels, first appearance order
    pub tiers: Vec<Tier>,
    pub types: Vec<ShipType>,
    pub nations: Vec<Nation>,
    pub categories: Vec<Category>,
    /// Residual name search term.
    ///
    /// When no classification matched this is the trimmed query with its
    /// original case; otherwise it is the lower-cased leftover after all
    /// recognized keywords were removed, and may be empty.
    pub ship_name: String,
}

impl SearchFilters {
    /// Check if any tier, type, nation or category was recognized
    pub fn has_classification(&self) -> bool {
        !self.tiers.is_empty()
            || !self.types.is_empty()
            || !self.nations.is_empty()
            || !self.categories.is_empty()
    }

    /// Check if the filters constrain nothing at all
    pub fn is_empty(&self) -> bool {
        !self.has_classification() && self.ship_name.is_empty()
    }
}

/// Append `item` unless it is already present, keeping first-seen order
pub(crate) fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}
