use super::ShipRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct filter values present in a catalog, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub nations: Vec<String>,
    pub tiers: Vec<u8>,
    pub types: Vec<String>,
}

impl Facets {
    pub fn collect(ships: &[ShipRecord]) -> Self {
        let nations: BTreeSet<&str> = ships.iter().map(|s| s.nation.as_str()).collect();
        let tiers: BTreeSet<u8> = ships.iter().map(|s| s.tier).collect();
        let types: BTreeSet<&str> = ships.iter().map(|s| s.ship_type.as_str()).collect();

        Self {
            nations: nations.into_iter().map(String::from).collect(),
            tiers: tiers.into_iter().collect(),
            types: types.into_iter().map(String::from).collect(),
        }
    }
}
