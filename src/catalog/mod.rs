//! Ship catalog narrowed by parsed search filters.
//!
//! The catalog is read from a JSON file holding either a list of ship
//! records or the encyclopedia layout (an object keyed by ship id, with
//! `null` for ships the API no longer knows about).

pub mod facets;
pub mod ship;

pub use facets::Facets;
pub use ship::ShipRecord;

use crate::query::SearchFilters;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Accepted catalog file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Option<ShipRecord>>),
    Keyed(BTreeMap<String, Option<ShipRecord>>),
}

/// In-memory ship catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ships: Vec<ShipRecord>,
}

impl Catalog {
    pub fn new(ships: Vec<ShipRecord>) -> Self {
        Self { ships }
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        debug!(path = %path.display(), ships = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text, skipping null entries
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        let ships = match file {
            CatalogFile::List(ships) => ships.into_iter().flatten().collect(),
            CatalogFile::Keyed(ships) => ships.into_values().flatten().collect(),
        };
        Ok(Self { ships })
    }

    pub fn ships(&self) -> &[ShipRecord] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ships passing every filter, ordered by tier then name
    pub fn narrow(&self, filters: &SearchFilters) -> Vec<&ShipRecord> {
        let name_lower = filters.ship_name.to_lowercase();

        let mut ships: Vec<&ShipRecord> = self
            .ships
            .par_iter()
            .filter(|ship| ship.matches(filters, &name_lower))
            .collect();

        ships.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(&b.name)));
        debug!(matched = ships.len(), total = self.ships.len(), "narrowed catalog");
        ships
    }

    /// Distinct nations, tiers and types present in the catalog
    pub fn facets(&self) -> Facets {
        Facets::collect(&self.ships)
    }
}
