//! # shipsearch - free-text ship catalog search
//!
//! shipsearch turns what a player types into a search box ("high tier
//! battleships", "Japanese cruiser premium", "t8 atago") into structured
//! filters, and narrows a ship catalog with them.
//!
//! ## Architecture
//!
//! - [`query`] - Rule-based query interpretation into [`query::SearchFilters`]
//! - [`catalog`] - Ship records loaded from JSON and narrowed by filters
//! - [`output`] - Terminal formatting for filters, ships and facets
//! - [`utils`] - Configuration in the per-user app data directory
//!
//! ## Quick Start
//!
//! ```
//! use shipsearch::query::{parse_query, Nation, ShipType};
//!
//! let filters = parse_query("Japanese cruiser");
//! assert_eq!(filters.nations, vec![Nation::Japan]);
//! assert_eq!(filters.types, vec![ShipType::Cruiser]);
//! assert!(filters.ship_name.is_empty());
//!
//! // Nothing recognized: the query is a ship name, case preserved
//! assert_eq!(parse_query("Bismarck").ship_name, "Bismarck");
//! ```
//!
//! Interpretation is pure and deterministic. Keyword tables and compiled
//! patterns are process-wide statics built on first use, so `parse_query`
//! can be called from any number of threads.

pub mod catalog;
pub mod output;
pub mod query;
pub mod utils;
