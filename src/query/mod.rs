//! Free-text query interpretation.
//!
//! [`parse_query`] turns a phrase such as "high tier japanese cruiser" into
//! [`SearchFilters`] by running independent keyword passes:
//!
//! - [`tier`] - band / range / single tier rule chain
//! - [`parser`] - type, nation and category passes plus orchestration
//! - [`residual`] - strips recognized keywords to leave a name term
//! - [`vocabulary`] - the keyword tables all passes share

pub mod parser;
pub mod residual;
pub mod tier;
pub mod types;
pub mod vocabulary;

pub use parser::parse_query;
pub use types::{Category, Nation, SearchFilters, ShipType, Tier};
