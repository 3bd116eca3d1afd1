//! Immutable adjacency rule sets: per tile and per direction, the set of
//! tile indices permitted to appear on that side.

/// Document parsing and validation for the on-disk rule format
pub mod document;
/// Core rule types: directions, rule maps, tile definitions, `Rules`
pub mod model;

pub use model::{Direction, RuleMap, Rules, TileDefinition, TileIndex, is_wildcard_set};
