//! Core adjacency rule types: directions, per-tile rule maps, tile
//! definitions, and the immutable `Rules` value they compose into.

use std::collections::{HashMap, HashSet};

use crate::io::error::{AlgorithmError, Result};

/// A 1-based tile index. `0` is reserved as the wildcard marker inside a
/// direction's allowed set and never names an actual tile.
pub type TileIndex = u32;

/// One of the four cardinal neighbor directions a rule may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing y
    Up,
    /// Increasing y
    Down,
    /// Decreasing x
    Left,
    /// Increasing x
    Right,
}

impl Direction {
    /// Canonical iteration order used by propagation, fixed for reproducibility.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(dx, dy)` offset to reach the neighbor in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The allowed-set mapping stored on a single `TileDefinition`.
///
/// A rule document may key a tile's rules with `"*"` instead of spelling out
/// all four directions; that shape is preserved here rather than expanded at
/// load time, matching the on-disk document exactly. Expansion into four
/// per-direction entries happens at rule-lookup time via [`expand`].
///
/// [`expand`]: RuleMap::expand
#[derive(Debug, Clone)]
pub enum RuleMap {
    /// One allowed-set per direction. A direction absent from the map means
    /// no constraint is imposed in that direction by this tile.
    PerDirection(HashMap<Direction, HashSet<TileIndex>>),
    /// The same allowed-set applies in all four directions.
    Wildcard(HashSet<TileIndex>),
}

impl RuleMap {
    /// Expand into a concrete per-direction mapping. Wildcard-tagged maps
    /// expand to identical entries for all four directions; per-direction
    /// maps pass through unchanged.
    #[must_use]
    pub fn expand(&self) -> HashMap<Direction, HashSet<TileIndex>> {
        match self {
            Self::PerDirection(map) => map.clone(),
            Self::Wildcard(set) => Direction::ALL.into_iter().map(|d| (d, set.clone())).collect(),
        }
    }
}

/// Whether a direction's allowed-set is the wildcard sentinel `{0}`, meaning
/// "any tile is allowed in that direction".
#[must_use]
pub fn is_wildcard_set(allowed: &HashSet<TileIndex>) -> bool {
    allowed.len() == 1 && allowed.contains(&0)
}

/// A single tile's identity plus its adjacency constraints.
#[derive(Debug, Clone)]
pub struct TileDefinition {
    /// Human-readable tile name
    pub name: String,
    /// 1-based tile index
    pub index: TileIndex,
    /// Adjacency constraints, possibly still wildcard-shaped
    pub rules: RuleMap,
}

/// An immutable adjacency rule set loaded from a document or inferred from
/// tile pixel edges.
#[derive(Debug, Clone)]
pub struct Rules {
    /// Display name of the rule set
    pub name: String,
    /// Author attribution
    pub author: String,
    /// Name of the tileset image this rule set was built for
    pub file_name: String,
    /// Width of a single tile, in pixels
    pub tile_width: u32,
    /// Height of a single tile, in pixels
    pub tile_height: u32,
    /// Distinguished index used to mark unsatisfiable cells
    pub error_tile: TileIndex,
    tiles: HashMap<TileIndex, TileDefinition>,
    all_indexes: HashSet<TileIndex>,
}

impl Rules {
    /// Construct a `Rules` value from its parts, validating that
    /// `all_indexes == keys(tiles)` and that `error_tile` is a member.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidDocument`] if `error_tile` is not
    /// present among `tiles`.
    pub fn new(
        name: String,
        author: String,
        file_name: String,
        tile_width: u32,
        tile_height: u32,
        error_tile: TileIndex,
        tiles: HashMap<TileIndex, TileDefinition>,
    ) -> Result<Self> {
        if !tiles.contains_key(&error_tile) {
            return Err(AlgorithmError::InvalidDocument {
                reason: format!("ErrorTile {error_tile} is not among the declared tiles"),
            });
        }
        let all_indexes = tiles.keys().copied().collect();
        Ok(Self {
            name,
            author,
            file_name,
            tile_width,
            tile_height,
            error_tile,
            tiles,
            all_indexes,
        })
    }

    /// The full set of declared tile indices.
    #[must_use]
    pub const fn all_indexes(&self) -> &HashSet<TileIndex> {
        &self.all_indexes
    }

    /// Look up the direction→allowed-set mapping for a tile.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::UnknownTile`] if `index` is not among the
    /// declared tiles.
    pub fn get_rule_by_index(&self, index: TileIndex) -> Result<&RuleMap> {
        self.tiles
            .get(&index)
            .map(|tile| &tile.rules)
            .ok_or(AlgorithmError::UnknownTile { index })
    }

    /// Iterate over every declared tile definition, in no particular order.
    pub fn tile_definitions(&self) -> impl Iterator<Item = &TileDefinition> {
        self.tiles.values()
    }
}
