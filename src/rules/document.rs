//! Deserialization of the on-disk rule document format into a [`Rules`] value.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Direction, RuleMap, Rules, TileDefinition, TileIndex};
use crate::io::error::{AlgorithmError, Result};

#[derive(Debug, Deserialize, Serialize)]
struct RuleDocument {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "FileName")]
    file_name: String,
    #[serde(rename = "TileWidth")]
    tile_width: u32,
    #[serde(rename = "TileHeight")]
    tile_height: u32,
    #[serde(rename = "ErrorTile")]
    error_tile: TileIndex,
    #[serde(rename = "Tiles")]
    tiles: Vec<TileDocument>,
}

#[derive(Debug, Deserialize, Serialize)]
struct TileDocument {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Index")]
    index: TileIndex,
    #[serde(rename = "Rules", default)]
    rules: Option<HashMap<String, Vec<TileIndex>>>,
}

/// Parse a rule document from its JSON text.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidDocument`] when the text is not valid
/// JSON, a required field is missing or mistyped, or `ErrorTile` does not
/// name a declared tile.
pub fn parse_rules(text: &str) -> Result<Rules> {
    let document: RuleDocument =
        serde_json::from_str(text).map_err(|error| AlgorithmError::InvalidDocument {
            reason: error.to_string(),
        })?;

    let mut tiles = HashMap::with_capacity(document.tiles.len());
    for tile in document.tiles {
        let rule_map = build_rule_map(tile.rules);
        tiles.insert(
            tile.index,
            TileDefinition {
                name: tile.name,
                index: tile.index,
                rules: rule_map,
            },
        );
    }

    Rules::new(
        document.name,
        document.author,
        document.file_name,
        document.tile_width,
        document.tile_height,
        document.error_tile,
        tiles,
    )
}

/// Load and parse a rule document from a path on disk.
///
/// # Errors
///
/// Propagates filesystem errors via [`AlgorithmError::FileSystem`] and
/// document errors via [`parse_rules`].
pub fn load_rules(path: impl AsRef<Path>) -> Result<Rules> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read rule document",
        source,
    })?;
    parse_rules(&text)
}

/// Serialize a `Rules` value back into the on-disk document format. Each
/// tile's allowed-sets are written out per-direction (`Up`/`Down`/`Left`/
/// `Right`); the `"*"` wildcard-direction shorthand is never emitted, since
/// a reader need only handle the four spelled-out keys.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidDocument`] if serialization fails,
/// which should not happen for a well-formed `Rules` value.
pub fn to_json(rules: &Rules) -> Result<String> {
    let mut tiles: Vec<TileDocument> = rules
        .tile_definitions()
        .map(|tile| TileDocument {
            name: tile.name.clone(),
            index: tile.index,
            rules: Some(direction_map(&tile.rules.expand())),
        })
        .collect();
    tiles.sort_by_key(|tile| tile.index);

    let document = RuleDocument {
        name: rules.name.clone(),
        author: rules.author.clone(),
        file_name: rules.file_name.clone(),
        tile_width: rules.tile_width,
        tile_height: rules.tile_height,
        error_tile: rules.error_tile,
        tiles,
    };

    serde_json::to_string_pretty(&document).map_err(|error| AlgorithmError::InvalidDocument {
        reason: error.to_string(),
    })
}

fn direction_map(
    expanded: &HashMap<Direction, HashSet<TileIndex>>,
) -> HashMap<String, Vec<TileIndex>> {
    expanded
        .iter()
        .map(|(direction, allowed)| {
            let mut values: Vec<TileIndex> = allowed.iter().copied().collect();
            values.sort_unstable();
            (direction_key(*direction).to_string(), values)
        })
        .collect()
}

const fn direction_key(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "Up",
        Direction::Down => "Down",
        Direction::Left => "Left",
        Direction::Right => "Right",
    }
}

/// Missing or null `Rules` becomes the empty, unconstrained mapping. A
/// `"*"` key is treated as a wildcard only when it is the map's sole key;
/// otherwise it is ignored with a warning, since mixing a blanket direction
/// with explicit ones is not a documented combination.
fn build_rule_map(raw: Option<HashMap<String, Vec<TileIndex>>>) -> RuleMap {
    let Some(raw) = raw else {
        return RuleMap::PerDirection(HashMap::new());
    };

    if raw.len() == 1 {
        if let Some(values) = raw.get("*") {
            return RuleMap::Wildcard(dedup(values));
        }
    }

    let mut map = HashMap::new();
    for (key, values) in raw {
        match direction_from_key(&key) {
            Some(direction) => {
                map.insert(direction, dedup(&values));
            }
            None => {
                log::warn!("ignoring unknown direction key '{key}' in rule document");
            }
        }
    }
    RuleMap::PerDirection(map)
}

fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "Up" => Some(Direction::Up),
        "Down" => Some(Direction::Down),
        "Left" => Some(Direction::Left),
        "Right" => Some(Direction::Right),
        _ => None,
    }
}

fn dedup(values: &[TileIndex]) -> HashSet<TileIndex> {
    values.iter().copied().collect()
}

