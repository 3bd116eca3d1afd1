//! Automatic adjacency rule construction from tile pixel edges.
//!
//! Two tiles may touch on an edge iff their corresponding pixel strips are
//! bitwise identical. Edge equality is exact; no tolerance.

use std::collections::{HashMap, HashSet};

use image::{GenericImageView, Rgba};

use crate::rules::{Direction, RuleMap, Rules, TileDefinition, TileIndex};
use crate::spatial::TileSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

type Strip = Vec<(u8, u8, u8, u8)>;

fn extract_strip<I: GenericImageView<Pixel = Rgba<u8>>>(tile: &I, side: Side) -> Strip {
    let (width, height) = tile.dimensions();
    match side {
        Side::Top => (0..width).map(|x| pixel(tile, x, 0)).collect(),
        Side::Bottom => (0..width).map(|x| pixel(tile, x, height - 1)).collect(),
        Side::Left => (0..height).map(|y| pixel(tile, 0, y)).collect(),
        Side::Right => (0..height).map(|y| pixel(tile, width - 1, y)).collect(),
    }
}

fn pixel<I: GenericImageView<Pixel = Rgba<u8>>>(tile: &I, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let Rgba([r, g, b, a]) = tile.get_pixel(x, y);
    (r, g, b, a)
}

/// Build a `Rules` value from a tileset by comparing pixel edges.
///
/// For each tile, the four pixel strips (top row, bottom row, left column,
/// right column) are extracted and grouped by exact equality. A tile's `Up`
/// neighbors are the tiles whose bottom strip matches its own top strip;
/// `Down` mirrors via bottom→top, `Left` via right→left, `Right` via
/// left→right. The resulting rules are symmetric by construction.
///
/// # Errors
///
/// Returns [`crate::io::error::AlgorithmError::OutOfRange`] if tile
/// extraction from the tileset fails, which should not happen for indices
/// within `1..=tileset.tile_count()`.
pub fn infer_rules(
    tileset: &TileSet,
    name: impl Into<String>,
    author: impl Into<String>,
    error_tile: TileIndex,
) -> crate::io::error::Result<Rules> {
    let count = tileset.tile_count();
    let mut strips: HashMap<(Side, Strip), HashSet<TileIndex>> = HashMap::new();
    let mut tile_strips: HashMap<TileIndex, HashMap<Side, Strip>> = HashMap::new();

    for raw_index in 1..=count {
        let index = raw_index as TileIndex;
        let tile = tileset.get_tile_by_index(index)?;
        let mut sides = HashMap::new();
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            let strip = extract_strip(tile, side);
            strips
                .entry((side, strip.clone()))
                .or_default()
                .insert(index);
            sides.insert(side, strip);
        }
        tile_strips.insert(index, sides);
    }

    let mut tiles = HashMap::with_capacity(count);
    for (&index, sides) in &tile_strips {
        let mut directions = HashMap::new();
        directions.insert(
            Direction::Up,
            matching_neighbors(&strips, Side::Bottom, &sides[&Side::Top]),
        );
        directions.insert(
            Direction::Down,
            matching_neighbors(&strips, Side::Top, &sides[&Side::Bottom]),
        );
        directions.insert(
            Direction::Left,
            matching_neighbors(&strips, Side::Right, &sides[&Side::Left]),
        );
        directions.insert(
            Direction::Right,
            matching_neighbors(&strips, Side::Left, &sides[&Side::Right]),
        );

        tiles.insert(
            index,
            TileDefinition {
                name: format!("tile-{index}"),
                index,
                rules: RuleMap::PerDirection(directions),
            },
        );
    }

    Rules::new(
        name.into(),
        author.into(),
        format!("{}.png", tileset.name),
        tileset.tile_width,
        tileset.tile_height,
        error_tile,
        tiles,
    )
}

fn matching_neighbors(
    strips: &HashMap<(Side, Strip), HashSet<TileIndex>>,
    opposite_side: Side,
    strip: &Strip,
) -> HashSet<TileIndex> {
    strips
        .get(&(opposite_side, strip.clone()))
        .cloned()
        .unwrap_or_default()
}

