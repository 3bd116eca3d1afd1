//! Spatial data structures: the tile grid that `Rules` and `SolverState`
//! operate over.

/// Tileset loading and index/coordinate conversion
pub mod tileset;

pub use tileset::TileSet;
