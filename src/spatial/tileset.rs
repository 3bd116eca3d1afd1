//! Tileset loading: a PNG grid of equally sized tiles, indexed 1-based and
//! row-major.

use std::collections::HashMap;
use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::io::error::{AlgorithmError, Result};
use crate::rules::TileIndex;

/// A grid of tile images sliced out of a single PNG, plus the geometry
/// needed to convert between (col, row) and 1-based linear index.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: HashMap<(u32, u32), DynamicImage>,
    /// Number of tile columns
    pub cols: u32,
    /// Number of tile rows
    pub rows: u32,
    /// Width of a single tile, in pixels
    pub tile_width: u32,
    /// Height of a single tile, in pixels
    pub tile_height: u32,
    /// Display name, usually derived from the source file name
    pub name: String,
}

impl TileSet {
    /// Slice a PNG grid image into individual tiles.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::ImageLoad`] if the file cannot be decoded,
    /// or [`AlgorithmError::InvalidParameter`] if the image dimensions are
    /// not an exact multiple of the tile size.
    pub fn load(path: impl AsRef<Path>, tile_width: u32, tile_height: u32) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| AlgorithmError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::from_image(&image, tile_width, tile_height, name)
    }

    /// Slice an already-decoded image into a tile grid.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidParameter`] if the image dimensions
    /// are not an exact multiple of the tile size.
    pub fn from_image(
        image: &DynamicImage,
        tile_width: u32,
        tile_height: u32,
        name: impl Into<String>,
    ) -> Result<Self> {
        let (width, height) = image.dimensions();
        if tile_width == 0 || tile_height == 0 || width % tile_width != 0 || height % tile_height != 0
        {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "tile_width/tile_height",
                value: format!("{tile_width}x{tile_height}"),
                reason: format!("does not evenly divide image size {width}x{height}"),
            });
        }

        let cols = width / tile_width;
        let rows = height / tile_height;
        let mut tiles = HashMap::with_capacity((cols * rows) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let cropped = image.crop_imm(col * tile_width, row * tile_height, tile_width, tile_height);
                tiles.insert((col, row), cropped);
            }
        }

        Ok(Self {
            tiles,
            cols,
            rows,
            tile_width,
            tile_height,
            name: name.into(),
        })
    }

    /// Total number of tiles in the grid.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Convert a 1-based linear index to `(col, row)`.
    #[must_use]
    pub const fn index_to_coords(index: TileIndex, cols: u32) -> (u32, u32) {
        let zero_based = index - 1;
        (zero_based % cols, zero_based / cols)
    }

    /// Fetch a tile by its 1-based linear index.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::OutOfRange`] if `index` is less than 1 or
    /// greater than `cols * rows`.
    pub fn get_tile_by_index(&self, index: TileIndex) -> Result<&DynamicImage> {
        let max = self.tile_count();
        if index < 1 || index as usize > max {
            return Err(AlgorithmError::OutOfRange { index, max });
        }
        let (col, row) = Self::index_to_coords(index, self.cols);
        self.tiles
            .get(&(col, row))
            .ok_or(AlgorithmError::OutOfRange { index, max })
    }
}

