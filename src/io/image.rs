//! PNG rendering of a solved (or partially solved) grid through the tile
//! images supplied by a [`TileSet`].

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::SolverState;
use crate::io::error::AlgorithmError;
use crate::spatial::TileSet;

/// Placeholder fill used for cells that are not yet determined (more than
/// one option remaining).
const UNDETERMINED_COLOR: Rgba<u8> = Rgba([32, 32, 32, 255]);

/// Render `state` by drawing each fixed cell's tile from `tileset` at its
/// grid position; cells with more than one remaining option are painted as
/// a flat placeholder rather than left blank, since a solved-looking export
/// should make unresolved regions visible at a glance.
///
/// # Errors
///
/// Returns [`AlgorithmError::OutOfRange`] if a fixed cell's sole option is
/// not a valid index into `tileset`, [`AlgorithmError::FileSystem`] if the
/// output directory cannot be created, and [`AlgorithmError::ImageExport`]
/// if the PNG cannot be written.
pub fn export_grid(
    state: &SolverState,
    tileset: &TileSet,
    output_path: impl AsRef<std::path::Path>,
) -> crate::io::error::Result<()> {
    let output_path = output_path.as_ref();
    let tile_width = tileset.tile_width;
    let tile_height = tileset.tile_height;
    let mut canvas: RgbaImage = ImageBuffer::from_pixel(
        state.width() as u32 * tile_width,
        state.height() as u32 * tile_height,
        UNDETERMINED_COLOR,
    );

    for y in 0..state.height() {
        for x in 0..state.width() {
            let options = state.get(x, y);
            if let [index] = options.as_slice() {
                let tile = tileset.get_tile_by_index(*index)?;
                image::imageops::overlay(
                    &mut canvas,
                    tile,
                    i64::from(x as u32 * tile_width),
                    i64::from(y as u32 * tile_height),
                );
            }
        }
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create output directory",
            source,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|source| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

