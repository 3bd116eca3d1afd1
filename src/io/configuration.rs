//! Solver constants and CLI defaults

/// Safety limit to prevent excessive memory allocation for absurd grid sizes
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default seed used when the CLI is not given one explicitly
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width, in cells, used when the CLI is not given one
pub const DEFAULT_WIDTH: usize = 20;

/// Default grid height, in cells, used when the CLI is not given one
pub const DEFAULT_HEIGHT: usize = 20;

/// Suffix inserted before the extension of a default output path derived
/// from the rule document's declared tileset file name
pub const OUTPUT_SUFFIX: &str = "_solved";
