//! Command-line interface binding the driver API to two subcommands:
//! inferring a rule document from a tileset's pixel edges, and solving a
//! grid against a rule document.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Parser, Subcommand};

use crate::algorithm::SolverState;
use crate::edge_inference;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_GRID_DIMENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image;
use crate::rules::document::{load_rules, to_json};
use crate::rules::TileIndex;
use crate::spatial::TileSet;

/// Top-level command-line arguments.
#[derive(Parser)]
#[command(name = "wavetile")]
#[command(author, version, about = "Wave-function-collapse tile map solver")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// The two operations the driver API exposes to a shell: rule inference
/// and grid solving.
#[derive(Subcommand)]
pub enum Command {
    /// Infer an adjacency rule document from a tileset image's pixel edges
    Infer(InferArgs),
    /// Construct a solver over a rule document and drive it to completion
    Solve(SolveArgs),
}

/// Arguments for the `infer` subcommand.
#[derive(Parser)]
pub struct InferArgs {
    /// Tileset PNG: a grid of equally sized tiles, row-major
    pub tileset: PathBuf,

    /// Width of a single tile, in pixels
    #[arg(long)]
    pub tile_width: u32,

    /// Height of a single tile, in pixels
    #[arg(long)]
    pub tile_height: u32,

    /// Tile index written into the document as `ErrorTile`
    #[arg(long, default_value_t = 1)]
    pub error_tile: TileIndex,

    /// Display name recorded in the document; defaults to the tileset's
    /// file stem
    #[arg(long)]
    pub name: Option<String>,

    /// Author attribution recorded in the document
    #[arg(long, default_value = "wavetile")]
    pub author: String,

    /// Where to write the inferred rule document
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `solve` subcommand.
#[derive(Parser)]
pub struct SolveArgs {
    /// Rule document to solve against
    pub rules: PathBuf,

    /// Grid width, in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height, in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed driving `fix_at_random`/`fill_at_random`
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Manual fixes applied before filling, each as `x,y,index`
    #[arg(long = "fix", value_name = "X,Y,INDEX")]
    pub fixes: Vec<String>,

    /// Restore any errored cell to its full option set and fill once more
    /// after the initial pass
    #[arg(long)]
    pub retry_errors: bool,

    /// Tileset image to render the solved grid through; required together
    /// with `--output` to produce a PNG
    #[arg(long)]
    pub tileset: Option<PathBuf>,

    /// PNG path to render the solved grid to; defaults next to the rule
    /// document when a tileset is given
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the parsed command line.
///
/// # Errors
///
/// Propagates document parsing, tileset loading, and image export errors.
/// Returns [`AlgorithmError::InvalidParameter`] if a `--fix` argument is
/// malformed or a grid dimension exceeds [`MAX_GRID_DIMENSION`].
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Infer(args) => run_infer(args),
        Command::Solve(args) => run_solve(args),
    }
}

fn run_infer(args: &InferArgs) -> Result<()> {
    let tileset = TileSet::load(&args.tileset, args.tile_width, args.tile_height)?;
    let name = args.name.clone().unwrap_or_else(|| tileset.name.clone());
    let rules = edge_inference::infer_rules(&tileset, name, &args.author, args.error_tile)?;

    log::info!(
        "inferred {} tile(s) from '{}'",
        tileset.tile_count(),
        args.tileset.display()
    );

    let text = to_json(&rules)?;
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create output directory",
            source,
        })?;
    }
    std::fs::write(&args.output, text).map_err(|source| AlgorithmError::FileSystem {
        path: args.output.clone(),
        operation: "write rule document",
        source,
    })?;

    log::info!("wrote rule document to '{}'", args.output.display());
    Ok(())
}

fn run_solve(args: &SolveArgs) -> Result<()> {
    if args.width == 0 || args.width > MAX_GRID_DIMENSION {
        return Err(AlgorithmError::InvalidParameter {
            parameter: "width",
            value: args.width.to_string(),
            reason: format!("must be in 1..={MAX_GRID_DIMENSION}"),
        });
    }
    if args.height == 0 || args.height > MAX_GRID_DIMENSION {
        return Err(AlgorithmError::InvalidParameter {
            parameter: "height",
            value: args.height.to_string(),
            reason: format!("must be in 1..={MAX_GRID_DIMENSION}"),
        });
    }

    let rules = load_rules(&args.rules)?;
    let mut state = SolverState::new(Rc::new(rules), args.width, args.height, args.seed);

    for raw_fix in &args.fixes {
        let (x, y, choice) = parse_fix(raw_fix)?;
        if !state.fix(x, y, choice) {
            log::warn!("manual fix {raw_fix} rejected by propagation, ignoring");
        }
    }

    state.fill_at_random();
    if args.retry_errors {
        state.clear_errors();
        state.fill_at_random();
    }

    let error_count = count_errors(&state);
    log::info!(
        "solved {}x{} grid, seed {}, {error_count} error cell(s)",
        args.width,
        args.height,
        args.seed
    );

    match (&args.tileset, resolve_output_path(args)) {
        (Some(tileset_path), Some(output_path)) => {
            let tileset =
                TileSet::load(tileset_path, state.rules().tile_width, state.rules().tile_height)?;
            image::export_grid(&state, &tileset, &output_path)?;
            log::info!("rendered solved grid to '{}'", output_path.display());
        }
        _ => print_grid_as_text(&state),
    }

    Ok(())
}

fn resolve_output_path(args: &SolveArgs) -> Option<PathBuf> {
    if let Some(output) = &args.output {
        return Some(output.clone());
    }
    args.tileset.as_ref().map(|_| default_output_path(&args.rules))
}

fn default_output_path(rules_path: &Path) -> PathBuf {
    let stem = rules_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "grid".to_string());
    let name = format!("{stem}{OUTPUT_SUFFIX}.png");
    rules_path
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(name))
}

fn parse_fix(raw: &str) -> Result<(usize, usize, TileIndex)> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [x, y, choice]: [&str; 3] = parts.try_into().map_err(|_| AlgorithmError::InvalidParameter {
        parameter: "fix",
        value: raw.to_string(),
        reason: "expected X,Y,INDEX".to_string(),
    })?;
    let parse = |field: &str, value: &str| {
        value.parse().map_err(|_| AlgorithmError::InvalidParameter {
            parameter: "fix",
            value: raw.to_string(),
            reason: format!("{field} component '{value}' is not a non-negative integer"),
        })
    };
    Ok((parse("x", x)?, parse("y", y)?, parse("index", choice)?))
}

fn count_errors(state: &SolverState) -> usize {
    let error_tile = state.rules().error_tile;
    let mut count = 0;
    for y in 0..state.height() {
        for x in 0..state.width() {
            if state.get(x, y) == [error_tile] {
                count += 1;
            }
        }
    }
    count
}

/// Rendering fallback for `solve` invocations given no `--tileset`/`--output`
/// pair; prints the grid as tile indices, with `?N` for an undetermined cell
/// still holding `N` options.
#[allow(clippy::print_stdout)]
fn print_grid_as_text(state: &SolverState) {
    let error_tile = state.rules().error_tile;
    for y in 0..state.height() {
        let row: Vec<String> = (0..state.width())
            .map(|x| {
                let options = state.get(x, y);
                match options.as_slice() {
                    [index] if *index == error_tile => "E".to_string(),
                    [index] => index.to_string(),
                    options => format!("?{}", options.len()),
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }
}
