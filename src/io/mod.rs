//! Input/output: the error type shared across the crate, solver defaults,
//! PNG rendering of a solved grid, and the command-line driver.

/// Command-line interface binding the driver API to subcommands
pub mod cli;
/// Solver defaults and CLI constants
pub mod configuration;
/// Error types for rule loading, tileset access, and image I/O
pub mod error;
/// PNG rendering of a `SolverState` through its `TileSet`
pub mod image;
