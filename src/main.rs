//! CLI entry point for the wave-function-collapse tile map solver.

use clap::Parser;
use wavetile::io::cli::{self, Cli};

fn main() -> wavetile::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli::run(&cli)
}
