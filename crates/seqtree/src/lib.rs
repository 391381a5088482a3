//! Library half of the `seqtree` command: argument parsing, record loading,
//! filtering and rendering. `main.rs` only wires these together.

pub mod cli;
pub mod filters;
pub mod input;
pub mod render;

use anyhow::Result;
use cli::{Args, Command};
use filters::FilterOptions;

/// Execute a parsed command line and return what should be printed
pub fn run(args: &Args) -> Result<String> {
    let options = FilterOptions::from_args(&args.filters)?;
    let records = input::load_records(&args.input)?;
    let records = options.apply(&records);

    match args.command {
        Command::Tree => render::render_tree(&records),
        Command::Flat => render::render_flat(&records),
        Command::Pairs => render::render_pairs(&records),
    }
}
