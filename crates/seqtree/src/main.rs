use anyhow::Result;
use clap::Parser;
use seqtree::cli::Args;
use std::io::Write;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let output = seqtree::run(&args)?;
    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
