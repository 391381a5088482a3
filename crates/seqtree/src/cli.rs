use clap::{Parser, Subcommand};
use log::LevelFilter;
use sample_files::MatchCase;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seqtree",
    about = "Browse uploaded sequencing files as a tree, filtered and paired",
    version
)]
pub struct Args {
    /// JSON array of file records, or `-` for stdin
    pub input: PathBuf,

    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the directory tree
    Tree,
    /// Print every node in level order, one path per line
    Flat,
    /// Print mate pairs and unpaired files
    Pairs,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Keep records carrying any of these tags
    #[arg(long = "tag", value_name = "TAG", global = true)]
    pub tags: Vec<String>,

    /// Drop records carrying any of these tags
    #[arg(long = "exclude-tag", value_name = "TAG", global = true)]
    pub exclude_tags: Vec<String>,

    /// Keep records whose name matches any of these regexes
    #[arg(long = "regex", value_name = "PATTERN", global = true)]
    pub patterns: Vec<String>,

    /// Keep records whose path/name contains this text
    #[arg(long, value_name = "TEXT", global = true)]
    pub path: Option<String>,

    /// Keep records whose name contains this text
    #[arg(long, value_name = "TEXT", global = true)]
    pub name: Option<String>,

    /// Case-insensitive --path and --name
    #[arg(short = 'i', long, global = true)]
    pub ignore_case: bool,
}

impl FilterArgs {
    pub fn match_case(&self) -> MatchCase {
        if self.ignore_case {
            MatchCase::Insensitive
        } else {
            MatchCase::Sensitive
        }
    }
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
