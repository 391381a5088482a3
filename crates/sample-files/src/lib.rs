// Sample file handling for the pipeline submission core
// This crate provides record filters, read-name conventions and mate pairing

mod filename;
mod filter;
mod pair;
mod record;
mod tree;

pub use filename::{canonicalize, is_r1_file, is_r2_file, mate_of, simplify, Mate};
pub use filter::{
    compile_patterns, exclude_by_tag, filter_by_filename, filter_by_full_path, filter_by_regex,
    filter_by_tag, MatchCase,
};
pub use pair::{find_pair, find_pair_by, is_mate_pair, pair_records, SampleGroup};
pub use record::{path_segments, FileRecord, Record};
pub use tree::record_tree;
