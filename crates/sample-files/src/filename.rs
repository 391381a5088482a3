//! Sequencing-read filename conventions
//!
//! Canonical names drop the file-format suffix (`S1_R1_001.fastq.gz` becomes
//! `S1_R1`); sample names additionally drop the mate indicator (`S1`).

use derive_more::Display;
use regex::Regex;
use std::sync::OnceLock;

/// Suffixes stripped by [`canonicalize`], in priority order
///
/// Every pattern is applied in turn, whether or not an earlier one matched.
const FORMAT_SUFFIXES: &[&str] = &[
    // Illumina bcl2fastq default
    r"_001\.fastq\.gz$",
    // ENA / SRA
    r"\.fastq\.gz$",
    // FASTA, compressed
    r"\.fasta\.gz$",
    r"\.fa\.gz$",
    // Alternate gzip
    r"\.fq\.gz$",
    // Uncompressed
    r"\.fastq$",
    r"\.fq$",
    r"\.fasta$",
    r"\.fa$",
];

/// Lane-qualified form first so `_L001_R1` goes as one piece
const MATE_SUFFIX: &str = r"(_L0\d{2}_R[12]|_R[12]|_[12])$";

fn format_suffixes() -> &'static [Regex] {
    static SUFFIXES: OnceLock<Vec<Regex>> = OnceLock::new();
    SUFFIXES.get_or_init(|| {
        FORMAT_SUFFIXES
            .iter()
            .map(|pattern| Regex::new(pattern).expect("format suffix pattern is valid"))
            .collect()
    })
}

fn mate_suffix() -> &'static Regex {
    static MATE: OnceLock<Regex> = OnceLock::new();
    MATE.get_or_init(|| Regex::new(MATE_SUFFIX).expect("mate suffix pattern is valid"))
}

/// Which end of a paired-end run a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mate {
    #[display(fmt = "R1")]
    R1,
    #[display(fmt = "R2")]
    R2,
}

/// Strip the sequencing file-format suffix from `filename`
///
/// Names without a known suffix come back unchanged.
pub fn canonicalize(filename: &str) -> String {
    format_suffixes()
        .iter()
        .fold(filename.to_string(), |name, suffix| {
            suffix.replace(&name, "").into_owned()
        })
}

/// Sample name shared by both mates: the canonical name minus its mate indicator
pub fn simplify(filename: &str) -> String {
    let canonical = canonicalize(filename);
    mate_suffix().replace(&canonical, "").into_owned()
}

/// Mate indicator at the end of the canonical name, if any
pub fn mate_of(filename: &str) -> Option<Mate> {
    let canonical = canonicalize(filename);
    let indicator = mate_suffix().find(&canonical)?.as_str();
    match indicator.chars().last()? {
        '1' => Some(Mate::R1),
        '2' => Some(Mate::R2),
        _ => None,
    }
}

pub fn is_r1_file(filename: &str) -> bool {
    mate_of(filename) == Some(Mate::R1)
}

pub fn is_r2_file(filename: &str) -> bool {
    mate_of(filename) == Some(Mate::R2)
}
