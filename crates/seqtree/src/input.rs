use anyhow::{Context, Result};
use log::info;
use sample_files::FileRecord;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Parse a JSON array of file records
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<FileRecord>> {
    serde_json::from_reader(reader).context("Failed to parse file records as JSON")
}

/// Load records from `path`, or from stdin when `path` is `-`
pub fn load_records(path: &Path) -> Result<Vec<FileRecord>> {
    let records = if path == Path::new("-") {
        parse_records(io::stdin().lock())?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open record list {}", path.display()))?;
        parse_records(BufReader::new(file))
            .with_context(|| format!("Failed to read record list {}", path.display()))?
    };

    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
