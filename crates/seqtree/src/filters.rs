//! Filter pipeline applied to loaded records before rendering

use crate::cli::FilterArgs;
use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use sample_files::{
    compile_patterns, exclude_by_tag, filter_by_filename, filter_by_full_path, filter_by_regex,
    filter_by_tag, MatchCase, Record,
};

/// Every filter the CLI can apply, with patterns already compiled
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub patterns: Vec<Regex>,
    pub path: Option<String>,
    pub name: Option<String>,
    pub case: MatchCase,
}

impl FilterOptions {
    pub fn from_args(args: &FilterArgs) -> Result<Self> {
        let patterns = compile_patterns(&args.patterns)
            .with_context(|| format!("Invalid --regex pattern in {:?}", args.patterns))?;

        Ok(Self {
            tags: args.tags.clone(),
            exclude_tags: args.exclude_tags.clone(),
            patterns,
            path: args.path.clone(),
            name: args.name.clone(),
            case: args.match_case(),
        })
    }

    /// Apply tag, exclude-tag, regex, full-path and filename filters in that order
    pub fn apply<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        let exclude: Vec<&str> = self.exclude_tags.iter().map(String::as_str).collect();

        let step = filter_by_tag(records, &tags);
        let step = exclude_by_tag(&step, &exclude).into_owned();
        let step = filter_by_regex(&step, &self.patterns).into_owned();
        let step = filter_by_full_path(&step, self.path.as_deref(), self.case).into_owned();
        let kept = filter_by_filename(&step, self.name.as_deref(), self.case).into_owned();

        debug!("filters kept {} of {} records", kept.len(), records.len());
        kept
    }
}
