//! Pure filters over record collections
//!
//! Every filter returns the input slice itself (`Cow::Borrowed`) when its
//! criteria are empty, and an owned copy of the surviving records otherwise.
//! Callers that need a distinct collection must call `into_owned`.

use crate::record::Record;
use regex::Regex;
use std::borrow::Cow;

/// Case handling for substring filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    #[default]
    Sensitive,
    Insensitive,
}

fn intersects(record_tags: &[String], wanted: &[&str]) -> bool {
    record_tags.iter().any(|tag| wanted.contains(&tag.as_str()))
}

fn retain<'a, R, F>(records: &'a [R], keep: F) -> Cow<'a, [R]>
where
    R: Clone,
    F: Fn(&R) -> bool,
{
    Cow::Owned(records.iter().filter(|r| keep(r)).cloned().collect())
}

/// Keep records carrying at least one of `tags`
///
/// Untagged records are dropped. This is not the complement of
/// [`exclude_by_tag`], which keeps them.
pub fn filter_by_tag<'a, R>(records: &'a [R], tags: &[&str]) -> Cow<'a, [R]>
where
    R: Record + Clone,
{
    if tags.is_empty() {
        return Cow::Borrowed(records);
    }
    retain(records, |r| r.tags().is_some_and(|own| intersects(own, tags)))
}

/// Drop records carrying any of `tags`; untagged records are kept
pub fn exclude_by_tag<'a, R>(records: &'a [R], tags: &[&str]) -> Cow<'a, [R]>
where
    R: Record + Clone,
{
    if tags.is_empty() {
        return Cow::Borrowed(records);
    }
    retain(records, |r| !r.tags().is_some_and(|own| intersects(own, tags)))
}

/// Keep records whose name matches any of `patterns`
///
/// Output is in first-match order: everything the first pattern matches (in
/// input order), then whatever the second pattern adds, and so on. A record
/// matched by several patterns appears once.
pub fn filter_by_regex<'a, R>(records: &'a [R], patterns: &[Regex]) -> Cow<'a, [R]>
where
    R: Record + Clone,
{
    if patterns.is_empty() {
        return Cow::Borrowed(records);
    }

    let mut seen = vec![false; records.len()];
    let mut out = Vec::new();
    for pattern in patterns {
        for (i, record) in records.iter().enumerate() {
            if !seen[i] && pattern.is_match(record.name()) {
                seen[i] = true;
                out.push(record.clone());
            }
        }
    }
    Cow::Owned(out)
}

/// Compile name patterns for [`filter_by_regex`]
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|p| Regex::new(p.as_ref())).collect()
}

fn contains(haystack: &str, needle: &str, case: MatchCase) -> bool {
    match case {
        MatchCase::Sensitive => haystack.contains(needle),
        MatchCase::Insensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Keep records whose `path/name` contains `query`
pub fn filter_by_full_path<'a, R>(
    records: &'a [R],
    query: Option<&str>,
    case: MatchCase,
) -> Cow<'a, [R]>
where
    R: Record + Clone,
{
    match query {
        Some(q) if !q.is_empty() => retain(records, |r| contains(&r.full_path(), q, case)),
        _ => Cow::Borrowed(records),
    }
}

/// Keep records whose name contains `query`
pub fn filter_by_filename<'a, R>(
    records: &'a [R],
    query: Option<&str>,
    case: MatchCase,
) -> Cow<'a, [R]>
where
    R: Record + Clone,
{
    match query {
        Some(q) if !q.is_empty() => retain(records, |r| contains(r.name(), q, case)),
        _ => Cow::Borrowed(records),
    }
}
