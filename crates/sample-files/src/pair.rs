//! Mate-pair matching for paired-end reads

use crate::filename::{canonicalize, simplify};
use crate::record::Record;
use log::debug;

/// Whether two canonical names differ only in a final digit pair summing to 3
///
/// Both final characters must be decimal digits; anything else never pairs.
/// A name can never pair with itself since no digit doubles to 3.
pub fn is_mate_pair(a: &str, b: &str) -> bool {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();

    let (Some(a_last), Some(b_last)) = (a_chars.next_back(), b_chars.next_back()) else {
        return false;
    };
    let (Some(a_digit), Some(b_digit)) = (a_last.to_digit(10), b_last.to_digit(10)) else {
        return false;
    };

    a_digit + b_digit == 3 && a_chars.as_str() == b_chars.as_str()
}

/// First candidate whose name is a mate of `target`'s name
///
/// Names are compared after [`canonicalize`]. `target` is not removed from
/// `candidates`; it cannot match itself anyway.
pub fn find_pair<'a, R: Record>(target: &R, candidates: &'a [R]) -> Option<&'a R> {
    find_pair_by(target, candidates, |record| record.name())
}

/// [`find_pair`] with a caller-supplied name accessor
pub fn find_pair_by<'a, T, F>(target: &T, candidates: &'a [T], name_of: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let wanted = canonicalize(name_of(target));
    candidates
        .iter()
        .find(|candidate| is_mate_pair(&wanted, &canonicalize(name_of(*candidate))))
}

/// A display group: both mates of a pair, or a record with no mate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleGroup<'a, R> {
    Pair {
        sample: String,
        first: &'a R,
        second: &'a R,
    },
    Single {
        sample: String,
        record: &'a R,
    },
}

impl<'a, R> SampleGroup<'a, R> {
    pub fn sample(&self) -> &str {
        match self {
            SampleGroup::Pair { sample, .. } | SampleGroup::Single { sample, .. } => sample,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, SampleGroup::Pair { .. })
    }

    /// Members in input order
    pub fn records(&self) -> Vec<&'a R> {
        match *self {
            SampleGroup::Pair { first, second, .. } => vec![first, second],
            SampleGroup::Single { record, .. } => vec![record],
        }
    }
}

/// Group `records` into mate pairs and singles
///
/// Each record still unpaired is matched with the first later unpaired
/// record that is its mate. Groups appear in the input order of their first
/// member.
pub fn pair_records<R: Record>(records: &[R]) -> Vec<SampleGroup<'_, R>> {
    let canonical: Vec<String> = records.iter().map(|r| canonicalize(r.name())).collect();
    let mut taken = vec![false; records.len()];
    let mut groups = Vec::new();

    for (i, record) in records.iter().enumerate() {
        if taken[i] {
            continue;
        }
        taken[i] = true;
        let sample = simplify(record.name());

        let mate = (i + 1..records.len())
            .find(|&j| !taken[j] && is_mate_pair(&canonical[i], &canonical[j]));

        match mate {
            Some(j) => {
                taken[j] = true;
                groups.push(SampleGroup::Pair {
                    sample,
                    first: record,
                    second: &records[j],
                });
            }
            None => groups.push(SampleGroup::Single { sample, record }),
        }
    }

    debug!(
        "grouped {} records into {} pairs and {} singles",
        records.len(),
        groups.iter().filter(|g| g.is_pair()).count(),
        groups.iter().filter(|g| !g.is_pair()).count()
    );

    groups
}
