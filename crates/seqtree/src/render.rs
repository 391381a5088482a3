//! Plain-text views over filtered records

use anyhow::Result;
use file_tree::prelude::*;
use sample_files::{pair_records, record_tree, Record, SampleGroup};
use std::fmt::Write;

fn label<T: Tree>(tree: &T, id: NodeId) -> String {
    if id == tree.root() {
        return "/".to_string();
    }
    match tree.get(id) {
        Some(node) if node.is_directory() => format!("{}/", node.name),
        Some(node) => node.name.clone(),
        None => String::new(),
    }
}

/// Indented tree, root first, children in first-seen order
pub fn render_tree<R: Record>(records: &[R]) -> Result<String> {
    let tree = record_tree(records)?;
    let mut out = String::new();

    for id in tree.walk(TraversalOrder::PreOrder) {
        let indent = "  ".repeat(tree.depth(id));
        writeln!(out, "{}{}", indent, label(&tree, id))?;
    }

    Ok(out)
}

/// Level-order listing of every node's path
pub fn render_flat<R: Record>(records: &[R]) -> Result<String> {
    let tree = record_tree(records)?;
    let mut out = String::new();

    for id in tree.flatten_all() {
        if id == tree.root() {
            writeln!(out, "/")?;
        } else {
            writeln!(out, "{}", tree.path(id))?;
        }
    }

    Ok(out)
}

/// One line per sample group, tab separated
pub fn render_pairs<R: Record>(records: &[R]) -> Result<String> {
    let mut out = String::new();

    for group in pair_records(records) {
        match group {
            SampleGroup::Pair {
                sample,
                first,
                second,
            } => writeln!(out, "{}\t{}\t{}", sample, first.name(), second.name())?,
            SampleGroup::Single { sample, record } => {
                writeln!(out, "{}\t{}", sample, record.name())?
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_files::FileRecord;

    fn records() -> Vec<FileRecord> {
        vec![
            FileRecord::new("1", "a/b", "f1.txt"),
            FileRecord::new("2", "a/c", "f2.txt"),
            FileRecord::new("3", "a/b", "f3.txt"),
        ]
    }

    #[test]
    fn test_render_tree() {
        let rendered = render_tree(&records()).unwrap();
        insta::assert_snapshot!(rendered, @r"
        /
          a/
            b/
              f1.txt
              f3.txt
            c/
              f2.txt
        ");
    }

    #[test]
    fn test_render_flat() {
        let rendered = render_flat(&records()).unwrap();
        assert_eq!(
            rendered,
            "/\na\na/b\na/c\na/b/f1.txt\na/b/f3.txt\na/c/f2.txt\n"
        );
    }

    #[test]
    fn test_render_pairs() {
        let records = vec![
            FileRecord::new("1", "r", "S1_R1_001.fastq.gz"),
            FileRecord::new("2", "r", "ref.fa"),
            FileRecord::new("3", "r", "S1_R2_001.fastq.gz"),
        ];
        assert_eq!(
            render_pairs(&records).unwrap(),
            "S1\tS1_R1_001.fastq.gz\tS1_R2_001.fastq.gz\nref\tref.fa\n"
        );
    }

    #[test]
    fn test_render_tree_rejects_blank_record() {
        let err = render_tree(&[FileRecord::new("x", "", "")]).unwrap_err();
        assert!(err.to_string().contains("empty path"));
    }
}
