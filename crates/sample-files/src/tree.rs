use crate::record::{path_segments, Record};
use file_tree::{build_tree, RecordTree, TreeError};

/// Materialize records into a tree keyed by record id
///
/// Directory segments come from [`Record::path`] with empty segments dropped,
/// and each record's name becomes its leaf.
pub fn record_tree<R: Record>(records: &[R]) -> Result<RecordTree<&R>, TreeError> {
    build_tree(records, |r| path_segments(*r), |r| r.id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FileRecord;
    use file_tree::prelude::*;

    #[test]
    fn test_record_tree() {
        let records = vec![
            FileRecord::new("1", "a/b", "f1.txt"),
            FileRecord::new("2", "a/c", "f2.txt"),
            FileRecord::new("3", "a/b", "f3.txt"),
        ];
        let tree = record_tree(&records).unwrap();

        let leaf = tree.find_by_key(&NodeKey::Record("3".into())).unwrap();
        assert_eq!(tree.path(leaf), "a/b/f3.txt");
        assert_eq!(tree.payload(leaf).map(|r| r.id.as_str()), Some("3"));
    }

    #[test]
    fn test_record_tree_rejects_empty_record() {
        let records = vec![FileRecord::new("blank", "/", "")];
        let err = record_tree(&records).unwrap_err();
        assert_eq!(
            err,
            TreeError::InvalidRecord {
                index: 0,
                id: "blank".into()
            }
        );
    }

    #[test]
    fn test_record_tree_rejects_nameless_record_under_a_directory() {
        let records = vec![
            FileRecord::new("1", "a/b", ""),
            FileRecord::new("2", "a/b", "f.txt"),
        ];
        let err = record_tree(&records).unwrap_err();
        assert_eq!(
            err,
            TreeError::InvalidRecord {
                index: 0,
                id: "1".into()
            }
        );
    }
}
