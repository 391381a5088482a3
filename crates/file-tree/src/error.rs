use derive_more::{Display, Error};

/// Errors raised while materializing a tree
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TreeError {
    /// The record's path produced no segments, so there is nothing to name its leaf
    #[display(fmt = "record #{} ({}) has an empty path", index, id)]
    InvalidRecord { index: usize, id: String },
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_record_is_a_std_error() {
        let err = TreeError::InvalidRecord {
            index: 2,
            id: "r9".to_string(),
        };
        assert!(err.source().is_none());

        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert_eq!(boxed.to_string(), "record #2 (r9) has an empty path");
    }
}
