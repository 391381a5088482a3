#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only view of a file record supplied by the backend
///
/// The filters, the pair matcher and [`record_tree`](crate::record_tree) only
/// ever read through these accessors.
pub trait Record {
    /// Unique identifier
    fn id(&self) -> &str;

    /// Display name, i.e. the file name without its directory
    fn name(&self) -> &str;

    /// Directory portion of the logical path, slash-delimited
    fn path(&self) -> &str;

    /// Classification tags; `None` when the record was never tagged
    fn tags(&self) -> Option<&[String]>;

    /// `path/name`, or just `name` when the path is empty
    fn full_path(&self) -> String {
        let dir = self.path().trim_end_matches('/');
        if dir.is_empty() {
            self.name().to_string()
        } else {
            format!("{}/{}", dir, self.name())
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn tags(&self) -> Option<&[String]> {
        (**self).tags()
    }
}

/// A file record as returned by the pipeline service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    /// Directory portion of the path, relative to the user's storage root
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tags: Option<Vec<String>>,
}

impl FileRecord {
    pub fn new(id: impl Into<String>, path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            tags: None,
        }
    }

    /// Builder-style tag assignment
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

impl Record for FileRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

/// Directory segments of `record.path()` followed by its name
///
/// Empty segments (leading, trailing or doubled slashes) are dropped. A
/// record with an empty name yields no segments at all, whatever its path,
/// so the last segment is always the record's own name.
pub fn path_segments<R: Record + ?Sized>(record: &R) -> Vec<String> {
    if record.name().is_empty() {
        return Vec::new();
    }

    record
        .path()
        .split('/')
        .chain(std::iter::once(record.name()))
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
