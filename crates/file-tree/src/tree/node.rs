//! Core node types for the record tree

use derive_more::Display;
use std::fmt;

/// Position of a node inside a tree's arena
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always sits at index 0
    pub const ROOT: NodeId = NodeId(0);

    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Whether a node is a directory or a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// Materialized from a shared path prefix
    #[display(fmt = "directory")]
    Directory,
    /// Wraps exactly one record
    #[display(fmt = "file")]
    File,
}

impl NodeKind {
    pub const fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    pub const fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Logical identifier of a node
///
/// Directory keys come from a counter local to one build, so they are stable
/// for identical input but not across different inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum NodeKey {
    #[display(fmt = "__root__")]
    Root,
    #[display(fmt = "{}", _0)]
    Directory(u64),
    #[display(fmt = "{}", _0)]
    Record(String),
}

/// A single node in the tree
///
/// `payload` is `Some` exactly when `kind` is [`NodeKind::File`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node<D> {
    /// Path segment for directories, display name for files, empty for the root
    pub name: String,
    pub kind: NodeKind,
    pub key: NodeKey,
    pub payload: Option<D>,
}

impl<D> Node<D> {
    pub(crate) fn root() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Directory,
            key: NodeKey::Root,
            payload: None,
        }
    }

    /// Create a directory node
    pub fn directory(name: impl Into<String>, counter: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            key: NodeKey::Directory(counter),
            payload: None,
        }
    }

    /// Create a file node wrapping a record
    pub fn file(name: impl Into<String>, id: impl Into<String>, payload: D) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            key: NodeKey::Record(id.into()),
            payload: Some(payload),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    pub fn is_root(&self) -> bool {
        self.key == NodeKey::Root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::ROOT, NodeId(0));
        assert_eq!(NodeId::new(5).get(), 5);
        assert_eq!(NodeId::from(10), NodeId(10));
        assert_eq!(usize::from(NodeId(7)), 7);
    }

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::Directory.is_directory());
        assert!(!NodeKind::Directory.is_file());
        assert!(NodeKind::File.is_file());
        assert_eq!(NodeKind::File.to_string(), "file");
    }

    #[test]
    fn test_node_key_display() {
        assert_eq!(NodeKey::Root.to_string(), "__root__");
        assert_eq!(NodeKey::Directory(3).to_string(), "3");
        assert_eq!(NodeKey::Record("rec-9".into()).to_string(), "rec-9");
    }

    #[test]
    fn test_node_constructors() {
        let dir: Node<()> = Node::directory("reads", 0);
        assert!(dir.is_directory());
        assert!(dir.payload.is_none());

        let file = Node::file("a_R1.fastq.gz", "42", "payload");
        assert!(file.is_file());
        assert_eq!(file.key, NodeKey::Record("42".into()));
        assert_eq!(file.payload, Some("payload"));

        let root: Node<()> = Node::root();
        assert!(root.is_root());
        assert_eq!(root.name, "");
    }
}
