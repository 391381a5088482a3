//! Build a directory tree from flat, path-bearing records

use crate::error::{Result, TreeError};
use crate::tree::{flatten, Node, NodeId, NodeKey, NodeKind, Tree};
use log::{debug, trace};

/// Arena slot: the node plus its structural links
#[derive(Debug, Clone)]
struct ArenaNode<R> {
    node: Node<R>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree materialized from records
///
/// Nodes live in a flat arena and refer to each other by [`NodeId`], so the
/// parent links never form ownership cycles. Index 0 is the synthetic root.
#[derive(Debug, Clone)]
pub struct RecordTree<R> {
    nodes: Vec<ArenaNode<R>>,
}

impl<R> RecordTree<R> {
    fn new() -> Self {
        Self {
            nodes: vec![ArenaNode {
                node: Node::root(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    fn push(&mut self, parent: NodeId, node: Node<R>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(ArenaNode {
            node,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.get()].children.push(id);
        id
    }

    /// Directory child of `parent` with the given name
    fn directory_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.get()].children.iter().copied().find(|&id| {
            let node = &self.nodes[id.get()].node;
            node.kind == NodeKind::Directory && node.name == name
        })
    }

    /// The record wrapped by a file node
    pub fn payload(&self, id: NodeId) -> Option<&R> {
        self.get(id).and_then(|n| n.payload.as_ref())
    }

    pub fn key(&self, id: NodeId) -> Option<&NodeKey> {
        self.get(id).map(|n| &n.key)
    }

    pub fn find_by_key(&self, key: &NodeKey) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|slot| &slot.node.key == key)
            .map(NodeId::new)
    }

    /// Number of file nodes, which equals the number of input records
    pub fn file_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.node.is_file()).count()
    }

    /// Level-order flattening of the whole tree, root first
    pub fn flatten_all(&self) -> Vec<NodeId> {
        flatten(self, &[self.root()])
    }

    /// Iterate over every record in input order
    pub fn records(&self) -> impl Iterator<Item = &R> + '_ {
        self.nodes.iter().filter_map(|slot| slot.node.payload.as_ref())
    }
}

impl<R> Tree for RecordTree<R> {
    type Payload = R;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn get(&self, id: NodeId) -> Option<&Node<R>> {
        self.nodes.get(id.get()).map(|slot| &slot.node)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.get())?.parent
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.get())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Materialize `records` into a tree
///
/// `segments_of` yields a record's directory segments followed by its file
/// name; `id_of` yields the key for its leaf. Records are inserted in input
/// order: each directory prefix becomes exactly one node, shared by every
/// record under it, and each record becomes exactly one leaf. Children keep
/// first-encounter order.
///
/// Directory keys are numbered from 0 on every call, so the same input always
/// yields the same keys.
///
/// # Errors
///
/// [`TreeError::InvalidRecord`] if any record yields no segments. Nothing is
/// returned for the records before it.
pub fn build_tree<R, I, S, K>(records: I, segments_of: S, id_of: K) -> Result<RecordTree<R>>
where
    I: IntoIterator<Item = R>,
    S: Fn(&R) -> Vec<String>,
    K: Fn(&R) -> String,
{
    let mut tree = RecordTree::new();
    let mut next_directory: u64 = 0;

    for (index, record) in records.into_iter().enumerate() {
        let mut segments = segments_of(&record);
        let id = id_of(&record);

        let Some(file_name) = segments.pop() else {
            return Err(TreeError::InvalidRecord { index, id });
        };

        let mut current = tree.root();
        for segment in segments {
            current = match tree.directory_child(current, &segment) {
                Some(existing) => existing,
                None => {
                    let created = tree.push(current, Node::directory(segment, next_directory));
                    next_directory += 1;
                    created
                }
            };
        }

        trace!("placing record {} under {}", id, tree.path(current));
        tree.push(current, Node::file(file_name, id, record));
    }

    debug!(
        "materialized {} records into {} nodes ({} directories)",
        tree.file_count(),
        tree.node_count(),
        next_directory
    );

    Ok(tree)
}
