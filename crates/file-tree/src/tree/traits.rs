//! Navigation and traversal traits for record trees

use crate::tree::{Node, NodeId, NodeKind};
use std::collections::VecDeque;

/// Read-only navigation over an arena-backed tree
///
/// Implementations provide the structural primitives; everything else is
/// derived from them.
pub trait Tree {
    /// Record type carried by file nodes
    type Payload;

    /// The root node (always exists)
    fn root(&self) -> NodeId;

    /// Returns `None` if the ID does not belong to this tree.
    fn get(&self, id: NodeId) -> Option<&Node<Self::Payload>>;

    /// Returns `None` for the root node.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Children in first-encounter order. Empty for files or invalid IDs.
    fn children(&self, id: NodeId) -> &[NodeId];

    fn node_count(&self) -> usize;

    fn is_file(&self, id: NodeId) -> bool {
        self.get(id)
            .map(|n| n.kind == NodeKind::File)
            .unwrap_or(false)
    }

    fn is_directory(&self, id: NodeId) -> bool {
        self.get(id)
            .map(|n| n.kind == NodeKind::Directory)
            .unwrap_or(false)
    }

    fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Slash-joined names from the first level below the root down to `id`
    ///
    /// The root itself contributes nothing, so its path is empty.
    fn path(&self, id: NodeId) -> String {
        let mut components = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            if node_id == self.root() {
                break;
            }
            if let Some(name) = self.name(node_id) {
                components.push(name);
            }
            current = self.parent(node_id);
        }

        components.reverse();
        components.join("/")
    }

    /// Root = 0. Returns 0 for invalid IDs.
    fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Ancestors from parent up to the root
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Parent before children
    PreOrder,
    /// Children before parent
    PostOrder,
    /// Level by level
    BreadthFirst,
}

/// Walks and searches, implemented for every [`Tree`]
pub trait TreeTraversal: Tree {
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, self.root(), order)
    }

    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// All file nodes in pre-order
    fn files(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.is_file(id))
            .collect()
    }

    /// All directory nodes in pre-order, root included
    fn directories(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.is_directory(id))
            .collect()
    }

    fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node<Self::Payload>) -> bool,
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Resolve a slash-delimited path relative to the root
    ///
    /// Empty segments are skipped, so `"a//b/"` resolves like `"a/b"`. When
    /// a directory and a file share a name the directory wins.
    fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let children = self.children(current);
            current = children
                .iter()
                .copied()
                .find(|&id| self.is_directory(id) && self.name(id) == Some(segment))
                .or_else(|| {
                    children
                        .iter()
                        .copied()
                        .find(|&id| self.name(id) == Some(segment))
                })?;
        }

        Some(current)
    }

    /// First match in pre-order
    fn find_by_name(&self, name: &str) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.name(id) == Some(name))
    }

    fn find_all_by_name(&self, name: &str) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.name(id) == Some(name))
            .collect()
    }
}

impl<T: Tree> TreeTraversal for T {}

/// Iterator over node IDs in a chosen order
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    /// Node plus whether its children were already queued (post-order only)
    pending: VecDeque<(NodeId, bool)>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let pending = if tree.get(start).is_some() {
            VecDeque::from([(start, false)])
        } else {
            VecDeque::new()
        };

        Self {
            tree,
            order,
            pending,
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        let (current, _) = self.pending.pop_back()?;

        // Reverse so the first child is popped first
        for &child in self.tree.children(current).iter().rev() {
            self.pending.push_back((child, false));
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some(last) = self.pending.back_mut() {
            let (current, expanded) = *last;
            if expanded {
                self.pending.pop_back();
                return Some(current);
            }

            last.1 = true;
            for &child in self.tree.children(current).iter().rev() {
                self.pending.push_back((child, false));
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        let (current, _) = self.pending.pop_front()?;
        self.pending
            .extend(self.tree.children(current).iter().map(|&child| (child, false)));
        Some(current)
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKey;

    // Minimal hand-assembled tree so the traits are tested apart from the builder
    struct TestTree {
        nodes: Vec<Node<i32>>,
        parents: Vec<Option<NodeId>>,
        children: Vec<Vec<NodeId>>,
    }

    impl TestTree {
        fn new() -> Self {
            Self {
                nodes: vec![Node::root()],
                parents: vec![None],
                children: vec![vec![]],
            }
        }

        fn add_child(&mut self, parent: NodeId, node: Node<i32>) -> NodeId {
            let id = NodeId::new(self.nodes.len());
            self.nodes.push(node);
            self.parents.push(Some(parent));
            self.children.push(vec![]);
            self.children[parent.get()].push(id);
            id
        }
    }

    impl Tree for TestTree {
        type Payload = i32;

        fn root(&self) -> NodeId {
            NodeId::ROOT
        }

        fn get(&self, id: NodeId) -> Option<&Node<i32>> {
            self.nodes.get(id.get())
        }

        fn parent(&self, id: NodeId) -> Option<NodeId> {
            self.parents.get(id.get()).copied().flatten()
        }

        fn children(&self, id: NodeId) -> &[NodeId] {
            self.children
                .get(id.get())
                .map(Vec::as_slice)
                .unwrap_or(&[])
        }

        fn node_count(&self) -> usize {
            self.nodes.len()
        }
    }

    #[test]
    fn test_basic_tree_operations() {
        let mut tree = TestTree::new();
        let file1 = tree.add_child(NodeId::ROOT, Node::file("file1.txt", "1", 1));
        let dir1 = tree.add_child(NodeId::ROOT, Node::directory("dir1", 0));
        let _file2 = tree.add_child(dir1, Node::file("file2.txt", "2", 2));

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.child_count(NodeId::ROOT), 2);
        assert_eq!(tree.child_count(dir1), 1);
        assert!(tree.is_file(file1));
        assert!(tree.is_directory(dir1));
        assert!(!tree.is_file(NodeId(99)));
    }

    #[test]
    fn test_tree_path_skips_root() {
        let mut tree = TestTree::new();
        let dir1 = tree.add_child(NodeId::ROOT, Node::directory("dir1", 0));
        let file1 = tree.add_child(dir1, Node::file("file.txt", "1", 0));

        assert_eq!(tree.path(file1), "dir1/file.txt");
        assert_eq!(tree.path(NodeId::ROOT), "");
    }

    #[test]
    fn test_tree_depth_and_ancestors() {
        let mut tree = TestTree::new();
        let dir1 = tree.add_child(NodeId::ROOT, Node::directory("dir1", 0));
        let dir2 = tree.add_child(dir1, Node::directory("dir2", 1));
        let file1 = tree.add_child(dir2, Node::file("file.txt", "1", 0));

        assert_eq!(tree.depth(NodeId::ROOT), 0);
        assert_eq!(tree.depth(file1), 3);
        assert_eq!(tree.ancestors(file1), vec![dir2, dir1, NodeId::ROOT]);
        assert!(tree.is_ancestor_of(dir1, file1));
        assert!(!tree.is_ancestor_of(file1, dir1));
    }

    #[test]
    fn test_walk_orders() {
        let mut tree = TestTree::new();
        let dir1 = tree.add_child(NodeId::ROOT, Node::directory("dir1", 0));
        let file1 = tree.add_child(NodeId::ROOT, Node::file("file1.txt", "1", 0));
        let file2 = tree.add_child(dir1, Node::file("file2.txt", "2", 0));

        let pre: Vec<_> = tree.walk(TraversalOrder::PreOrder).collect();
        assert_eq!(pre, vec![NodeId::ROOT, dir1, file2, file1]);

        let post: Vec<_> = tree.walk(TraversalOrder::PostOrder).collect();
        assert_eq!(post, vec![file2, dir1, file1, NodeId::ROOT]);

        let bfs: Vec<_> = tree.walk(TraversalOrder::BreadthFirst).collect();
        assert_eq!(bfs, vec![NodeId::ROOT, dir1, file1, file2]);

        assert_eq!(tree.walk_from(NodeId(42), TraversalOrder::PreOrder).count(), 0);
    }

    #[test]
    fn test_postorder_nested_directories() {
        let mut tree = TestTree::new();
        let a = tree.add_child(NodeId::ROOT, Node::directory("a", 0));
        let b = tree.add_child(a, Node::directory("b", 1));
        let f1 = tree.add_child(b, Node::file("f1", "1", 0));
        let f2 = tree.add_child(b, Node::file("f2", "2", 0));
        let f3 = tree.add_child(a, Node::file("f3", "3", 0));
        let c = tree.add_child(NodeId::ROOT, Node::directory("c", 2));

        let post: Vec<_> = tree.walk(TraversalOrder::PostOrder).collect();
        assert_eq!(post, vec![f1, f2, b, f3, a, c, NodeId::ROOT]);

        let from_a: Vec<_> = tree.walk_from(a, TraversalOrder::PostOrder).collect();
        assert_eq!(from_a, vec![f1, f2, b, f3, a]);

        let leaf_only: Vec<_> = tree.walk_from(f3, TraversalOrder::PostOrder).collect();
        assert_eq!(leaf_only, vec![f3]);
    }

    #[test]
    fn test_find_helpers() {
        let mut tree = TestTree::new();
        let dir1 = tree.add_child(NodeId::ROOT, Node::directory("reads", 0));
        let file1 = tree.add_child(dir1, Node::file("a.fq", "1", 7));
        let _file2 = tree.add_child(NodeId::ROOT, Node::file("a.fq", "2", 8));

        assert_eq!(tree.find_by_path("reads/a.fq"), Some(file1));
        assert_eq!(tree.find_by_path("/reads//a.fq"), Some(file1));
        assert_eq!(tree.find_by_path("missing"), None);
        assert_eq!(tree.find_by_path(""), Some(NodeId::ROOT));
        assert_eq!(tree.find_by_name("a.fq"), Some(file1));
        assert_eq!(tree.find_all_by_name("a.fq").len(), 2);
        assert_eq!(tree.find(|n| n.payload == Some(8)).len(), 1);
        assert_eq!(tree.files().len(), 2);
        assert_eq!(tree.directories(), vec![NodeId::ROOT, dir1]);
        assert_eq!(tree.get(dir1).map(|n| n.key.clone()), Some(NodeKey::Directory(0)));
    }
}
