use crate::tree::{NodeId, Tree};

/// Level-order flattening of the forest rooted at `nodes`
///
/// Yields the given nodes, then all of their children, then all of the
/// grandchildren, and so on. This is not a per-branch depth-first order: two
/// sibling directories have all their files listed after both directories.
pub fn flatten<T: Tree + ?Sized>(tree: &T, nodes: &[NodeId]) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut level: Vec<NodeId> = nodes.to_vec();

    while !level.is_empty() {
        let next: Vec<NodeId> = level
            .iter()
            .flat_map(|&id| tree.children(id).iter().copied())
            .collect();
        out.append(&mut level);
        level = next;
    }

    out
}
