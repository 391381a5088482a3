//! Arena tree materialized from flat record paths
//!
//! Records carrying slash-delimited paths are folded into a rooted tree
//! whose directories come from shared prefixes and whose files wrap the
//! records themselves.

mod flatten;
mod materialize;
mod node;
mod traits;

pub use flatten::flatten;
pub use materialize::{build_tree, RecordTree};
pub use node::{Node, NodeId, NodeKey, NodeKind};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        build_tree, flatten, Node, NodeId, NodeKey, NodeKind, RecordTree, TraversalOrder, Tree,
        TreeTraversal,
    };
}
