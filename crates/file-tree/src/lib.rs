//! File Tree Library
//!
//! Materializes flat collections of path-bearing records into a navigable
//! directory tree.
//!
//! # Core Concepts
//!
//! - **RecordTree**: arena-backed tree; directories come from shared path
//!   prefixes, files wrap the original records
//! - **Tree / TreeTraversal**: navigation, path reconstruction and walks
//! - **flatten**: level-order linearization for display
//!
//! # Example
//!
//! ```
//! use file_tree::prelude::*;
//!
//! let paths = ["runs/r1/a.fastq.gz", "runs/r2/b.fastq.gz", "runs/r1/c.fastq.gz"];
//! let tree = build_tree(
//!     paths,
//!     |p| p.split('/').map(str::to_string).collect(),
//!     |p| p.to_string(),
//! )
//! .expect("every path has a file name");
//!
//! for id in tree.walk(TraversalOrder::PreOrder) {
//!     let node = tree.get(id).unwrap();
//!     println!("{:indent$}{}", "", node.name, indent = tree.depth(id) * 2);
//! }
//! assert_eq!(tree.file_count(), 3);
//! ```

pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::{
    build_tree, flatten, Node, NodeId, NodeKey, NodeKind, RecordTree, TraversalOrder, Tree,
    TreeTraversal,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TreeError;
    pub use crate::tree::prelude::*;
}
