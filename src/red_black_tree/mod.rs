//! Self-balancing binary search tree that uses a color bit on every node to keep the tree
//! approximately balanced during insertions.
//!
//! Nodes are stored in a `TypedArena` owned by the tree. Child and parent links are arena handles,
//! so the upward links needed by the insertion fixup never own anything. An absent child is
//! represented by `None` and counts as a black leaf.

mod node;
mod tree;

pub use self::tree::{RedBlackTree, RedBlackTreeIter};
