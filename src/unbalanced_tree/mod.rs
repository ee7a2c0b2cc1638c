//! Binary search tree without any rebalancing. Its height depends entirely on insertion order and
//! degenerates into a linked list on sorted input.

mod node;
mod tree;

pub use self::tree::{UnbalancedTree, UnbalancedTreeIter};
