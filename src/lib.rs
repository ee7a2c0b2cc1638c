//! Two ordered-key trees behind one contract: an unbalanced binary search tree that serves as a
//! baseline, and a red black tree that rebalances itself on every insertion.
//!
//! Both trees accept any `T: Ord`, keep duplicate keys (equal keys are routed right), and report
//! absence with `false` rather than an error. Every walk over a tree is iterative, so a fully
//! degenerate unbalanced tree can be searched, traversed, measured and dropped without exhausting
//! the call stack.
//!
//! # Examples
//!
//! ```
//! use search_trees::{OrderedTree, TreeKind};
//!
//! for kind in TreeKind::ALL.iter() {
//!     let mut tree = kind.build();
//!     for key in 1..=100 {
//!         tree.insert(key);
//!     }
//!     assert_eq!(tree.inorder().len(), 100);
//!     println!("{}: height {}", kind, tree.height());
//! }
//! ```

mod error;
mod traversal;

pub mod arena;
pub mod red_black_tree;
pub mod unbalanced_tree;

pub use crate::error::{Error, Result};
pub use crate::red_black_tree::RedBlackTree;
pub use crate::traversal::Traversal;
pub use crate::unbalanced_tree::UnbalancedTree;

use std::fmt;
use std::str::FromStr;

/// The operations shared by every tree in this crate.
///
/// This trait is object safe so that a driver can pick a tree at runtime with `TreeKind::build`.
pub trait OrderedTree<T> {
    /// Returns which kind of tree this is.
    fn kind(&self) -> TreeKind;

    /// Inserts a key into the tree, keeping any existing copies of it.
    fn insert(&mut self, key: T);

    /// Checks if a key exists in the tree.
    fn search(&self, key: &T) -> bool;

    /// Removes one occurrence of a key and returns whether it was present. Trees that cannot
    /// delete return `Error::UnsupportedOperation`.
    fn delete(&mut self, key: &T) -> Result<bool>;

    /// Returns the keys of the tree in the given traversal order.
    fn traverse(&self, order: Traversal) -> Vec<&T>;

    /// Returns the number of nodes on the longest path from the root to a leaf.
    fn height(&self) -> usize;

    /// Returns the number of keys in the tree, counting duplicates.
    fn len(&self) -> usize;

    /// Returns `true` if the tree is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the keys of the tree in ascending order.
    fn inorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Inorder)
    }

    /// Returns the keys of the tree, visiting each node before its subtrees.
    fn preorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Preorder)
    }

    /// Returns the keys of the tree, visiting each node after its subtrees.
    fn postorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Postorder)
    }
}

impl<T> OrderedTree<T> for UnbalancedTree<T>
where
    T: Ord,
{
    fn kind(&self) -> TreeKind {
        TreeKind::Unbalanced
    }

    fn insert(&mut self, key: T) {
        UnbalancedTree::insert(self, key)
    }

    fn search(&self, key: &T) -> bool {
        UnbalancedTree::search(self, key)
    }

    fn delete(&mut self, key: &T) -> Result<bool> {
        Ok(UnbalancedTree::delete(self, key))
    }

    fn traverse(&self, order: Traversal) -> Vec<&T> {
        UnbalancedTree::traverse(self, order)
    }

    fn height(&self) -> usize {
        UnbalancedTree::height(self)
    }

    fn len(&self) -> usize {
        UnbalancedTree::len(self)
    }
}

impl<T> OrderedTree<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn kind(&self) -> TreeKind {
        TreeKind::RedBlack
    }

    fn insert(&mut self, key: T) {
        RedBlackTree::insert(self, key)
    }

    fn search(&self, key: &T) -> bool {
        RedBlackTree::search(self, key)
    }

    fn delete(&mut self, _key: &T) -> Result<bool> {
        Err(Error::UnsupportedOperation {
            kind: TreeKind::RedBlack,
            operation: "delete",
        })
    }

    fn traverse(&self, order: Traversal) -> Vec<&T> {
        RedBlackTree::traverse(self, order)
    }

    fn height(&self) -> usize {
        RedBlackTree::height(self)
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }
}

/// The tree implementations available through `OrderedTree`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TreeKind {
    /// `UnbalancedTree<T>`.
    Unbalanced,
    /// `RedBlackTree<T>`.
    RedBlack,
}

impl TreeKind {
    /// Every tree kind.
    pub const ALL: [TreeKind; 2] = [TreeKind::Unbalanced, TreeKind::RedBlack];

    /// Returns the short name of the tree kind.
    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Unbalanced => "unbalanced",
            TreeKind::RedBlack => "red-black",
        }
    }

    /// Constructs a new, empty tree of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{OrderedTree, TreeKind};
    ///
    /// let mut tree = TreeKind::Unbalanced.build();
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&1), Ok(true));
    ///
    /// let mut tree = TreeKind::RedBlack.build();
    /// tree.insert(1);
    /// assert!(tree.delete(&1).is_err());
    /// ```
    pub fn build<T>(self) -> Box<dyn OrderedTree<T>>
    where
        T: Ord + 'static,
    {
        match self {
            TreeKind::Unbalanced => Box::new(UnbalancedTree::new()),
            TreeKind::RedBlack => Box::new(RedBlackTree::new()),
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{} tree", self.name()))
    }
}

impl FromStr for TreeKind {
    type Err = Error;

    /// Parses a tree kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::TreeKind;
    ///
    /// assert_eq!("bst".parse::<TreeKind>().unwrap(), TreeKind::Unbalanced);
    /// assert_eq!("Red-Black".parse::<TreeKind>().unwrap(), TreeKind::RedBlack);
    /// assert!("avl".parse::<TreeKind>().is_err());
    /// ```
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbalanced" | "bst" => Ok(TreeKind::Unbalanced),
            "red-black" | "redblack" | "rbt" => Ok(TreeKind::RedBlack),
            _ => Err(Error::UnknownTreeKind(s.to_string())),
        }
    }
}
