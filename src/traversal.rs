//! Traversal orders and the iterative walks shared by both trees.
//!
//! Every walk here uses an explicit stack or queue instead of recursion, since an unbalanced tree
//! built from sorted input has height equal to its size.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use std::vec::Vec;

/// The order in which a traversal visits the keys of a tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

impl Traversal {
    /// Every traversal order.
    pub const ALL: [Traversal; 3] = [Traversal::Inorder, Traversal::Preorder, Traversal::Postorder];

    /// Returns the lowercase name of the traversal order.
    pub fn name(self) -> &'static str {
        match self {
            Traversal::Inorder => "inorder",
            Traversal::Preorder => "preorder",
            Traversal::Postorder => "postorder",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Traversal {
    type Err = Error;

    /// Parses a traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::Traversal;
    ///
    /// assert_eq!("Preorder".parse::<Traversal>().unwrap(), Traversal::Preorder);
    /// assert_eq!("post".parse::<Traversal>().unwrap(), Traversal::Postorder);
    /// assert!("sideways".parse::<Traversal>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inorder" | "in" => Ok(Traversal::Inorder),
            "preorder" | "pre" => Ok(Traversal::Preorder),
            "postorder" | "post" => Ok(Traversal::Postorder),
            _ => Err(Error::UnknownTraversal(s.to_string())),
        }
    }
}

pub(crate) fn traverse<N, K, C, F>(root: Option<N>, order: Traversal, children: C, key: F) -> Vec<K>
where
    N: Copy,
    C: Fn(N) -> (Option<N>, Option<N>),
    F: Fn(N) -> K,
{
    match order {
        Traversal::Inorder => inorder(root, children, key),
        Traversal::Preorder => preorder(root, children, key),
        Traversal::Postorder => postorder(root, children, key),
    }
}

pub(crate) fn inorder<N, K, C, F>(root: Option<N>, children: C, key: F) -> Vec<K>
where
    N: Copy,
    C: Fn(N) -> (Option<N>, Option<N>),
    F: Fn(N) -> K,
{
    let mut ret = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = children(node).0;
        }
        match stack.pop() {
            Some(node) => {
                ret.push(key(node));
                curr = children(node).1;
            },
            None => return ret,
        }
    }
}

pub(crate) fn preorder<N, K, C, F>(root: Option<N>, children: C, key: F) -> Vec<K>
where
    N: Copy,
    C: Fn(N) -> (Option<N>, Option<N>),
    F: Fn(N) -> K,
{
    let mut ret = Vec::new();
    let mut stack: Vec<N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(key(node));
        let (left, right) = children(node);
        stack.extend(right);
        stack.extend(left);
    }
    ret
}

// Visits node, right, left and reverses the result.
pub(crate) fn postorder<N, K, C, F>(root: Option<N>, children: C, key: F) -> Vec<K>
where
    N: Copy,
    C: Fn(N) -> (Option<N>, Option<N>),
    F: Fn(N) -> K,
{
    let mut ret = Vec::new();
    let mut stack: Vec<N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(key(node));
        let (left, right) = children(node);
        stack.extend(left);
        stack.extend(right);
    }
    ret.reverse();
    ret
}

/// Number of nodes on the longest root-to-leaf path, counted one level at a time.
pub(crate) fn height<N, C>(root: Option<N>, children: C) -> usize
where
    N: Copy,
    C: Fn(N) -> (Option<N>, Option<N>),
{
    let mut height = 0;
    let mut level: Vec<N> = root.into_iter().collect();
    while !level.is_empty() {
        height += 1;
        let mut next_level = Vec::with_capacity(level.len() * 2);
        for node in level {
            let (left, right) = children(node);
            next_level.extend(left);
            next_level.extend(right);
        }
        level = next_level;
    }
    height
}
