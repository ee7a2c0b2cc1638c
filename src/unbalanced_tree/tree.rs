use crate::traversal::{self, Traversal};
use crate::unbalanced_tree::node::Node;
use log::debug;
use std::cmp::Ordering;
use std::vec::Vec;

pub type Link<T> = Option<Box<Node<T>>>;

// Equal keys are routed right, so duplicates end up after their equal predecessors.
fn insert<T>(mut tree: &mut Link<T>, key: T)
where
    T: Ord,
{
    while let Some(node) = tree {
        tree = if key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *tree = Some(Box::new(Node::new(key)));
}

fn contains<T>(tree: &Link<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree.as_deref();
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return true,
        };
    }
    false
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(mut tree: &mut Link<T>) -> Box<Node<T>> {
    while tree.as_ref().map_or(false, |node| node.left.is_some()) {
        tree = &mut tree.as_mut().expect("Expected a non-empty tree.").left;
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

fn remove<T>(mut tree: &mut Link<T>, key: &T) -> bool
where
    T: Ord,
{
    loop {
        let go_left = match tree {
            None => return false,
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => break,
            },
        };
        let node = tree.as_mut().expect("Expected a non-empty tree.");
        tree = if go_left {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            // The successor has no left child, so unlinking it is a single splice.
            let mut right = Some(right);
            let successor = remove_min(&mut right);
            node.key = successor.key;
            node.left = Some(left);
            node.right = right;
            Some(node)
        },
    };
    true
}

fn free<T>(tree: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// A binary search tree that performs no rebalancing.
///
/// Keys that compare less than a node go to its left subtree, every other key goes to its right
/// subtree. Duplicate keys are therefore retained and are yielded after their equal predecessors
/// by an inorder traversal. The height of the tree is the length of the insertion order's longest
/// increasing or decreasing run in the worst case, so every operation here is iterative.
///
/// # Examples
///
/// ```
/// use search_trees::unbalanced_tree::UnbalancedTree;
///
/// let mut tree = UnbalancedTree::new();
/// for key in &[50, 30, 70, 20, 40, 60, 80] {
///     tree.insert(*key);
/// }
///
/// assert!(tree.search(&40));
/// assert_eq!(tree.height(), 3);
///
/// assert!(tree.delete(&40));
/// assert!(!tree.delete(&40));
/// assert_eq!(tree.inorder(), vec![&20, &30, &50, &60, &70, &80]);
/// ```
pub struct UnbalancedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> UnbalancedTree<T> {
    /// Constructs a new, empty `UnbalancedTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let tree: UnbalancedTree<u32> = UnbalancedTree::new();
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        UnbalancedTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree. Inserting a key that already exists adds another copy of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        insert(&mut self.root, key);
        self.len += 1;
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&0));
    /// ```
    pub fn search(&self, key: &T) -> bool
    where
        T: Ord,
    {
        contains(&self.root, key)
    }

    /// Removes one occurrence of a key from the tree. Returns `true` if the key was present.
    ///
    /// A node with two children takes the key of its inorder successor, and the successor node is
    /// unlinked from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(1);
    /// assert!(tree.delete(&1));
    /// assert!(!tree.search(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let removed = remove(&mut self.root, key);
        if removed {
            self.len -= 1;
            debug!("Deleted a key from an unbalanced tree, {} keys remain.", self.len);
        }
        removed
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// for key in 1..=5 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        traversal::height(self.root.as_deref(), Node::children)
    }

    /// Returns the keys of the tree in the given traversal order.
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        traversal::traverse(self.root.as_deref(), order, Node::children, Node::key)
    }

    /// Returns the keys of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.inorder(), vec![&1, &2, &2]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Inorder)
    }

    /// Returns the keys of the tree, visiting each node before its subtrees.
    pub fn preorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Preorder)
    }

    /// Returns the keys of the tree, visiting each node after its subtrees.
    pub fn postorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Postorder)
    }

    /// Returns the number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        free(&mut self.root);
        self.len = 0;
        debug!("Cleared an unbalanced tree.");
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut curr = self.root.as_deref()?;
        while let Some(left) = curr.left.as_deref() {
            curr = left;
        }
        Some(&curr.key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut curr = self.root.as_deref()?;
        while let Some(right) = curr.right.as_deref() {
            curr = right;
        }
        Some(&curr.key)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::unbalanced_tree::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> UnbalancedTreeIter<'_, T> {
        UnbalancedTreeIter {
            current: self.root.as_deref(),
            stack: Vec::new(),
        }
    }
}

impl<T> Drop for UnbalancedTree<T> {
    fn drop(&mut self) {
        free(&mut self.root);
    }
}

impl<T> Default for UnbalancedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a UnbalancedTree<T>
where
    T: 'a,
{
    type IntoIter = UnbalancedTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `UnbalancedTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct UnbalancedTreeIter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for UnbalancedTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, UnbalancedTree};
    use crate::unbalanced_tree::node::Node;

    fn build(keys: &[u32]) -> UnbalancedTree<u32> {
        let mut tree = UnbalancedTree::new();
        for key in keys {
            tree.insert(*key);
        }
        tree
    }

    // A right-leaning chain built without going through `insert`, which is quadratic here.
    fn chain(len: u32) -> UnbalancedTree<u32> {
        let mut link: Link<u32> = None;
        for key in (0..len).rev() {
            let mut node = Box::new(Node::new(key));
            node.right = link;
            link = Some(node);
        }
        UnbalancedTree {
            root: link,
            len: len as usize,
        }
    }

    #[test]
    fn test_empty() {
        let tree: UnbalancedTree<u32> = UnbalancedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(!tree.search(&5));
        assert_eq!(tree.inorder(), Vec::<&u32>::new());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_single_node() {
        let tree = build(&[7]);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.preorder(), vec![&7]);
    }

    #[test]
    fn test_traversals() {
        let tree = build(&[5, 3, 7, 1, 4, 6, 8]);
        assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &6, &7, &8]);
        assert_eq!(tree.preorder(), vec![&5, &3, &1, &4, &7, &6, &8]);
        assert_eq!(tree.postorder(), vec![&1, &4, &3, &6, &8, &7, &5]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_search() {
        let tree = build(&[5, 3, 7, 1, 4, 6, 8]);
        for key in &[5, 3, 7, 1, 4, 6, 8] {
            assert!(tree.search(key));
        }
        assert!(!tree.search(&10));
        assert!(!tree.search(&0));
    }

    #[test]
    fn test_duplicates_route_right() {
        let tree = build(&[5, 5, 3, 5]);
        assert_eq!(tree.preorder(), vec![&5, &3, &5, &5]);
        assert_eq!(tree.inorder(), vec![&3, &5, &5, &5]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_degenerate_height() {
        let tree = build(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.height(), 5);

        let tree = build(&[5, 4, 3, 2, 1]);
        assert_eq!(tree.height(), 5);
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert!(tree.delete(&40));
        assert_eq!(tree.inorder(), vec![&20, &30, &50, &60, &70, &80]);
        assert_eq!(tree.preorder(), vec![&50, &30, &20, &70, &60, &80]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert!(!tree.delete(&999));
        assert_eq!(tree.preorder(), vec![&50, &30, &20, &40, &70, &60, &80]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_delete_one_child() {
        let mut tree = build(&[50, 30, 20]);
        assert!(tree.delete(&30));
        assert_eq!(tree.preorder(), vec![&50, &20]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_delete_two_children() {
        let mut tree = build(&[50, 30, 70, 20, 40, 60, 80, 65]);
        assert!(tree.delete(&50));
        assert_eq!(tree.preorder(), vec![&60, &30, &20, &40, &70, &65, &80]);
        assert!(!tree.search(&50));
    }

    #[test]
    fn test_delete_root_until_empty() {
        let mut tree = build(&[2, 1, 3]);
        assert!(tree.delete(&2));
        assert!(tree.delete(&3));
        assert!(tree.delete(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_delete_duplicate() {
        let mut tree = build(&[5, 5, 5]);
        assert!(tree.delete(&5));
        assert!(tree.search(&5));
        assert_eq!(tree.inorder(), vec![&5, &5]);
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[5, 3, 7, 1, 4, 6, 8]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&8));
    }

    #[test]
    fn test_iter() {
        let tree = build(&[5, 3, 7, 1, 4, 6, 8]);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), tree.inorder());
    }

    #[test]
    fn test_long_chain() {
        let mut tree = chain(200_000);
        assert_eq!(tree.height(), 200_000);
        assert_eq!(tree.postorder().first(), Some(&&199_999));
        assert_eq!(tree.iter().count(), 200_000);
        assert!(tree.delete(&0));
        assert_eq!(tree.height(), 199_999);
    }

    #[test]
    fn test_clear() {
        let mut tree = chain(200_000);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        tree.insert(1);
        assert_eq!(tree.inorder(), vec![&1]);
    }
}
