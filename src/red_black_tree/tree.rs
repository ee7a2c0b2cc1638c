use crate::arena::{Handle, TypedArena};
use crate::red_black_tree::node::{Color, Direction, Link, Node};
use crate::traversal::{self, Traversal};
use log::{debug, trace};
use std::cmp::Ordering;
use std::vec::Vec;

const DEFAULT_CHUNK_SIZE: usize = 1024;

/// An ordered multiset implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each node red or black.
/// The root is black, a red node never has a red child, and every path from a node down to an
/// absent child passes through the same number of black nodes. Together these keep the height of
/// the tree at most `2 * log2(n + 1)`.
///
/// Equal keys are routed right, exactly like `UnbalancedTree<T>`, so both trees produce the same
/// inorder sequence for the same insertions. Deletion is not supported.
///
/// # Examples
///
/// ```
/// use search_trees::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for key in 1..=100 {
///     tree.insert(key);
/// }
///
/// assert!(tree.search(&42));
/// assert!(!tree.search(&0));
/// assert!(tree.height() <= 14);
/// ```
pub struct RedBlackTree<T> {
    arena: TypedArena<Node<T>>,
    root: Link,
    len: usize,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackTree<T>` whose node storage grows `chunk_size` nodes at a
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_chunk_size(16);
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackTree {
            arena: TypedArena::new(chunk_size),
            root: None,
            len: 0,
        }
    }

    fn is_red(&self, link: Link) -> bool {
        match link {
            Some(handle) => self.arena[handle].is_red(),
            None => false,
        }
    }

    fn children(&self, handle: Handle) -> (Link, Link) {
        let node = &self.arena[handle];
        (node.left, node.right)
    }

    fn side_of(&self, child: Handle, parent: Handle) -> Direction {
        if self.arena[parent].left == Some(child) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    fn replace_child(&mut self, parent: Link, old_child: Handle, new_child: Link) {
        match parent {
            None => self.root = new_child,
            Some(parent) => {
                let side = self.side_of(old_child, parent);
                *self.arena[parent].child_mut(side) = new_child;
            },
        }
    }

    // Moves `node` down in `direction` and promotes its child on the opposite side.
    fn rotate(&mut self, node: Handle, direction: Direction) {
        trace!("Rotating {:?}.", direction);
        let child = self.arena[node]
            .child(direction.opposite())
            .expect("Expected rotated node to have a child opposite the rotation.");

        let inner = self.arena[child].child(direction);
        *self.arena[node].child_mut(direction.opposite()) = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        let parent = self.arena[node].parent;
        self.arena[child].parent = parent;
        self.replace_child(parent, node, Some(child));

        *self.arena[child].child_mut(direction) = Some(node);
        self.arena[node].parent = Some(child);
    }

    fn insert_fixup(&mut self, mut node: Handle) {
        while let Some(mut parent) = self.arena[node].parent {
            if !self.arena[parent].is_red() {
                break;
            }

            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a red node to have a parent.");
            let side = self.side_of(parent, grandparent);
            let uncle = self.arena[grandparent].child(side.opposite());

            if self.is_red(uncle) {
                trace!("Red uncle, recoloring and moving up to the grandparent.");
                self.arena[parent].color = Color::Black;
                if let Some(uncle) = uncle {
                    self.arena[uncle].color = Color::Black;
                }
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            if self.arena[parent].child(side.opposite()) == Some(node) {
                trace!("Inner grandchild, rotating it above its parent.");
                self.rotate(parent, side);
                node = parent;
                parent = self.arena[node]
                    .parent
                    .expect("Expected rotated node to have a parent.");
            }

            trace!("Outer grandchild, rotating the grandparent.");
            self.arena[parent].color = Color::Black;
            self.arena[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    /// Inserts a key into the tree and rebalances it. Inserting a key that already exists adds
    /// another copy of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.inorder(), vec![&1, &1]);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        let mut parent = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let side = if key < self.arena[handle].key {
                Direction::Left
            } else {
                Direction::Right
            };
            parent = Some((handle, side));
            curr = self.arena[handle].child(side);
        }

        let node = self
            .arena
            .allocate(Node::new(key, parent.map(|(handle, _)| handle)));
        match parent {
            None => self.root = Some(node),
            Some((parent, side)) => *self.arena[parent].child_mut(side) = Some(node),
        }
        self.len += 1;

        self.insert_fixup(node);
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&0));
    /// ```
    pub fn search(&self, key: &T) -> bool
    where
        T: Ord,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// height 0.
    pub fn height(&self) -> usize {
        traversal::height(self.root, move |handle| self.children(handle))
    }

    /// Returns the number of black nodes on any path from the root down to an absent child. An
    /// empty tree has black height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in &[50, 30, 70, 20] {
    ///     tree.insert(*key);
    /// }
    /// assert_eq!(tree.black_height(), 2);
    /// ```
    pub fn black_height(&self) -> usize {
        let mut black_height = 0;
        let mut curr = self.root;
        while let Some(handle) = curr {
            if !self.arena[handle].is_red() {
                black_height += 1;
            }
            curr = self.arena[handle].left;
        }
        black_height
    }

    /// Returns the keys of the tree in the given traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    /// use search_trees::Traversal;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in 1..=3 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.traverse(Traversal::Preorder), vec![&2, &1, &3]);
    /// ```
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        traversal::traverse(
            self.root,
            order,
            move |handle| self.children(handle),
            move |handle| &self.arena[handle].key,
        )
    }

    /// Returns the keys of the tree in ascending order.
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
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(!tree.search(&1));
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
        debug!("Cleared a red black tree.");
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut curr = self.root?;
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        Some(&self.arena[curr].key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut curr = self.root?;
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        Some(&self.arena[curr].key)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackTreeIter<'_, T> {
        RedBlackTreeIter {
            tree: self,
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T>
where
    T: 'a,
{
    type IntoIter = RedBlackTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct RedBlackTreeIter<'a, T> {
    tree: &'a RedBlackTree<T>,
    current: Link,
    stack: Vec<Handle>,
}

impl<'a, T> Iterator for RedBlackTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = tree.arena[handle].left;
        }
        let handle = self.stack.pop()?;
        self.current = tree.arena[handle].right;
        Some(&tree.arena[handle].key)
    }
}
